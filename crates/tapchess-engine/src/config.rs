//! Engine configuration.

use serde::{Deserialize, Serialize};

/// How en passant destinations are offered to a pawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnPassantRule {
    /// Only immediately after an adjacent enemy pawn double-stepped.
    #[default]
    Standard,
    /// Whenever an enemy pawn stands beside the capturing pawn, regardless
    /// of how or when it got there.
    Geometric,
}

/// Rule switches for a [`ChessEngine`](crate::ChessEngine).
///
/// Deserializes from a table such as:
///
/// ```toml
/// en_passant = "geometric"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub en_passant: EnPassantRule,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_standard() {
        assert_eq!(EngineConfig::default().en_passant, EnPassantRule::Standard);
    }

    #[test]
    fn parse_from_toml() {
        let config: EngineConfig = toml::from_str(r#"en_passant = "geometric""#).unwrap();
        assert_eq!(config.en_passant, EnPassantRule::Geometric);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config: EngineConfig = toml::from_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn unknown_rule_is_rejected() {
        assert!(toml::from_str::<EngineConfig>(r#"en_passant = "sometimes""#).is_err());
    }
}
