//! Text rendering of the board for the terminal.

use crate::config::GlyphStyle;
use std::fmt::Write;
use tapchess_core::{Piece, Square};
use tapchess_engine::ChessEngine;

/// Draws the board, the side to move, and the status line.
///
/// Each square is three characters wide. The selected square is wrapped in
/// `[ ]`, a highlighted empty square shows `*`, and a highlighted capture
/// is wrapped in `* *`.
pub fn render(engine: &ChessEngine, glyphs: GlyphStyle) -> String {
    let mut out = String::new();

    out.push_str("   ");
    for col in 0..Square::SIZE {
        let _ = write!(out, " {} ", col);
    }
    out.push('\n');

    for row in 0..Square::SIZE as usize {
        let _ = write!(out, "{}  ", row);
        for col in 0..Square::SIZE as usize {
            let Some(sq) = Square::new(row, col) else {
                continue;
            };
            out.push_str(&cell(engine, sq, glyphs));
        }
        out.push('\n');
    }

    let _ = write!(out, "{} to move", engine.turn());
    let status = engine.status_text();
    if !status.is_empty() {
        let _ = write!(out, " | {}", status);
    }
    out.push('\n');
    out
}

fn cell(engine: &ChessEngine, sq: Square, glyphs: GlyphStyle) -> String {
    let piece = engine.piece_at(sq);
    let symbol = match piece {
        Some(piece) => glyph(piece, glyphs),
        None => empty_glyph(glyphs),
    };

    if engine.selected() == Some(sq) {
        format!("[{}]", symbol)
    } else if engine.is_highlighted(sq) {
        match piece {
            Some(_) => format!("*{}*", symbol),
            None => " * ".to_string(),
        }
    } else {
        format!(" {} ", symbol)
    }
}

fn glyph(piece: Piece, glyphs: GlyphStyle) -> char {
    match glyphs {
        GlyphStyle::Unicode => piece.glyph(),
        GlyphStyle::Ascii => piece.to_char(),
    }
}

fn empty_glyph(glyphs: GlyphStyle) -> char {
    match glyphs {
        GlyphStyle::Unicode => '·',
        GlyphStyle::Ascii => '.',
    }
}
