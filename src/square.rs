// Square notation
// Converts between algebraic notation ("e4") and internal (row, col) squares

use crate::error::ChessError;

/// Square coordinate (row, col) where 0-7
/// Row 0 = rank 8 (black's back rank)
/// Row 7 = rank 1 (white's back rank)
/// Col 0 = file a, Col 7 = file h
pub type Square = (u8, u8);

/// Convert a square to algebraic notation (e.g., (7, 4) -> "e1")
///
/// Off-board squares come out as the raw tuple, e.g. "(8, 0)".
pub fn square_name(square: Square) -> String {
    if !on_board(square) {
        return format!("{:?}", square);
    }
    let col = (b'a' + square.1) as char;
    let row = (b'8' - square.0) as char;
    format!("{}{}", col, row)
}

/// Parse algebraic notation to a square (e.g., "e1" -> (7, 4))
///
/// Accepts exactly one file letter and one rank digit. The file letter is
/// case-insensitive and surrounding whitespace is ignored.
pub fn parse_square(s: &str) -> Result<Square, ChessError> {
    let invalid = || ChessError::InvalidSquare(s.to_string());

    let mut chars = s.trim().chars();
    let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
        (Some(file), Some(rank), None) => (file.to_ascii_lowercase(), rank),
        _ => return Err(invalid()),
    };

    if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
        return Err(invalid());
    }

    let col = file as u8 - b'a';
    let row = b'8' - rank as u8;
    Ok((row, col))
}

/// Parse a move written as two squares, with or without a separator
/// (e.g., "e2e4", "e2 e4", "e2-e4")
pub fn parse_move(s: &str) -> Result<(Square, Square), ChessError> {
    let compact: String = s
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    if compact.len() != 4 || !compact.is_ascii() {
        return Err(ChessError::InvalidSquare(s.to_string()));
    }
    let from = parse_square(&compact[0..2])?;
    let to = parse_square(&compact[2..4])?;
    Ok((from, to))
}

/// Is (row, col) on the 8x8 board?
pub fn in_bounds(row: i8, col: i8) -> bool {
    (0..8).contains(&row) && (0..8).contains(&col)
}

/// Is the square on the 8x8 board?
pub fn on_board(square: Square) -> bool {
    square.0 < 8 && square.1 < 8
}

/// Step from a square by (dr, dc). Returns None when the result is off the board.
pub fn offset(from: Square, dr: i8, dc: i8) -> Option<Square> {
    let new_row = from.0 as i8 + dr;
    let new_col = from.1 as i8 + dc;
    if in_bounds(new_row, new_col) {
        Some((new_row as u8, new_col as u8))
    } else {
        None
    }
}
