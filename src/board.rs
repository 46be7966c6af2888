// Board representation and piece identities
// Using Mailbox (8x8 array) approach; the board knows nothing about chess rules

use serde::{Deserialize, Serialize};

use crate::square::{self, Square};

// =============================================================================
// Type Definitions
// =============================================================================

/// Color of a piece or side to move
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Returns the opposite color
    pub fn opposite(&self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row direction of this side's pawns (White moves toward row 0)
    pub fn forward(&self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row this side's pawns start on
    pub fn pawn_row(&self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row the king and rooks start on
    pub fn back_row(&self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Farthest row for this side's pawns, where they promote
    pub fn promotion_row(&self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

/// Type of a chess piece
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    /// Upper-case letter used for display (P, N, B, R, Q, K)
    pub fn letter(&self) -> char {
        match self {
            PieceType::Pawn => 'P',
            PieceType::Knight => 'N',
            PieceType::Bishop => 'B',
            PieceType::Rook => 'R',
            PieceType::Queen => 'Q',
            PieceType::King => 'K',
        }
    }

    /// Parse a piece a pawn may promote to ("B", "N", "R" or "Q", any case)
    pub fn promotion_choice(s: &str) -> Option<PieceType> {
        match s.trim().to_ascii_uppercase().as_str() {
            "B" => Some(PieceType::Bishop),
            "N" => Some(PieceType::Knight),
            "R" => Some(PieceType::Rook),
            "Q" => Some(PieceType::Queen),
            _ => None,
        }
    }
}

/// Identity of a piece for the lifetime of a match
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct PieceId(pub u32);

/// A chess piece on the board: identity, type, color and how often it has moved
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Piece {
    pub id: PieceId,
    pub piece_type: PieceType,
    pub color: Color,
    pub move_count: u32,
}

impl Piece {
    /// Create a new piece that has never moved
    pub fn new(id: PieceId, piece_type: PieceType, color: Color) -> Self {
        Piece {
            id,
            piece_type,
            color,
            move_count: 0,
        }
    }

    pub fn descriptor(&self) -> PieceDescriptor {
        PieceDescriptor {
            piece_type: self.piece_type,
            color: self.color,
        }
    }

    pub(crate) fn increase_move_count(&mut self) {
        self.move_count += 1;
    }

    pub(crate) fn decrease_move_count(&mut self) {
        self.move_count = self.move_count.saturating_sub(1);
    }
}

/// Read-only view of a piece handed out to callers (rendering, captured lists)
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct PieceDescriptor {
    pub piece_type: PieceType,
    pub color: Color,
}

impl PieceDescriptor {
    pub fn new(piece_type: PieceType, color: Color) -> Self {
        PieceDescriptor { piece_type, color }
    }

    /// Display letter: upper case for White, lower case for Black
    pub fn symbol(&self) -> char {
        let c = self.piece_type.letter();
        if self.color == Color::Black {
            c.to_ascii_lowercase()
        } else {
            c
        }
    }
}

/// 8x8 grid of optional piece descriptors, what the presentation layer renders
pub type BoardSnapshot = [[Option<PieceDescriptor>; 8]; 8];

// =============================================================================
// Board Structure
// =============================================================================

/// Chess board using Mailbox representation (8x8 array)
///
/// Coordinate system:
/// - squares[0][0] = a8 (top-left from white's perspective)
/// - squares[7][7] = h1 (bottom-right from white's perspective)
/// - squares[row][col] where row = 8 - rank, col = file
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    /// 8x8 array of squares, each containing an optional piece
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Is (row, col) a square of this board?
    pub fn in_bounds(&self, row: i8, col: i8) -> bool {
        square::in_bounds(row, col)
    }

    /// Get the piece at a given square
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        let (row, col) = square;
        if row < 8 && col < 8 {
            self.squares[row as usize][col as usize]
        } else {
            None
        }
    }

    pub fn is_occupied(&self, square: Square) -> bool {
        self.piece_at(square).is_some()
    }

    /// Put a piece on an empty square.
    ///
    /// Callers must remove whatever stands there first.
    pub fn place(&mut self, piece: Piece, square: Square) {
        let (row, col) = square;
        debug_assert!(row < 8 && col < 8, "square {:?} is off the board", square);
        debug_assert!(
            !self.is_occupied(square),
            "square {} is already occupied",
            square::square_name(square)
        );
        if row < 8 && col < 8 {
            self.squares[row as usize][col as usize] = Some(piece);
        }
    }

    /// Take the piece off a square, if any
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        let (row, col) = square;
        if row < 8 && col < 8 {
            self.squares[row as usize][col as usize].take()
        } else {
            None
        }
    }

    /// Copy of the board as piece descriptors only
    pub fn snapshot(&self) -> BoardSnapshot {
        let mut grid = [[None; 8]; 8];
        for (row, cells) in self.squares.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                grid[row][col] = cell.map(|p| p.descriptor());
            }
        }
        grid
    }
}

// =============================================================================
// Default Implementation
// =============================================================================

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

// =============================================================================
// Display Implementation (for debugging)
// =============================================================================

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        writeln!(f, "  +-+-+-+-+-+-+-+")?;

        for row in 0..8 {
            let rank = 8 - row; // Convert row to chess rank (8 to 1)
            write!(f, "{} ", rank)?;

            for col in 0..8 {
                let piece_char = match self.squares[row][col] {
                    None => '.',
                    Some(piece) => piece.descriptor().symbol(),
                };
                write!(f, "{} ", piece_char)?;
            }
            writeln!(f, "| {}", rank)?;
        }

        writeln!(f, "  +-+-+-+-+-+-+-+")?;
        writeln!(f, "  a b c d e f g h")?;

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
