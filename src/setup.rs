// Starting positions
// A setup is an ordered list of placements; the standard one has 32 pieces

use serde::{Deserialize, Serialize};

use crate::board::{Color, PieceType};
use crate::error::ChessError;
use crate::square::{self, Square};

/// One piece standing on one square at the start of a match
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Placement {
    #[serde(with = "notation")]
    pub square: Square,
    pub piece_type: PieceType,
    pub color: Color,
}

/// Where every piece starts, in placement order
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Setup {
    pub placements: Vec<Placement>,
}

/// Back rank from file a to file h
const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

impl Setup {
    /// Empty setup, to be filled with [`Setup::with`] or [`Setup::push`]
    pub fn new() -> Self {
        Setup::default()
    }

    /// The usual 32-piece starting position
    pub fn standard() -> Self {
        let mut setup = Setup::new();
        for color in [Color::White, Color::Black] {
            let pawn_row = color.pawn_row();
            let back_row = color.back_row();
            for col in 0..8u8 {
                setup.push((pawn_row, col), PieceType::Pawn, color);
            }
            for (col, piece_type) in BACK_RANK.iter().enumerate() {
                setup.push((back_row, col as u8), *piece_type, color);
            }
        }
        setup
    }

    /// Builder: add a piece on a square given in algebraic notation
    pub fn with(mut self, notation: &str, piece_type: PieceType, color: Color) -> Result<Self, ChessError> {
        let square = square::parse_square(notation)?;
        self.push(square, piece_type, color);
        Ok(self)
    }

    pub fn push(&mut self, square: Square, piece_type: PieceType, color: Color) {
        self.placements.push(Placement {
            square,
            piece_type,
            color,
        });
    }

    /// A setup is playable when every square is on the board and used once,
    /// and each side has exactly one king.
    pub fn validate(&self) -> Result<(), ChessError> {
        let mut seen = [[false; 8]; 8];
        for placement in &self.placements {
            let (row, col) = placement.square;
            if row >= 8 || col >= 8 {
                return Err(ChessError::InvalidSetup(format!(
                    "square {:?} is off the board",
                    placement.square
                )));
            }
            if seen[row as usize][col as usize] {
                return Err(ChessError::InvalidSetup(format!(
                    "two pieces on {}",
                    square::square_name(placement.square)
                )));
            }
            seen[row as usize][col as usize] = true;
        }

        for color in [Color::White, Color::Black] {
            let kings = self
                .placements
                .iter()
                .filter(|p| p.piece_type == PieceType::King && p.color == color)
                .count();
            if kings != 1 {
                return Err(ChessError::InvalidSetup(format!(
                    "{:?} has {} kings, expected exactly one",
                    color, kings
                )));
            }
        }

        Ok(())
    }
}

/// Serialize squares as "e4" rather than [row, col]
mod notation {
    use serde::{de, Deserialize, Deserializer, Serializer};

    use crate::square::{self, Square};

    pub fn serialize<S>(sq: &Square, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&square::square_name(*sq))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Square, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        square::parse_square(&s).map_err(de::Error::custom)
    }
}
