// Chess Rules Library
// Board representation using Mailbox (8x8 array) approach

pub mod board;
pub mod error;
pub mod game;
pub mod pieces;
pub mod setup;
pub mod square;

pub use board::{BoardSnapshot, Color, PieceDescriptor, PieceType};
pub use error::ChessError;
pub use game::{Match, MoveMask};
pub use setup::{Placement, Setup};
pub use square::{parse_move, parse_square, square_name, Square};
