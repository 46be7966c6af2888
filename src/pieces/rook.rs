/// Rook move generation
/// Moves horizontally and vertically (orthogonally)
use crate::board::Board;
use crate::pieces::{add_sliding_moves, ORTHOGONALS};
use crate::square::Square;

pub struct RookMoves;

impl RookMoves {
    /// Generate all pseudo-legal moves for a Rook
    /// Rook slides horizontally and vertically
    pub fn generate_moves(board: &Board, from: Square) -> Vec<Square> {
        let mut moves = Vec::with_capacity(14); // Rook can have up to 14 moves

        // Get the color of the piece that's moving
        let our_color = match board.piece_at(from) {
            Some(p) => p.color,
            None => return moves, // No piece at 'from', return empty
        };

        add_sliding_moves(&mut moves, board, from, our_color, &ORTHOGONALS);

        moves
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
