/// Here we define associated movements, captures or
/// other traits with this piece, the almighty King !!
use crate::board::{Board, Color, PieceType};
use crate::pieces::{add_jump_moves, MoveContext};
use crate::square::{self, Square};

/// King's 8 directions
const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// KingMoves is an Unit Struct, namespace to group related functions together.
pub struct KingMoves;

impl KingMoves {
    // Functions are grouped under KingMoves
    pub fn generate_moves(board: &Board, from: Square, ctx: &MoveContext) -> Vec<Square> {
        let mut moves = Vec::with_capacity(10);

        // Get the king that's moving
        let king = match board.piece_at(from) {
            Some(p) => p,
            None => return moves, // No piece at 'from', return empty
        };

        add_jump_moves(&mut moves, board, from, king.color, &KING_STEPS);

        // Castling: king never moved and not in check.
        // Squares the king passes over are not tested for attacks.
        if king.move_count == 0 && !ctx.in_check {
            // Kingside: rook three columns to the right
            if Self::rook_can_castle(board, from, 3, king.color)
                && Self::path_is_empty(board, from, &[1, 2])
            {
                if let Some(to) = square::offset(from, 0, 2) {
                    moves.push(to);
                }
            }
            // Queenside: rook four columns to the left
            if Self::rook_can_castle(board, from, -4, king.color)
                && Self::path_is_empty(board, from, &[-1, -2, -3])
            {
                if let Some(to) = square::offset(from, 0, -2) {
                    moves.push(to);
                }
            }
        }

        moves // Return all valid squares
    }

    /// Is there an unmoved rook of our color `dc` columns away on the king's row?
    fn rook_can_castle(board: &Board, from: Square, dc: i8, color: Color) -> bool {
        square::offset(from, 0, dc)
            .and_then(|sq| board.piece_at(sq))
            .map_or(false, |p| {
                p.piece_type == PieceType::Rook && p.color == color && p.move_count == 0
            })
    }

    fn path_is_empty(board: &Board, from: Square, columns: &[i8]) -> bool {
        columns.iter().all(|&dc| {
            square::offset(from, 0, dc).map_or(false, |sq| !board.is_occupied(sq))
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
