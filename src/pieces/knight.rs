/// Knight move generation
/// Jumps in an L-shape (2+1), leaping over anything in between
use crate::board::Board;
use crate::pieces::add_jump_moves;
use crate::square::Square;

/// Knight offsets: (±2, ±1) and (±1, ±2)
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1), (-2, 1), (-1, -2), (-1, 2),
    ( 1, -2), ( 1, 2), ( 2, -1), ( 2, 1),
];

pub struct KnightMoves;

impl KnightMoves {
    pub fn generate_moves(board: &Board, from: Square) -> Vec<Square> {
        let mut moves = Vec::with_capacity(8);

        let our_color = match board.piece_at(from) {
            Some(p) => p.color,
            None => return moves,
        };

        add_jump_moves(&mut moves, board, from, our_color, &KNIGHT_OFFSETS);

        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Color, PieceType};
    use crate::pieces::test_support::put;

    #[test]
    fn test_knight_center() {
        let mut board = Board::new();
        // Knight on d4 (row 4, col 3)
        put(&mut board, (4, 3), PieceType::Knight, Color::White);

        let moves = KnightMoves::generate_moves(&board, (4, 3));

        // From d4: c2, e2, b3, f3, b5, f5, c6, e6
        assert_eq!(moves.len(), 8);
        assert!(moves.contains(&(6, 2)), "Knight move to c2 should be possible");
        assert!(moves.contains(&(6, 4)), "Knight move to e2 should be possible");
        assert!(moves.contains(&(2, 2)), "Knight move to c6 should be possible");
        assert!(moves.contains(&(3, 5)), "Knight move to f5 should be possible");
    }

    #[test]
    fn test_knight_corner() {
        let mut board = Board::new();
        put(&mut board, (0, 0), PieceType::Knight, Color::Black); // a8

        let moves = KnightMoves::generate_moves(&board, (0, 0));

        assert_eq!(moves.len(), 2, "Knight in corner should have 2 moves");
    }

    #[test]
    fn test_knight_jumps_over_and_captures() {
        let mut board = Board::new();
        // Knight on b1 boxed in by pawns still jumps
        put(&mut board, (7, 1), PieceType::Knight, Color::White);
        for col in 0..3 {
            put(&mut board, (6, col), PieceType::Pawn, Color::White);
        }
        // Own piece on d2, enemy on c3
        put(&mut board, (6, 3), PieceType::Pawn, Color::White);
        put(&mut board, (5, 2), PieceType::Bishop, Color::Black);

        let moves = KnightMoves::generate_moves(&board, (7, 1));

        assert!(moves.contains(&(5, 0)), "a3 reachable over the pawns");
        assert!(moves.contains(&(5, 2)), "Can capture enemy on c3");
        assert!(!moves.contains(&(6, 3)), "Should not capture own piece on d2");
        assert_eq!(moves.len(), 2);
    }
}
