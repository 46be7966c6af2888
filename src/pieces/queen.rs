/// Queen move generation
/// Rook and Bishop combined: slides in all 8 directions
use crate::board::Board;
use crate::pieces::{add_sliding_moves, DIAGONALS, ORTHOGONALS};
use crate::square::Square;

pub struct QueenMoves;

impl QueenMoves {
    pub fn generate_moves(board: &Board, from: Square) -> Vec<Square> {
        let mut moves = Vec::with_capacity(27); // Queen can have up to 27 moves

        let our_color = match board.piece_at(from) {
            Some(p) => p.color,
            None => return moves,
        };

        add_sliding_moves(&mut moves, board, from, our_color, &ORTHOGONALS);
        add_sliding_moves(&mut moves, board, from, our_color, &DIAGONALS);

        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Color, PieceType};
    use crate::pieces::test_support::put;

    #[test]
    fn test_queen_corner() {
        let mut board = Board::new();
        // Queen on a1 (row 7, col 0)
        put(&mut board, (7, 0), PieceType::Queen, Color::White);

        let moves = QueenMoves::generate_moves(&board, (7, 0));

        // 7 up + 7 right + 7 diagonal
        assert_eq!(moves.len(), 21);
        assert!(moves.contains(&(0, 7)), "Queen move to h8 should be possible");
    }

    #[test]
    fn test_queen_start_position_is_boxed_in() {
        let mut board = Board::new();
        // Queen on d1 surrounded by its own pieces
        put(&mut board, (7, 3), PieceType::Queen, Color::White);
        put(&mut board, (7, 2), PieceType::Bishop, Color::White);
        put(&mut board, (7, 4), PieceType::King, Color::White);
        for col in 2..5 {
            put(&mut board, (6, col), PieceType::Pawn, Color::White);
        }

        assert!(QueenMoves::generate_moves(&board, (7, 3)).is_empty());
    }

    #[test]
    fn test_queen_captures_in_every_direction() {
        let mut board = Board::new();
        put(&mut board, (4, 4), PieceType::Queen, Color::Black);
        let targets = [(3, 4), (5, 4), (4, 3), (4, 5), (3, 3), (3, 5), (5, 3), (5, 5)];
        for &sq in &targets {
            put(&mut board, sq, PieceType::Knight, Color::White);
        }

        let moves = QueenMoves::generate_moves(&board, (4, 4));

        assert_eq!(moves.len(), 8, "Every ray ends on its first capture");
        for sq in targets {
            assert!(moves.contains(&sq));
        }
    }
}
