/// Bishop move generation
/// Slides along the four diagonals
use crate::board::Board;
use crate::pieces::{add_sliding_moves, DIAGONALS};
use crate::square::Square;

pub struct BishopMoves;

impl BishopMoves {
    pub fn generate_moves(board: &Board, from: Square) -> Vec<Square> {
        let mut moves = Vec::with_capacity(13); // Bishop can have up to 13 moves

        let our_color = match board.piece_at(from) {
            Some(p) => p.color,
            None => return moves,
        };

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
    fn test_bishop_center() {
        let mut board = Board::new();
        // Bishop on d4 (row 4, col 3)
        put(&mut board, (4, 3), PieceType::Bishop, Color::White);

        let moves = BishopMoves::generate_moves(&board, (4, 3));

        assert_eq!(moves.len(), 13, "Bishop on d4 should have 13 moves");
        assert!(moves.contains(&(0, 7)), "Should reach h8");
        assert!(moves.contains(&(7, 0)), "Should reach a1");
        assert!(moves.contains(&(1, 0)), "Should reach a7");
        assert!(moves.contains(&(7, 6)), "Should reach g1");
        assert!(!moves.contains(&(4, 4)), "Bishop should not move sideways");
    }

    #[test]
    fn test_bishop_capture_stops_ray() {
        let mut board = Board::new();
        put(&mut board, (4, 3), PieceType::Bishop, Color::Black);
        // Enemy on f6, own piece on b2
        put(&mut board, (2, 5), PieceType::Pawn, Color::White);
        put(&mut board, (6, 1), PieceType::Pawn, Color::Black);

        let moves = BishopMoves::generate_moves(&board, (4, 3));

        assert!(moves.contains(&(2, 5)), "Should capture on f6");
        assert!(!moves.contains(&(1, 6)), "Should not slide past f6");
        assert!(moves.contains(&(5, 2)), "c3 is empty");
        assert!(!moves.contains(&(6, 1)), "Should not capture own pawn on b2");
    }

    #[test]
    fn test_bishop_fully_blocked() {
        let mut board = Board::new();
        // Bishop on c1 behind its own pawns on b2 and d2
        put(&mut board, (7, 2), PieceType::Bishop, Color::White);
        put(&mut board, (6, 1), PieceType::Pawn, Color::White);
        put(&mut board, (6, 3), PieceType::Pawn, Color::White);

        assert!(BishopMoves::generate_moves(&board, (7, 2)).is_empty());
    }
}
