/// Pawn move generation
/// Pushes forward, captures diagonally, and takes en passant when the match allows it
use crate::board::{Board, PieceType};
use crate::pieces::MoveContext;
use crate::square::{self, Square};

pub struct PawnMoves;

impl PawnMoves {
    pub fn generate_moves(board: &Board, from: Square, ctx: &MoveContext) -> Vec<Square> {
        let mut moves = Vec::with_capacity(4);

        let pawn = match board.piece_at(from) {
            Some(p) => p,
            None => return moves,
        };
        let forward = pawn.color.forward();

        // Single and double push
        if let Some(one) = square::offset(from, forward, 0) {
            if !board.is_occupied(one) {
                moves.push(one);

                if from.0 == pawn.color.pawn_row() {
                    if let Some(two) = square::offset(from, 2 * forward, 0) {
                        if !board.is_occupied(two) {
                            moves.push(two);
                        }
                    }
                }
            }
        }

        // Diagonal captures
        for dc in [-1, 1] {
            if let Some(to) = square::offset(from, forward, dc) {
                if let Some(target) = board.piece_at(to) {
                    if target.color != pawn.color {
                        moves.push(to);
                    }
                }
            }
        }

        // En passant: the eligible pawn sits right beside us on the same row
        if let Some(victim_square) = ctx.en_passant {
            let beside = victim_square.0 == from.0 && victim_square.1.abs_diff(from.1) == 1;
            let is_enemy_pawn = board.piece_at(victim_square).map_or(false, |p| {
                p.piece_type == PieceType::Pawn && p.color != pawn.color
            });
            if beside && is_enemy_pawn {
                let dc = victim_square.1 as i8 - from.1 as i8;
                if let Some(to) = square::offset(from, forward, dc) {
                    if !board.is_occupied(to) {
                        moves.push(to);
                    }
                }
            }
        }

        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color;
    use crate::pieces::test_support::put;

    fn no_ctx() -> MoveContext {
        MoveContext::default()
    }

    #[test]
    fn test_pawn_double_push_from_start() {
        let mut board = Board::new();
        // White pawn on e2 (row 6, col 4)
        put(&mut board, (6, 4), PieceType::Pawn, Color::White);

        let moves = PawnMoves::generate_moves(&board, (6, 4), &no_ctx());

        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&(5, 4)), "e3");
        assert!(moves.contains(&(4, 4)), "e4");
    }

    #[test]
    fn test_black_pawn_moves_down() {
        let mut board = Board::new();
        // Black pawn on d7 (row 1, col 3)
        put(&mut board, (1, 3), PieceType::Pawn, Color::Black);

        let moves = PawnMoves::generate_moves(&board, (1, 3), &no_ctx());

        assert!(moves.contains(&(2, 3)), "d6");
        assert!(moves.contains(&(3, 3)), "d5");
        assert_eq!(moves.len(), 2);
    }

    #[test]
    fn test_pawn_single_push_off_start() {
        let mut board = Board::new();
        put(&mut board, (5, 4), PieceType::Pawn, Color::White); // e3

        let moves = PawnMoves::generate_moves(&board, (5, 4), &no_ctx());

        assert_eq!(moves, vec![(4, 4)], "Only one step once off the start row");
    }

    #[test]
    fn test_pawn_blocked() {
        let mut board = Board::new();
        put(&mut board, (6, 4), PieceType::Pawn, Color::White); // e2
        put(&mut board, (5, 4), PieceType::Knight, Color::Black); // e3

        assert!(
            PawnMoves::generate_moves(&board, (6, 4), &no_ctx()).is_empty(),
            "Pawns never capture straight ahead and can't jump"
        );

        let mut board = Board::new();
        put(&mut board, (6, 4), PieceType::Pawn, Color::White); // e2
        put(&mut board, (4, 4), PieceType::Knight, Color::Black); // e4

        assert_eq!(
            PawnMoves::generate_moves(&board, (6, 4), &no_ctx()),
            vec![(5, 4)],
            "Double push needs the landing square empty"
        );
    }

    #[test]
    fn test_pawn_diagonal_captures() {
        let mut board = Board::new();
        put(&mut board, (4, 4), PieceType::Pawn, Color::White); // e4
        put(&mut board, (3, 3), PieceType::Pawn, Color::Black); // d5
        put(&mut board, (3, 5), PieceType::Pawn, Color::White); // f5, own

        let moves = PawnMoves::generate_moves(&board, (4, 4), &no_ctx());

        assert!(moves.contains(&(3, 3)), "Capture on d5");
        assert!(!moves.contains(&(3, 5)), "No capture of own piece");
        assert!(moves.contains(&(3, 4)), "Push to e5");
        assert_eq!(moves.len(), 2);
    }

    #[test]
    fn test_pawn_on_last_row_has_no_moves() {
        let mut board = Board::new();
        put(&mut board, (0, 0), PieceType::Pawn, Color::White); // a8

        assert!(PawnMoves::generate_moves(&board, (0, 0), &no_ctx()).is_empty());
    }

    #[test]
    fn test_en_passant() {
        let mut board = Board::new();
        // White pawn on e5, black pawn just arrived on d5
        put(&mut board, (3, 4), PieceType::Pawn, Color::White);
        put(&mut board, (3, 3), PieceType::Pawn, Color::Black);
        let ctx = MoveContext {
            in_check: false,
            en_passant: Some((3, 3)),
        };

        let moves = PawnMoves::generate_moves(&board, (3, 4), &ctx);
        assert!(moves.contains(&(2, 3)), "En passant onto d6");

        let moves = PawnMoves::generate_moves(&board, (3, 4), &no_ctx());
        assert!(!moves.contains(&(2, 3)), "Nothing to take without eligibility");
    }

    #[test]
    fn test_en_passant_needs_adjacent_enemy_pawn() {
        let mut board = Board::new();
        put(&mut board, (3, 4), PieceType::Pawn, Color::White); // e5
        put(&mut board, (3, 2), PieceType::Pawn, Color::Black); // c5, not adjacent
        put(&mut board, (3, 5), PieceType::Pawn, Color::White); // f5, own pawn

        for eligible in [(3, 2), (3, 5)] {
            let ctx = MoveContext {
                in_check: false,
                en_passant: Some(eligible),
            };
            let moves = PawnMoves::generate_moves(&board, (3, 4), &ctx);
            assert_eq!(moves, vec![(2, 4)], "Only the push to e6 for {:?}", eligible);
        }
    }
}
