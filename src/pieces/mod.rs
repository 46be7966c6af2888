// Per-piece move generation
// Each generator is a pure function of the board: no turn order, no self-check

pub mod bishop;
pub mod king;
pub mod knight;
pub mod pawn;
pub mod queen;
pub mod rook;

use crate::board::{Board, Color, PieceType};
use crate::square::{self, Square};

use bishop::BishopMoves;
use king::KingMoves;
use knight::KnightMoves;
use pawn::PawnMoves;
use queen::QueenMoves;
use rook::RookMoves;

/// Transient match state that some generators need but the board can't tell
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct MoveContext {
    /// Is the side to move currently in check? Gates castling.
    pub in_check: bool,
    /// Square of the pawn that just advanced two squares, if any
    pub en_passant: Option<Square>,
}

/// Generate the pseudo-legal destinations of whatever piece stands on `from`.
/// Returns an empty list for an empty square.
pub fn raw_moves(board: &Board, from: Square, ctx: &MoveContext) -> Vec<Square> {
    match board.piece_at(from).map(|p| p.piece_type) {
        None => Vec::new(),
        Some(PieceType::Pawn) => PawnMoves::generate_moves(board, from, ctx),
        Some(PieceType::Knight) => KnightMoves::generate_moves(board, from),
        Some(PieceType::Bishop) => BishopMoves::generate_moves(board, from),
        Some(PieceType::Rook) => RookMoves::generate_moves(board, from),
        Some(PieceType::Queen) => QueenMoves::generate_moves(board, from),
        Some(PieceType::King) => KingMoves::generate_moves(board, from, ctx),
    }
}

/// Helper: Add jump moves for leaper pieces (Knight, King steps)
/// Jump moves can leap over other pieces
pub(crate) fn add_jump_moves(
    moves: &mut Vec<Square>,
    board: &Board,
    from: Square,
    our_color: Color,
    offsets: &[(i8, i8)],
) {
    for &(dr, dc) in offsets {
        if let Some(to) = square::offset(from, dr, dc) {
            match board.piece_at(to) {
                None => moves.push(to),                            // Empty - can move
                Some(p) if p.color != our_color => moves.push(to), // Enemy - can capture
                _ => {}                                            // Own piece - blocked
            }
        }
    }
}

/// Helper: Add sliding moves along each direction until blocked
pub(crate) fn add_sliding_moves(
    moves: &mut Vec<Square>,
    board: &Board,
    from: Square,
    our_color: Color,
    directions: &[(i8, i8)],
) {
    for &(dr, dc) in directions {
        let mut current = from;
        while let Some(to) = square::offset(current, dr, dc) {
            match board.piece_at(to) {
                None => {
                    // Empty square - can move here, continue searching
                    moves.push(to);
                    current = to;
                }
                Some(p) => {
                    if p.color != our_color {
                        // Enemy piece - can capture
                        moves.push(to);
                    }
                    // Blocked by a piece (own or enemy), stop this direction
                    break;
                }
            }
        }
    }
}

pub(crate) const ORTHOGONALS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub(crate) const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
