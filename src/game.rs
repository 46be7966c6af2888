// Match orchestration
// Validates moves, applies them reversibly, and tracks check, checkmate and turns

use log::{debug, info, trace};

use crate::board::{Board, BoardSnapshot, Color, Piece, PieceDescriptor, PieceId, PieceType};
use crate::error::ChessError;
use crate::pieces::{self, MoveContext};
use crate::setup::Setup;
use crate::square::{self, square_name, Square};

/// 8x8 grid of destinations, true where the chosen piece may go
pub type MoveMask = [[bool; 8]; 8];

/// A piece taken off the board by a move, with what is needed to put it back
#[derive(Copy, Clone, Debug)]
struct Capture {
    piece: Piece,
    square: Square,
    /// Position the piece had in the active list
    index: usize,
}

/// Undo token returned by `make_move`; `unmake_move` restores the prior state exactly
#[derive(Copy, Clone, Debug)]
struct Move {
    from: Square,
    to: Square,
    captured: Option<Capture>,
    /// Rook relocation (from, to) when the move was a castling
    castling_rook: Option<(Square, Square)>,
}

/// One game of chess from setup to checkmate.
///
/// The match owns the board and every piece. Callers only get copies
/// ([`PieceDescriptor`], [`BoardSnapshot`]) so move counters and occupancy
/// can't be changed behind its back. All calls are synchronous; an embedding
/// application with several players must serialize access itself.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Match {
    board: Board,
    /// Ids of the pieces on the board, in setup order
    active: Vec<PieceId>,
    /// Location of every piece ever created, indexed by id; None once off the board
    locations: Vec<Option<Square>>,
    /// Pieces taken, in capture order
    captured: Vec<Piece>,
    turn: u32,
    current_player: Color,
    /// Is the side to move in check?
    check: bool,
    checkmate: bool,
    /// Pawn that advanced two squares on the previous move
    en_passant: Option<PieceId>,
    /// Pawn (or its replacement) waiting for a promotion choice
    promoted: Option<PieceId>,
}

impl Match {
    /// New match from the standard starting position, White to move
    pub fn new() -> Self {
        Self::from_setup(&Setup::standard(), Color::White)
    }

    /// New match from a custom position.
    ///
    /// The setup must have exactly one king per side. Check and checkmate
    /// of `first_player` are computed up front. A position where
    /// `first_player` is already mated hands the move to the winner, the
    /// same as after a mating move.
    pub fn with_setup(setup: &Setup, first_player: Color) -> Result<Self, ChessError> {
        setup.validate()?;
        let mut game = Self::from_setup(setup, first_player);
        game.update_status(first_player)?;
        if game.checkmate {
            info!("{:?} starts checkmated", first_player);
            game.current_player = first_player.opposite();
        }
        Ok(game)
    }

    fn from_setup(setup: &Setup, first_player: Color) -> Self {
        let mut game = Match {
            board: Board::new(),
            active: Vec::with_capacity(setup.placements.len()),
            locations: Vec::with_capacity(setup.placements.len()),
            captured: Vec::new(),
            turn: 1,
            current_player: first_player,
            check: false,
            checkmate: false,
            en_passant: None,
            promoted: None,
        };
        for placement in &setup.placements {
            let piece = game.spawn(placement.piece_type, placement.color);
            game.put(piece, placement.square);
            game.active.push(piece.id);
        }
        game
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Side to move; after checkmate, the side that gave mate
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    /// Is the side to move in check?
    pub fn is_check(&self) -> bool {
        self.check
    }

    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    /// Read-only copy of the board for rendering
    pub fn board_snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    pub fn piece_at(&self, square: Square) -> Option<PieceDescriptor> {
        self.board.piece_at(square).map(|p| p.descriptor())
    }

    /// How many times the piece on `square` has moved
    pub fn move_count_at(&self, square: Square) -> Option<u32> {
        self.board.piece_at(square).map(|p| p.move_count)
    }

    /// Captured pieces, oldest first
    pub fn captured_pieces(&self) -> Vec<PieceDescriptor> {
        self.captured.iter().map(|p| p.descriptor()).collect()
    }

    /// Pieces of one color still on the board, with their squares
    pub fn active_pieces(&self, color: Color) -> Vec<(Square, PieceDescriptor)> {
        self.squares_of(color)
            .into_iter()
            .filter_map(|sq| self.piece_at(sq).map(|p| (sq, p)))
            .collect()
    }

    /// Square an en passant capture would land on this move, if any
    pub fn en_passant_target(&self) -> Option<Square> {
        let id = self.en_passant?;
        let square = self.location(id)?;
        let pawn = self.board.piece_at(square)?;
        square::offset(square, -pawn.color.forward(), 0)
    }

    /// The freshly promoted piece, until a promotion choice is made or the next move
    pub fn pending_promotion(&self) -> Option<PieceDescriptor> {
        let square = self.location(self.promoted?)?;
        self.piece_at(square)
    }

    /// Destinations of the current player's piece on `start`, for highlighting.
    ///
    /// These are raw moves: they may still leave the own king in check.
    pub fn possible_moves(&self, start: Square) -> Result<MoveMask, ChessError> {
        check_on_board(start)?;
        let moves = self.validate_start(start)?;
        let mut mask = [[false; 8]; 8];
        for (row, col) in moves {
            mask[row as usize][col as usize] = true;
        }
        Ok(mask)
    }

    // =========================================================================
    // Moves
    // =========================================================================

    /// Play a move for the current player.
    ///
    /// Returns the captured piece, if any. A rejected move changes nothing.
    pub fn perform_move(
        &mut self,
        start: Square,
        target: Square,
    ) -> Result<Option<PieceDescriptor>, ChessError> {
        check_on_board(start)?;
        check_on_board(target)?;
        if self.checkmate {
            return Err(ChessError::GameOver(self.current_player.opposite()));
        }
        let moves = self.validate_start(start)?;
        if !moves.contains(&target) {
            return Err(ChessError::IllegalTarget {
                from: square_name(start),
                to: square_name(target),
            });
        }

        let mover = self.current_player;
        let mv = self.make_move(start, target)?;
        match self.is_attacked(mover) {
            Ok(false) => {}
            Ok(true) => {
                self.unmake_move(mv);
                debug!(
                    "{} -> {} rejected, {:?} king would be attacked",
                    square_name(start),
                    square_name(target),
                    mover
                );
                return Err(ChessError::SelfCheck);
            }
            Err(e) => {
                self.unmake_move(mv);
                return Err(e);
            }
        }

        let moved = self
            .board
            .piece_at(target)
            .ok_or_else(|| ChessError::NoPieceAtStart(square_name(start)))?;
        let captured = mv.captured.map(|c| c.piece.descriptor());
        debug!(
            "turn {}: {:?} {:?} {} -> {}{}",
            self.turn,
            mover,
            moved.piece_type,
            square_name(start),
            square_name(target),
            captured.map_or(String::new(), |c| format!(" takes {:?}", c.piece_type))
        );

        let is_pawn = moved.piece_type == PieceType::Pawn;
        self.en_passant = if is_pawn && start.0.abs_diff(target.0) == 2 {
            Some(moved.id)
        } else {
            None
        };

        self.promoted = None;
        if is_pawn && target.0 == moved.color.promotion_row() {
            self.promoted = Some(moved.id);
            self.replace_promoted(PieceType::Queen)?;
            info!("{:?} pawn promoted on {}", mover, square_name(target));
        }

        let opponent = mover.opposite();
        self.update_status(opponent)?;
        if self.checkmate {
            info!("{:?} is checkmated on turn {}", opponent, self.turn);
        } else {
            if self.check {
                info!("{:?} is in check", opponent);
            }
            self.next_turn();
        }

        Ok(captured)
    }

    /// Swap the pending promoted piece for a Bishop, Knight, Rook or Queen
    /// ("B", "N", "R", "Q").
    ///
    /// Any other choice leaves the pending piece as it is. Calling this with
    /// nothing pending is an integration error.
    pub fn resolve_promotion(&mut self, choice: &str) -> Result<PieceDescriptor, ChessError> {
        let pending_id = self.promoted.ok_or(ChessError::NoPendingPromotion)?;
        let piece_type = match PieceType::promotion_choice(choice) {
            Some(piece_type) => piece_type,
            None => {
                debug!("ignoring promotion choice {:?}", choice);
                return self
                    .location(pending_id)
                    .and_then(|sq| self.piece_at(sq))
                    .ok_or(ChessError::NoPendingPromotion);
            }
        };

        let promoted = self.replace_promoted(piece_type)?;
        self.promoted = None;
        info!("{:?} promotion resolved to {:?}", promoted.color, piece_type);

        // The new piece may give or lift check
        let defender = promoted.color.opposite();
        let was_checkmate = self.checkmate;
        self.update_status(defender)?;
        match (was_checkmate, self.checkmate) {
            (false, true) => {
                self.turn -= 1;
                self.current_player = promoted.color;
                info!("{:?} is checkmated on turn {}", defender, self.turn);
            }
            (true, false) => self.next_turn(),
            _ => {}
        }

        Ok(promoted)
    }

    fn validate_start(&self, start: Square) -> Result<Vec<Square>, ChessError> {
        let piece = self
            .board
            .piece_at(start)
            .ok_or_else(|| ChessError::NoPieceAtStart(square_name(start)))?;
        if piece.color != self.current_player {
            return Err(ChessError::NotYourPiece(square_name(start)));
        }
        let moves = pieces::raw_moves(&self.board, start, &self.context());
        if moves.is_empty() {
            return Err(ChessError::NoPossibleMoves(square_name(start)));
        }
        Ok(moves)
    }

    fn next_turn(&mut self) {
        self.turn += 1;
        self.current_player = self.current_player.opposite();
    }

    // =========================================================================
    // Reversible move primitive
    // =========================================================================

    /// Apply a move without any legality checks, returning the undo token
    fn make_move(&mut self, from: Square, to: Square) -> Result<Move, ChessError> {
        let mut piece = self
            .lift(from)
            .ok_or_else(|| ChessError::NoPieceAtStart(square_name(from)))?;

        // A pawn moving diagonally onto an empty square takes en passant
        let capture_square =
            if piece.piece_type == PieceType::Pawn && from.1 != to.1 && !self.board.is_occupied(to) {
                (from.0, to.1)
            } else {
                to
            };
        let captured = self.lift(capture_square).map(|victim| {
            let index = self
                .active
                .iter()
                .position(|&id| id == victim.id)
                .unwrap_or(self.active.len());
            if index < self.active.len() {
                self.active.remove(index);
            }
            self.captured.push(victim);
            Capture {
                piece: victim,
                square: capture_square,
                index,
            }
        });

        piece.increase_move_count();
        self.put(piece, to);

        let mut castling_rook = None;
        if piece.piece_type == PieceType::King && from.0 == to.0 {
            let rook_squares = if to.1 == from.1 + 2 {
                square::offset(from, 0, 3).zip(square::offset(from, 0, 1))
            } else if to.1 + 2 == from.1 {
                square::offset(from, 0, -4).zip(square::offset(from, 0, -1))
            } else {
                None
            };
            if let Some((rook_from, rook_to)) = rook_squares {
                if let Some(mut rook) = self.lift(rook_from) {
                    rook.increase_move_count();
                    self.put(rook, rook_to);
                    castling_rook = Some((rook_from, rook_to));
                }
            }
        }

        Ok(Move {
            from,
            to,
            captured,
            castling_rook,
        })
    }

    /// Exact inverse of `make_move`
    fn unmake_move(&mut self, mv: Move) {
        if let Some((rook_from, rook_to)) = mv.castling_rook {
            if let Some(mut rook) = self.lift(rook_to) {
                rook.decrease_move_count();
                self.put(rook, rook_from);
            }
        }

        if let Some(mut piece) = self.lift(mv.to) {
            piece.decrease_move_count();
            self.put(piece, mv.from);
        }

        if let Some(capture) = mv.captured {
            self.captured.pop();
            let index = capture.index.min(self.active.len());
            self.active.insert(index, capture.piece.id);
            self.put(capture.piece, capture.square);
        }

        trace!("undid {} -> {}", square_name(mv.from), square_name(mv.to));
    }

    fn lift(&mut self, square: Square) -> Option<Piece> {
        let piece = self.board.remove(square)?;
        if let Some(slot) = self.locations.get_mut(piece.id.0 as usize) {
            *slot = None;
        }
        Some(piece)
    }

    fn put(&mut self, piece: Piece, square: Square) {
        self.board.place(piece, square);
        if let Some(slot) = self.locations.get_mut(piece.id.0 as usize) {
            *slot = Some(square);
        }
    }

    /// Create a piece with a fresh id; it is not on the board yet
    fn spawn(&mut self, piece_type: PieceType, color: Color) -> Piece {
        let id = PieceId(self.locations.len() as u32);
        self.locations.push(None);
        Piece::new(id, piece_type, color)
    }

    /// Put a new piece of `piece_type` where the pending promotion stands
    fn replace_promoted(&mut self, piece_type: PieceType) -> Result<PieceDescriptor, ChessError> {
        let old_id = self.promoted.ok_or(ChessError::NoPendingPromotion)?;
        let square = self.location(old_id).ok_or(ChessError::NoPendingPromotion)?;
        let old = self.lift(square).ok_or(ChessError::NoPendingPromotion)?;

        let new_piece = self.spawn(piece_type, old.color);
        self.put(new_piece, square);
        if let Some(slot) = self.active.iter_mut().find(|id| **id == old_id) {
            *slot = new_piece.id;
        }
        self.promoted = Some(new_piece.id);

        Ok(new_piece.descriptor())
    }

    // =========================================================================
    // Check and checkmate
    // =========================================================================

    fn location(&self, id: PieceId) -> Option<Square> {
        self.locations.get(id.0 as usize).copied().flatten()
    }

    fn context(&self) -> MoveContext {
        MoveContext {
            in_check: self.check,
            en_passant: self.en_passant.and_then(|id| self.location(id)),
        }
    }

    /// Squares of the active pieces of one color, in active-list order
    fn squares_of(&self, color: Color) -> Vec<Square> {
        self.active
            .iter()
            .filter_map(|&id| self.location(id))
            .filter(|&sq| self.board.piece_at(sq).map_or(false, |p| p.color == color))
            .collect()
    }

    fn find_king(&self, color: Color) -> Result<Square, ChessError> {
        self.squares_of(color)
            .into_iter()
            .find(|&sq| {
                self.board
                    .piece_at(sq)
                    .map_or(false, |p| p.piece_type == PieceType::King)
            })
            .ok_or(ChessError::MissingKing(color))
    }

    /// Is the king of `color` attacked by any opposing piece?
    fn is_attacked(&self, color: Color) -> Result<bool, ChessError> {
        let king_square = self.find_king(color)?;
        let ctx = self.context();
        Ok(self
            .squares_of(color.opposite())
            .into_iter()
            .any(|sq| pieces::raw_moves(&self.board, sq, &ctx).contains(&king_square)))
    }

    /// Try every raw move of `color`; checkmate when none leaves the king safe
    fn is_checkmated(&mut self, color: Color) -> Result<bool, ChessError> {
        if !self.is_attacked(color)? {
            return Ok(false);
        }
        for from in self.squares_of(color) {
            let ctx = self.context();
            for to in pieces::raw_moves(&self.board, from, &ctx) {
                let mv = self.make_move(from, to)?;
                let still_attacked = self.is_attacked(color);
                self.unmake_move(mv);
                if !still_attacked? {
                    trace!("{:?} escapes with {} -> {}", color, square_name(from), square_name(to));
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    /// Recompute check and checkmate for the side that has to answer
    fn update_status(&mut self, defender: Color) -> Result<(), ChessError> {
        self.check = self.is_attacked(defender)?;
        self.checkmate = self.check && self.is_checkmated(defender)?;
        Ok(())
    }
}

fn check_on_board(square: Square) -> Result<(), ChessError> {
    if square::on_board(square) {
        Ok(())
    } else {
        Err(ChessError::InvalidSquare(square_name(square)))
    }
}

impl Default for Match {
    fn default() -> Self {
        Match::new()
    }
}

impl std::fmt::Display for Match {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.board)?;
        writeln!(f)?;
        writeln!(f, "Turn: {}", self.turn)?;
        if self.checkmate {
            writeln!(f, "CHECKMATE! Winner: {:?}", self.current_player)
        } else {
            writeln!(f, "Side to move: {:?}", self.current_player)?;
            if self.check {
                writeln!(f, "CHECK!")?;
            }
            Ok(())
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
