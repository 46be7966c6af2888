// Error types for the rules engine

use crate::board::Color;

/// Everything that can go wrong when talking to a match.
///
/// Rule violations are recoverable: the match state is untouched and the
/// caller can ask for another move. `NoPendingPromotion` and `MissingKing`
/// mean the caller or the position is broken, see [`ChessError::is_fatal`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    #[error("invalid square notation: {0:?}")]
    InvalidSquare(String),

    #[error("there is no piece on start position {0}")]
    NoPieceAtStart(String),

    #[error("the chosen piece on {0} is not yours")]
    NotYourPiece(String),

    #[error("there are no possible moves for the piece on {0}")]
    NoPossibleMoves(String),

    #[error("the chosen piece can't move from {from} to {to}")]
    IllegalTarget { from: String, to: String },

    #[error("you can't put yourself in check")]
    SelfCheck,

    #[error("the game is over: {0:?} is checkmated")]
    GameOver(Color),

    #[error("there is no piece to be promoted")]
    NoPendingPromotion,

    #[error("invalid setup: {0}")]
    InvalidSetup(String),

    #[error("there is no {0:?} king on the board")]
    MissingKing(Color),
}

impl ChessError {
    /// Errors that signal a broken caller or a corrupted position rather than
    /// a bad move. These should not be caught and retried.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ChessError::NoPendingPromotion | ChessError::MissingKing(_))
    }
}
