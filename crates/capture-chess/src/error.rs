//! Error types for the turn controller and the rules engine.

/// Reasons a move request is rejected.
///
/// Every variant is recoverable: a rejected request leaves the match exactly
/// as it was. The `Display` text is the caller-facing message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The match has already concluded.
    #[error("Game is over")]
    GameOver,

    /// No move token was supplied, or it was empty.
    #[error("Move not provided")]
    MissingMove,

    /// The token does not parse under the rules engine's notation.
    #[error("Invalid move format: {0}")]
    InvalidMoveFormat(String),

    /// The token parses but is not legal in the current position.
    #[error("Illegal move: {0}")]
    IllegalMove(String),
}

impl MoveError {
    /// The offending token, for the variants that carry one.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::InvalidMoveFormat(token) | Self::IllegalMove(token) => Some(token),
            Self::GameOver | Self::MissingMove => None,
        }
    }
}

/// Failures reported by a [`RulesEngine`](crate::rules::RulesEngine).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    /// A FEN string could not be turned into a legal position.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// A move token is not valid notation.
    #[error("invalid move notation: {0}")]
    InvalidMoveFormat(String),

    /// The move is not playable in the position it was applied to.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// The move cannot be handed back to the side that just played.
    #[error("cannot hand the move back to {side}: {reason}")]
    CannotRetainTurn {
        /// Side that wanted to keep moving.
        side: crate::types::Color,
        /// Why the resulting position was rejected.
        reason: String,
    },
}

/// Invalid [`MatchConfig`](crate::config::MatchConfig) values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: {reason}")]
    Invalid { reason: String },
}
