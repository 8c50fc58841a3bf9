//! The chess rules the turn controller is layered on.
//!
//! The controller never looks inside a position. Everything structural
//! (legality, captures, game end, notation) goes through [`RulesEngine`], so
//! the controller can run against [`ShakmatyRules`] in production and against
//! a scripted fake in tests.

pub mod standard;

pub use standard::{ChessPosition, ShakmatyRules};

use crate::error::RulesError;
use crate::types::{Color, GameResult};

/// Capabilities the turn controller needs from a chess rules implementation.
pub trait RulesEngine: Send + Sync {
    /// Opaque board state.
    type Position: Clone + Send;
    /// A structural move, as produced by [`parse_move`](Self::parse_move).
    type Move: Clone + PartialEq + Send;

    /// The standard starting position.
    fn starting_position(&self) -> Self::Position;

    /// Every legal move in `position`.
    fn legal_moves(&self, position: &Self::Position) -> Vec<Self::Move>;

    /// Whether playing `m` in `position` captures a piece.
    ///
    /// Must be asked before the move is applied.
    fn is_capture(&self, position: &Self::Position, m: &Self::Move) -> bool;

    /// Play `m` on `position`.
    ///
    /// Callers check legality first; an error here means the move was not
    /// playable after all and `position` is left as it was.
    fn apply_move(&self, position: &mut Self::Position, m: &Self::Move) -> Result<(), RulesError>;

    /// Whether the game has ended in `position`.
    fn is_game_over(&self, position: &Self::Position) -> bool;

    /// Outcome of `position`. [`GameResult::Unknown`] while the game is running.
    fn result(&self, position: &Self::Position) -> GameResult;

    /// The side whose move it is.
    fn side_to_move(&self, position: &Self::Position) -> Color;

    /// FEN of `position`.
    fn serialize(&self, position: &Self::Position) -> String;

    /// Parse a token in the engine's exchange notation.
    ///
    /// A well-formed token that names no playable move still parses; it is
    /// rejected later by the legality check.
    fn parse_move(&self, position: &Self::Position, token: &str) -> Result<Self::Move, RulesError>;

    /// Give the move back to `side` after it has played a ply.
    ///
    /// Does nothing if `side` is already to move. Fails with
    /// [`RulesError::CannotRetainTurn`] when the resulting position would not
    /// be a legal one for `side` to move in, or would leave `side` without a
    /// legal move. On failure `position` is left as it was.
    fn retain_turn(&self, position: &mut Self::Position, side: Color) -> Result<(), RulesError>;
}
