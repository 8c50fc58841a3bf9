//! The mutable match: a position plus the move allowance of the side to move.

use crate::config::MatchConfig;
use crate::rules::RulesEngine;

/// A match in progress.
///
/// `moves_left` is an overlay on the position's own side-to-move: it counts
/// the plies the side to move may still play before control passes.
#[derive(Debug, Clone)]
pub struct MatchState<P> {
    position: P,
    moves_left: u32,
}

impl<P: Clone> MatchState<P> {
    /// A fresh match from the engine's starting position.
    pub fn new<R>(rules: &R, config: &MatchConfig) -> Self
    where
        R: RulesEngine<Position = P>,
    {
        Self::from_position(rules.starting_position(), config.initial_moves)
    }

    /// A match resumed from an arbitrary position.
    ///
    /// A zero allowance is raised to 1.
    #[must_use]
    pub fn from_position(position: P, moves_left: u32) -> Self {
        Self {
            position,
            moves_left: moves_left.max(1),
        }
    }

    /// The current position.
    #[must_use]
    pub fn position(&self) -> &P {
        &self.position
    }

    /// Plies the side to move may still play.
    #[must_use]
    pub fn moves_left(&self) -> u32 {
        self.moves_left
    }

    pub(crate) fn position_mut(&mut self) -> &mut P {
        &mut self.position
    }

    pub(crate) fn set_moves_left(&mut self, moves_left: u32) {
        self.moves_left = moves_left;
    }
}
