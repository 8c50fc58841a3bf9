//! The turn controller: one match, one lock, three operations.
//!
//! Every operation holds the match lock for its whole duration, so a caller
//! never sees a position that has moved without its allowance being re-armed.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::config::MatchConfig;
use crate::error::{ConfigError, MoveError};
use crate::rules::RulesEngine;
use crate::state::MatchState;
use crate::status::status_message;
use crate::types::Color;

/// What callers see of the match after an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// FEN of the current position.
    pub fen: String,
    /// Whether the game has ended.
    pub is_game_over: bool,
    /// Human-readable status line.
    pub status_message: String,
    /// Plies the side to move may still play.
    pub moves_left: u32,
    /// The side to move.
    pub side_to_move: Color,
}

/// Owns the match and applies the capture-bonus turn rule on top of a
/// [`RulesEngine`].
pub struct TurnController<R: RulesEngine> {
    rules: R,
    config: MatchConfig,
    state: Mutex<MatchState<R::Position>>,
}

impl<R: RulesEngine> TurnController<R> {
    /// A controller with the default allowances, at the starting position.
    pub fn new(rules: R) -> Self {
        let config = MatchConfig::default();
        let state = MatchState::new(&rules, &config);
        Self {
            rules,
            config,
            state: Mutex::new(state),
        }
    }

    /// A controller with custom allowances, at the starting position.
    pub fn with_config(rules: R, config: MatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = MatchState::new(&rules, &config);
        Ok(Self {
            rules,
            config,
            state: Mutex::new(state),
        })
    }

    /// A controller resuming an existing match.
    ///
    /// The next [`new_game`](Self::new_game) still starts from the engine's
    /// starting position.
    pub fn from_state(
        rules: R,
        config: MatchConfig,
        state: MatchState<R::Position>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            rules,
            config,
            state: Mutex::new(state),
        })
    }

    /// The rules engine in use.
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// The allowances in use.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Current snapshot. No side effects.
    pub fn get_state(&self) -> Snapshot {
        let state = self.state.lock();
        self.snapshot(&state)
    }

    /// Discard the current match and start a new one.
    pub fn new_game(&self) -> Snapshot {
        let mut state = self.state.lock();
        *state = MatchState::new(&self.rules, &self.config);
        tracing::info!(moves_left = state.moves_left(), "new game started");
        self.snapshot(&state)
    }

    /// Validate and play `token` for the side to move.
    ///
    /// Checks run in order: game over, missing token, unparsable token, illegal
    /// move. Any failure leaves the match untouched.
    ///
    /// An accepted ply spends one unit of allowance. When the allowance runs
    /// out the move passes and the next mover gets the capture bonus if this
    /// ply captured, the standard allowance otherwise. While allowance remains
    /// the same side keeps the move.
    pub fn apply_move(&self, token: Option<&str>) -> Result<Snapshot, MoveError> {
        let mut state = self.state.lock();

        let result = self.play(&mut state, token);
        if let Err(err) = &result {
            tracing::debug!(token = token.unwrap_or_default(), error = %err, "move rejected");
        }
        result.map(|()| self.snapshot(&state))
    }

    fn play(
        &self,
        state: &mut MatchState<R::Position>,
        token: Option<&str>,
    ) -> Result<(), MoveError> {
        let position = state.position();

        if self.rules.is_game_over(position) {
            return Err(MoveError::GameOver);
        }

        let token = match token {
            Some(token) if !token.is_empty() => token,
            _ => return Err(MoveError::MissingMove),
        };

        let m = self
            .rules
            .parse_move(position, token)
            .map_err(|_| MoveError::InvalidMoveFormat(token.to_string()))?;

        if !self.rules.legal_moves(position).contains(&m) {
            return Err(MoveError::IllegalMove(token.to_string()));
        }

        // Capture status belongs to the transition, so ask before playing.
        let was_capture = self.rules.is_capture(position, &m);
        let mover = self.rules.side_to_move(position);

        let mut next = position.clone();
        self.rules
            .apply_move(&mut next, &m)
            .map_err(|_| MoveError::IllegalMove(token.to_string()))?;

        let mut moves_left = state.moves_left() - 1;
        if moves_left == 0 {
            moves_left = self.config.rearm(was_capture);
        } else if !self.rules.is_game_over(&next) {
            // A hand-back that strands the mover would read as a stalemate.
            let mut retained = next.clone();
            match self.rules.retain_turn(&mut retained, mover) {
                Ok(()) if !self.rules.legal_moves(&retained).is_empty() => next = retained,
                Ok(()) => {
                    tracing::debug!(side = %mover, "turn passes early: no move to continue with");
                    moves_left = self.config.rearm(was_capture);
                }
                Err(err) => {
                    tracing::debug!(side = %mover, error = %err, "turn passes early");
                    moves_left = self.config.rearm(was_capture);
                }
            }
        }

        tracing::debug!(
            token,
            side = %mover,
            capture = was_capture,
            moves_left,
            "move applied"
        );

        *state.position_mut() = next;
        state.set_moves_left(moves_left);
        Ok(())
    }

    fn snapshot(&self, state: &MatchState<R::Position>) -> Snapshot {
        let position = state.position();
        Snapshot {
            fen: self.rules.serialize(position),
            is_game_over: self.rules.is_game_over(position),
            status_message: status_message(&self.rules, state),
            moves_left: state.moves_left(),
            side_to_move: self.rules.side_to_move(position),
        }
    }
}

impl<R: RulesEngine + Default> Default for TurnController<R> {
    fn default() -> Self {
        Self::new(R::default())
    }
}

impl<R: RulesEngine> std::fmt::Debug for TurnController<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TurnController")
            .field("config", &self.config)
            .field("moves_left", &self.state.lock().moves_left())
            .finish_non_exhaustive()
    }
}
