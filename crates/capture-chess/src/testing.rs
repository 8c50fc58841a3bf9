//! Scripted rules engine for exercising the turn controller without chess.
//!
//! Every legal move is declared up front with the properties the controller
//! cares about (does it capture, does it end the game, may the mover keep the
//! turn afterwards and still have a move). Positions only track whose move it
//! is and how the game ended.
//!
//! # Example
//!
//! ```
//! use capture_chess::testing::{ScriptedMove, ScriptedRules};
//! use capture_chess::TurnController;
//!
//! let rules = ScriptedRules::new().with_move("take", ScriptedMove::capture());
//! let controller = TurnController::new(rules);
//! let snapshot = controller.apply_move(Some("take")).unwrap();
//! assert_eq!(snapshot.moves_left, 2);
//! ```

use std::collections::BTreeMap;

use crate::error::RulesError;
use crate::rules::RulesEngine;
use crate::types::{Color, GameResult};

/// Behaviour of one scripted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptedMove {
    capture: bool,
    ends: Option<GameResult>,
    refuse_hand_back: bool,
    strands_mover: bool,
}

impl ScriptedMove {
    /// A non-capturing move.
    #[must_use]
    pub const fn quiet() -> Self {
        Self {
            capture: false,
            ends: None,
            refuse_hand_back: false,
            strands_mover: false,
        }
    }

    /// A capturing move.
    #[must_use]
    pub const fn capture() -> Self {
        Self {
            capture: true,
            ends: None,
            refuse_hand_back: false,
            strands_mover: false,
        }
    }

    /// The game ends with `result` once this move is played.
    #[must_use]
    pub const fn ending(mut self, result: GameResult) -> Self {
        self.ends = Some(result);
        self
    }

    /// The mover may not keep the turn after this move.
    #[must_use]
    pub const fn refusing_hand_back(mut self) -> Self {
        self.refuse_hand_back = true;
        self
    }

    /// The mover may keep the turn after this move but has nothing to play.
    #[must_use]
    pub const fn stranding_mover(mut self) -> Self {
        self.strands_mover = true;
        self
    }
}

/// Position of a [`ScriptedRules`] game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedPosition {
    /// Side to move.
    pub side: Color,
    /// Plies played so far.
    pub plies: u32,
    /// Set once the game has ended.
    pub outcome: Option<GameResult>,
    /// Whether the last ply forbids handing the move back.
    pub locked: bool,
    /// Whether the last ply leaves its mover without a move once handed back.
    pub strands: bool,
    /// No move is legal here.
    pub stuck: bool,
}

impl Default for ScriptedPosition {
    fn default() -> Self {
        Self {
            side: Color::White,
            plies: 0,
            outcome: None,
            locked: false,
            strands: false,
            stuck: false,
        }
    }
}

/// A [`RulesEngine`] whose legal moves are a fixed script.
///
/// Tokens must be ASCII alphanumeric to parse. Any parsed token that is not
/// in the script is illegal. Every scripted move stays legal until the game
/// ends. Playing a move always passes the move to the other side, like a real
/// chess engine does.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRules {
    moves: BTreeMap<String, ScriptedMove>,
}

impl ScriptedRules {
    /// An engine with no legal moves.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `token` to the script.
    #[must_use]
    pub fn with_move(mut self, token: impl Into<String>, m: ScriptedMove) -> Self {
        self.moves.insert(token.into(), m);
        self
    }
}

impl RulesEngine for ScriptedRules {
    type Position = ScriptedPosition;
    type Move = String;

    fn starting_position(&self) -> ScriptedPosition {
        ScriptedPosition::default()
    }

    fn legal_moves(&self, position: &ScriptedPosition) -> Vec<String> {
        if position.outcome.is_some() || position.stuck {
            return Vec::new();
        }
        self.moves.keys().cloned().collect()
    }

    fn is_capture(&self, _position: &ScriptedPosition, m: &String) -> bool {
        self.moves.get(m).is_some_and(|m| m.capture)
    }

    fn apply_move(&self, position: &mut ScriptedPosition, m: &String) -> Result<(), RulesError> {
        let scripted = self
            .moves
            .get(m)
            .ok_or_else(|| RulesError::IllegalMove(m.clone()))?;
        position.side = position.side.opposite();
        position.plies += 1;
        position.outcome = scripted.ends;
        position.locked = scripted.refuse_hand_back;
        position.strands = scripted.strands_mover;
        position.stuck = false;
        Ok(())
    }

    fn is_game_over(&self, position: &ScriptedPosition) -> bool {
        position.outcome.is_some()
    }

    fn result(&self, position: &ScriptedPosition) -> GameResult {
        position.outcome.unwrap_or(GameResult::Unknown)
    }

    fn side_to_move(&self, position: &ScriptedPosition) -> Color {
        position.side
    }

    fn serialize(&self, position: &ScriptedPosition) -> String {
        let side = match position.side {
            Color::White => 'w',
            Color::Black => 'b',
        };
        format!("scripted {side} {}", position.plies)
    }

    fn parse_move(&self, _position: &ScriptedPosition, token: &str) -> Result<String, RulesError> {
        if token.is_empty() || !token.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(RulesError::InvalidMoveFormat(token.to_string()));
        }
        Ok(token.to_string())
    }

    fn retain_turn(&self, position: &mut ScriptedPosition, side: Color) -> Result<(), RulesError> {
        if position.side == side {
            return Ok(());
        }
        if position.locked {
            return Err(RulesError::CannotRetainTurn {
                side,
                reason: "scripted refusal".to_string(),
            });
        }
        position.side = side;
        position.stuck = position.strands;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_defines_legality() {
        let rules = ScriptedRules::new()
            .with_move("a", ScriptedMove::quiet())
            .with_move("b", ScriptedMove::capture());
        let pos = rules.starting_position();

        assert_eq!(rules.legal_moves(&pos), vec!["a".to_string(), "b".to_string()]);
        assert!(!rules.is_capture(&pos, &"a".to_string()));
        assert!(rules.is_capture(&pos, &"b".to_string()));
        assert!(rules.parse_move(&pos, "c").is_ok());
        assert!(rules.parse_move(&pos, "c-1").is_err());
    }

    #[test]
    fn apply_flips_side_and_records_outcome() {
        let rules = ScriptedRules::new()
            .with_move("mate", ScriptedMove::quiet().ending(GameResult::WhiteWins));
        let mut pos = rules.starting_position();

        rules.apply_move(&mut pos, &"mate".to_string()).unwrap();
        assert_eq!(pos.side, Color::Black);
        assert_eq!(rules.serialize(&pos), "scripted b 1");
        assert!(rules.is_game_over(&pos));
        assert_eq!(rules.result(&pos), GameResult::WhiteWins);
        assert!(rules.legal_moves(&pos).is_empty());
    }

    #[test]
    fn hand_back_can_be_refused() {
        let rules = ScriptedRules::new()
            .with_move("a", ScriptedMove::quiet())
            .with_move("b", ScriptedMove::quiet().refusing_hand_back());
        let mut pos = rules.starting_position();

        rules.apply_move(&mut pos, &"a".to_string()).unwrap();
        rules.retain_turn(&mut pos, Color::White).unwrap();
        assert_eq!(pos.side, Color::White);

        rules.apply_move(&mut pos, &"b".to_string()).unwrap();
        assert!(rules.retain_turn(&mut pos, Color::White).is_err());
        assert_eq!(pos.side, Color::Black);
    }

    #[test]
    fn stranded_mover_has_no_moves_after_hand_back() {
        let rules = ScriptedRules::new().with_move("a", ScriptedMove::quiet().stranding_mover());
        let mut pos = rules.starting_position();

        rules.apply_move(&mut pos, &"a".to_string()).unwrap();
        assert_eq!(rules.legal_moves(&pos).len(), 1);

        rules.retain_turn(&mut pos, Color::White).unwrap();
        assert!(rules.legal_moves(&pos).is_empty());
        assert!(!rules.is_game_over(&pos));
    }
}
