//! Capture-bonus chess.
//!
//! A chess variant where a turn can span more than one ply: every side gets
//! one move per turn, except that the side following a turn which ended on a
//! capture gets two.
//!
//! The crate is the turn logic only. Chess rules come from a [`RulesEngine`]
//! (shakmaty by default), and HTTP lives in `capture-chess-server`.
//!
//! ```
//! use capture_chess::{ShakmatyRules, TurnController};
//!
//! let controller = TurnController::new(ShakmatyRules::new());
//! let snapshot = controller.apply_move(Some("e2e4")).unwrap();
//! assert_eq!(snapshot.status_message, "Black to move (1 move left)");
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod rules;
pub mod state;
pub mod status;
pub mod testing;
pub mod types;

pub use config::MatchConfig;
pub use controller::{Snapshot, TurnController};
pub use error::{ConfigError, MoveError, RulesError};
pub use rules::{ChessPosition, RulesEngine, ShakmatyRules};
pub use state::MatchState;
pub use types::{Color, GameResult};
