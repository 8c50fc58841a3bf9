//! Standard chess rules backed by shakmaty.

use shakmaty::{
    fen::Fen,
    uci::UciMove,
    zobrist::{Zobrist64, ZobristHash},
    CastlingMode, Chess, EnPassantMode, FromSetup, Position,
};

use crate::error::RulesError;
use crate::rules::RulesEngine;
use crate::types::{Color, GameResult};

/// Plies without a capture or pawn move after which the game is drawn.
const SEVENTY_FIVE_MOVE_PLIES: u32 = 150;

/// Occurrences of one position after which the game is drawn.
const FIVEFOLD_REPETITION: usize = 5;

/// A shakmaty position plus the repetition history it was reached with.
#[derive(Debug, Clone)]
pub struct ChessPosition {
    position: Chess,
    /// Zobrist keys since the last irreversible move, current position last.
    keys: Vec<u64>,
}

impl ChessPosition {
    /// Start a fresh history at `position`.
    #[must_use]
    pub fn new(position: Chess) -> Self {
        let keys = vec![repetition_key(&position)];
        Self { position, keys }
    }

    /// The underlying shakmaty position.
    #[must_use]
    pub fn chess(&self) -> &Chess {
        &self.position
    }

    /// How often the current position has occurred, counting itself.
    #[must_use]
    pub fn repetitions(&self) -> usize {
        let current = repetition_key(&self.position);
        self.keys.iter().filter(|&&key| key == current).count()
    }

    fn play(&mut self, m: &shakmaty::Move) {
        if self.position.is_irreversible(m) {
            self.keys.clear();
        }
        self.position.play_unchecked(m);
        self.keys.push(repetition_key(&self.position));
    }

    /// Swap in a position that replaces the current one in place.
    fn replace_current(&mut self, position: Chess) {
        self.keys.pop();
        self.keys.push(repetition_key(&position));
        self.position = position;
    }
}

impl Default for ChessPosition {
    fn default() -> Self {
        Self::new(Chess::default())
    }
}

fn repetition_key(position: &Chess) -> u64 {
    position.zobrist_hash::<Zobrist64>(EnPassantMode::Legal).0
}

/// [`RulesEngine`] over shakmaty's standard chess.
///
/// Moves are exchanged in UCI coordinate notation (`e2e4`, `e7e8q`, castling
/// as the king's two-square step).
#[derive(Debug, Clone, Copy, Default)]
pub struct ShakmatyRules;

impl ShakmatyRules {
    /// Create the rules engine.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Load a position from a FEN string. The position has no history.
    pub fn position_from_fen(&self, fen: &str) -> Result<ChessPosition, RulesError> {
        let fen: Fen = fen
            .parse()
            .map_err(|e| RulesError::InvalidFen(format!("{e}")))?;
        fen.into_position(CastlingMode::Standard)
            .map(ChessPosition::new)
            .map_err(|e| RulesError::InvalidFen(format!("{e}")))
    }
}

impl RulesEngine for ShakmatyRules {
    type Position = ChessPosition;
    type Move = UciMove;

    fn starting_position(&self) -> ChessPosition {
        ChessPosition::default()
    }

    fn legal_moves(&self, position: &ChessPosition) -> Vec<UciMove> {
        position
            .chess()
            .legal_moves()
            .iter()
            .map(|m| UciMove::from_move(m, CastlingMode::Standard))
            .collect()
    }

    fn is_capture(&self, position: &ChessPosition, m: &UciMove) -> bool {
        m.to_move(position.chess()).is_ok_and(|m| m.is_capture())
    }

    fn apply_move(&self, position: &mut ChessPosition, m: &UciMove) -> Result<(), RulesError> {
        let m = m
            .to_move(position.chess())
            .map_err(|_| RulesError::IllegalMove(m.to_string()))?;
        position.play(&m);
        Ok(())
    }

    fn is_game_over(&self, position: &ChessPosition) -> bool {
        let chess = position.chess();
        chess.is_checkmate()
            || chess.is_stalemate()
            || chess.is_insufficient_material()
            || chess.halfmoves() >= SEVENTY_FIVE_MOVE_PLIES
            || position.repetitions() >= FIVEFOLD_REPETITION
    }

    fn result(&self, position: &ChessPosition) -> GameResult {
        let chess = position.chess();
        if chess.is_checkmate() {
            // The side to move is mated.
            match Color::from(chess.turn()) {
                Color::White => GameResult::BlackWins,
                Color::Black => GameResult::WhiteWins,
            }
        } else if self.is_game_over(position) {
            GameResult::Draw
        } else {
            GameResult::Unknown
        }
    }

    fn side_to_move(&self, position: &ChessPosition) -> Color {
        position.chess().turn().into()
    }

    fn serialize(&self, position: &ChessPosition) -> String {
        Fen::from_position(position.chess().clone(), EnPassantMode::Legal).to_string()
    }

    fn parse_move(&self, _position: &ChessPosition, token: &str) -> Result<UciMove, RulesError> {
        token
            .parse()
            .map_err(|_| RulesError::InvalidMoveFormat(token.to_string()))
    }

    fn retain_turn(&self, position: &mut ChessPosition, side: Color) -> Result<(), RulesError> {
        if self.side_to_move(position) == side {
            return Ok(());
        }

        // The en passant square belongs to the reply that is being skipped.
        let mut setup = position.chess().clone().into_setup(EnPassantMode::Legal);
        setup.turn = side.into();
        setup.ep_square = None;

        let retained = Chess::from_setup(setup, CastlingMode::Standard).map_err(|e| {
            RulesError::CannotRetainTurn {
                side,
                reason: format!("{e}"),
            }
        })?;
        if retained.legal_moves().is_empty() {
            return Err(RulesError::CannotRetainTurn {
                side,
                reason: "no legal move to continue with".to_string(),
            });
        }

        position.replace_current(retained);
        Ok(())
    }
}
