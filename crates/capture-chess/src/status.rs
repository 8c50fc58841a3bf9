//! Human-readable status line for a match.

use crate::rules::RulesEngine;
use crate::state::MatchState;
use crate::types::GameResult;

/// Describe `state` for display.
pub fn status_message<R: RulesEngine>(rules: &R, state: &MatchState<R::Position>) -> String {
    let position = state.position();
    if rules.is_game_over(position) {
        return game_over_message(rules.result(position));
    }

    let moves = state.moves_left();
    let noun = if moves == 1 { "move" } else { "moves" };
    format!("{} to move ({moves} {noun} left)", rules.side_to_move(position))
}

fn game_over_message(result: GameResult) -> String {
    match result {
        GameResult::WhiteWins => "Game Over: White wins!".to_string(),
        GameResult::BlackWins => "Game Over: Black wins!".to_string(),
        GameResult::Draw => "Game Over: Draw!".to_string(),
        GameResult::Unknown => format!("Game Over! {result}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::ShakmatyRules;

    #[test]
    fn in_progress_wording() {
        let rules = ShakmatyRules::new();
        let start = rules.starting_position();

        let one = MatchState::from_position(start.clone(), 1);
        assert_eq!(status_message(&rules, &one), "White to move (1 move left)");

        let two = MatchState::from_position(start, 2);
        assert_eq!(status_message(&rules, &two), "White to move (2 moves left)");
    }

    #[test]
    fn game_over_wording() {
        assert_eq!(game_over_message(GameResult::WhiteWins), "Game Over: White wins!");
        assert_eq!(game_over_message(GameResult::BlackWins), "Game Over: Black wins!");
        assert_eq!(game_over_message(GameResult::Draw), "Game Over: Draw!");
        assert_eq!(game_over_message(GameResult::Unknown), "Game Over! *");
    }

    #[test]
    fn checkmate_position() {
        let rules = ShakmatyRules::new();
        let mated = rules
            .position_from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
            .unwrap();
        let state = MatchState::from_position(mated, 1);
        assert_eq!(status_message(&rules, &state), "Game Over: Black wins!");
    }
}
