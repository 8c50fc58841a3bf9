//! Many threads sharing one controller.

use std::sync::Arc;
use std::thread;

use capture_chess::{MoveError, RulesEngine, ShakmatyRules, Snapshot, TurnController};

const THREADS: usize = 8;
const ROUNDS: usize = 40;

/// The status line must always describe the same state as the other fields.
fn assert_consistent(snapshot: &Snapshot) {
    if snapshot.is_game_over {
        assert!(snapshot.status_message.starts_with("Game Over"));
        return;
    }
    assert!(snapshot.moves_left >= 1, "allowance ran out: {snapshot:?}");
    let noun = if snapshot.moves_left == 1 { "move" } else { "moves" };
    assert_eq!(
        snapshot.status_message,
        format!(
            "{} to move ({} {noun} left)",
            snapshot.side_to_move, snapshot.moves_left
        )
    );
    assert_eq!(
        snapshot.fen.split(' ').nth(1),
        Some(if snapshot.side_to_move == capture_chess::Color::White {
            "w"
        } else {
            "b"
        })
    );
}

#[test]
fn test_concurrent_movers_never_see_torn_state() {
    let controller = Arc::new(TurnController::new(ShakmatyRules::new()));

    thread::scope(|scope| {
        for worker in 0..THREADS {
            let controller = Arc::clone(&controller);
            scope.spawn(move || {
                let rules = ShakmatyRules::new();
                for round in 0..ROUNDS {
                    let snapshot = controller.get_state();
                    assert_consistent(&snapshot);
                    if snapshot.is_game_over {
                        let fresh = controller.new_game();
                        assert_consistent(&fresh);
                        continue;
                    }

                    let position = rules.position_from_fen(&snapshot.fen).unwrap();
                    let legal = rules.legal_moves(&position);
                    let token = legal[(worker + round) % legal.len()].to_string();

                    // Another thread may have moved since the snapshot was taken.
                    match controller.apply_move(Some(token.as_str())) {
                        Ok(after) => assert_consistent(&after),
                        Err(MoveError::IllegalMove(t)) => assert_eq!(t, token),
                        Err(MoveError::GameOver) => {}
                        Err(other) => panic!("unexpected rejection: {other}"),
                    }
                }
            });
        }
    });

    assert_consistent(&controller.get_state());
}

#[test]
fn test_concurrent_new_games_are_identical() {
    let controller = Arc::new(TurnController::new(ShakmatyRules::new()));
    controller.apply_move(Some("e2e4")).unwrap();

    let snapshots: Vec<Snapshot> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let controller = Arc::clone(&controller);
                scope.spawn(move || controller.new_game())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for snapshot in &snapshots {
        assert_eq!(snapshot, &snapshots[0]);
    }
    assert_eq!(snapshots[0].moves_left, 1);
}
