use super::evaluator::GameState;
use super::spawner::initial_tile_value;
use crate::games::session_rng::SessionRng;

/// Result of a single-cell game: one weighted draw compared to the target.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct InstantOutcome {
    pub drawn: u32,
    pub state: GameState,
}

/// A 1x1 board can never slide or merge, so the game is settled by the
/// opening tile alone. No grid is built.
pub fn decide(target: u32, rng: &mut SessionRng) -> InstantOutcome {
    let drawn = initial_tile_value(rng);
    let state = if drawn == target {
        GameState::Win
    } else {
        GameState::Lose
    };
    InstantOutcome { drawn, state }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_matching_target_wins() {
        for seed in 0..100 {
            let mut rng = SessionRng::new(seed);
            let outcome = decide(2, &mut rng);
            let expected = if outcome.drawn == 2 {
                GameState::Win
            } else {
                GameState::Lose
            };
            assert_eq!(outcome.state, expected);
        }
    }

    #[test]
    fn test_unreachable_target_always_loses() {
        for seed in 0..100 {
            let mut rng = SessionRng::new(seed);
            let outcome = decide(2048, &mut rng);
            assert!(outcome.drawn == 2 || outcome.drawn == 4);
            assert_eq!(outcome.state, GameState::Lose);
        }
    }

    #[test]
    fn test_same_seed_same_decision() {
        let first = decide(4, &mut SessionRng::new(77));
        let second = decide(4, &mut SessionRng::new(77));
        assert_eq!(first, second);
    }
}
