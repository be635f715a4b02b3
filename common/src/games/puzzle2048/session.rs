use super::error::GameError;
use super::evaluator::{GameState, evaluate};
use super::grid::Grid;
use super::resolver::resolve_move_scored;
use super::settings::GameSettings;
use super::spawner::{init_game, place_one};
use super::types::{Direction, Position};
use crate::debug_log;
use crate::games::session_rng::SessionRng;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MoveReport {
    pub changed: bool,
    pub score_delta: u64,
    pub spawned: Option<Position>,
    pub state: GameState,
}

/// One running game. Owns the board, the score and the rng; `apply_move` is
/// the only way to change any of them.
pub struct GameSession {
    grid: Grid,
    score: u64,
    settings: GameSettings,
    rng: SessionRng,
    state: GameState,
    moves_made: u32,
}

impl GameSession {
    pub fn new(settings: GameSettings, mut rng: SessionRng) -> Result<Self, GameError> {
        if settings.is_single_cell() {
            return Err(GameError::SingleCellGrid);
        }

        let grid = init_game(settings.size(), &mut rng)?;
        let state = evaluate(&grid, settings.target_value());
        debug_log!(
            "New {}x{} game, target {}, seed {}",
            settings.size(),
            settings.size(),
            settings.target_value(),
            rng.seed()
        );

        Ok(Self {
            grid,
            score: 0,
            settings,
            rng,
            state,
            moves_made: 0,
        })
    }

    /// Resolves one move. A move that changes nothing, or any move after the
    /// game ended, leaves the session untouched.
    ///
    /// After a changing move the score grows by the move's delta and the board
    /// is evaluated; if play continues one tile is spawned and the board is
    /// evaluated again, so a spawn that fills the last gap ends the game at
    /// once.
    pub fn apply_move(&mut self, direction: Direction) -> Result<MoveReport, GameError> {
        let unchanged = MoveReport {
            changed: false,
            score_delta: 0,
            spawned: None,
            state: self.state,
        };
        if self.state.is_terminal() {
            return Ok(unchanged);
        }

        let outcome = resolve_move_scored(&self.grid, direction, self.settings.scoring());
        if !outcome.changed {
            return Ok(unchanged);
        }

        self.grid = outcome.grid;
        self.score += outcome.score_delta;
        self.moves_made += 1;

        let target = self.settings.target_value();
        self.state = evaluate(&self.grid, target);

        let mut spawned = None;
        if self.state == GameState::Continue {
            spawned = Some(place_one(
                &mut self.grid,
                &mut self.rng,
                self.settings.follow_up_spawn(),
            )?);
            self.state = evaluate(&self.grid, target);
        }

        if self.state.is_terminal() {
            debug_log!(
                "Game ended {:?} after {} moves, score {}",
                self.state,
                self.moves_made,
                self.score
            );
        }

        Ok(MoveReport {
            changed: true,
            score_delta: outcome.score_delta,
            spawned,
            state: self.state,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn moves_made(&self) -> u32 {
        self.moves_made
    }

    pub fn highest_tile(&self) -> u32 {
        self.grid.highest_tile()
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    #[cfg(test)]
    fn set_grid(&mut self, grid: Grid) {
        self.state = evaluate(&grid, self.settings.target_value());
        self.grid = grid;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::puzzle2048::{FollowUpSpawn, ScoringMode};

    fn create_session(size: i64, target: i64) -> GameSession {
        let settings = GameSettings::new(size, target).unwrap();
        GameSession::new(settings, SessionRng::new(42)).unwrap()
    }

    fn grid(rows: Vec<Vec<u32>>) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    #[test]
    fn test_new_has_two_tiles() {
        let session = create_session(4, 2048);
        assert_eq!(session.grid().tile_count(), 2);
        assert_eq!(session.score(), 0);
        assert_eq!(session.moves_made(), 0);
        assert_eq!(session.state(), GameState::Continue);
        assert_eq!(session.seed(), 42);
    }

    #[test]
    fn test_single_cell_has_no_session() {
        let settings = GameSettings::new(1, 2).unwrap();
        assert!(matches!(
            GameSession::new(settings, SessionRng::new(1)),
            Err(GameError::SingleCellGrid)
        ));
    }

    #[test]
    fn test_same_seed_same_opening() {
        let a = create_session(5, 2048);
        let b = create_session(5, 2048);
        assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn test_changing_move_scores_and_spawns() {
        let mut session = create_session(4, 2048);
        session.set_grid(grid(vec![
            vec![2, 2, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
        ]));

        let report = session.apply_move(Direction::Left).unwrap();

        assert!(report.changed);
        assert_eq!(report.score_delta, 4);
        assert_eq!(report.state, GameState::Continue);
        assert_eq!(session.score(), 4);
        assert_eq!(session.moves_made(), 1);
        assert_eq!(session.grid().get(0, 0), 4);
        // merged pair became one tile, then one tile spawned
        assert_eq!(session.grid().tile_count(), 2);
        let spawned = report.spawned.unwrap();
        assert_eq!(session.grid().get(spawned.row, spawned.col), 2);
    }

    #[test]
    fn test_unchanged_move_does_nothing() {
        let mut session = create_session(4, 2048);
        #[rustfmt::skip]
        let start = grid(vec![
            vec![2, 0, 0, 0],
            vec![4, 0, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
        ]);
        session.set_grid(start.clone());

        let report = session.apply_move(Direction::Left).unwrap();

        assert!(!report.changed);
        assert_eq!(report.spawned, None);
        assert_eq!(session.grid(), &start);
        assert_eq!(session.moves_made(), 0);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_reaching_target_wins_without_spawn() {
        let mut session = create_session(4, 2048);
        session.set_grid(grid(vec![
            vec![1024, 1024, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
        ]));

        let report = session.apply_move(Direction::Left).unwrap();

        assert_eq!(report.state, GameState::Win);
        assert_eq!(report.spawned, None);
        assert_eq!(session.grid().tile_count(), 1);
        assert_eq!(session.highest_tile(), 2048);
    }

    #[test]
    fn test_terminal_session_ignores_moves() {
        let mut session = create_session(2, 8);
        session.set_grid(grid(vec![vec![4, 4], vec![0, 0]]));
        let report = session.apply_move(Direction::Left).unwrap();
        assert_eq!(report.state, GameState::Win);

        let snapshot = session.grid().clone();
        for direction in Direction::all() {
            let report = session.apply_move(direction).unwrap();
            assert!(!report.changed);
            assert_eq!(report.state, GameState::Win);
        }
        assert_eq!(session.grid(), &snapshot);
        assert_eq!(session.moves_made(), 1);
    }

    #[test]
    fn test_spawn_into_last_gap_can_lose() {
        let mut session = create_session(2, 2048);
        // Up slides the 8 into the top row; the spawned 2 fills the only gap.
        session.set_grid(grid(vec![vec![4, 0], vec![16, 8]]));

        let report = session.apply_move(Direction::Up).unwrap();

        assert!(report.changed);
        assert_eq!(report.spawned, Some(Position::new(1, 1)));
        assert_eq!(session.grid().to_rows(), vec![vec![4, 8], vec![16, 2]]);
        assert_eq!(report.state, GameState::Lose);
        assert_eq!(session.state(), GameState::Lose);
    }

    #[test]
    fn test_sum_of_merges_scoring() {
        let settings = GameSettings::new(4, 2048)
            .unwrap()
            .with_scoring(ScoringMode::SumOfMerges);
        let mut session = GameSession::new(settings, SessionRng::new(9)).unwrap();
        session.set_grid(grid(vec![
            vec![8, 8, 0, 0],
            vec![2, 2, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
        ]));

        let report = session.apply_move(Direction::Left).unwrap();

        assert_eq!(report.score_delta, 20);
        assert_eq!(session.score(), 20);
    }

    #[test]
    fn test_random_play_keeps_invariants() {
        let settings = GameSettings::new(4, 2048)
            .unwrap()
            .with_follow_up_spawn(FollowUpSpawn::Weighted);
        let mut session = GameSession::new(settings, SessionRng::new(1234)).unwrap();
        let mut rng = SessionRng::new(4321);
        let directions = Direction::all();

        for _ in 0..500 {
            if session.state().is_terminal() {
                break;
            }
            let score_before = session.score();
            let sum_before = session.grid().tile_sum();
            let count_before = session.grid().tile_count();

            let direction = directions[rng.random_range(0..directions.len())];
            let report = session.apply_move(direction).unwrap();

            assert!(session.score() >= score_before);
            assert!(session.grid().tile_sum() >= sum_before);
            assert!(
                session
                    .grid()
                    .cells()
                    .iter()
                    .all(|&v| v == 0 || v.is_power_of_two())
            );
            if report.changed && report.spawned.is_some() {
                assert!(session.grid().tile_count() <= count_before + 1);
            }
        }
    }
}
