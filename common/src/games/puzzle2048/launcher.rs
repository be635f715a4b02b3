use super::error::GameError;
use super::instant::{InstantOutcome, decide};
use super::session::GameSession;
use super::settings::GameSettings;
use crate::debug_log;
use crate::games::session_rng::SessionRng;

pub enum GameLaunch {
    /// Single-cell game, already decided.
    Instant(InstantOutcome),
    Session(GameSession),
}

pub struct GameLauncher;

impl GameLauncher {
    /// Starts a game for validated settings. A 1x1 board never gets a
    /// session; it is settled by one draw right here.
    pub fn launch(settings: GameSettings, mut rng: SessionRng) -> Result<GameLaunch, GameError> {
        if settings.is_single_cell() {
            let outcome = decide(settings.target_value(), &mut rng);
            debug_log!(
                "Single-cell game drew {} against target {}",
                outcome.drawn,
                settings.target_value()
            );
            return Ok(GameLaunch::Instant(outcome));
        }

        Ok(GameLaunch::Session(GameSession::new(settings, rng)?))
    }
}
