mod config;
mod game_loop;

use std::io;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use config::{ClientConfig, ClientConfigManager};
use game_loop::{LoopEnd, print_instant_outcome, run_session};
use tile_merge_common::games::SessionRng;
use tile_merge_common::games::puzzle2048::{FollowUpSpawn, GameLaunch, GameLauncher, ScoringMode};
use tile_merge_common::version::VERSION;
use tile_merge_common::{log, logger};

#[derive(Clone, Copy, ValueEnum)]
enum ScoringArg {
    LastMerge,
    SumOfMerges,
}

impl From<ScoringArg> for ScoringMode {
    fn from(value: ScoringArg) -> Self {
        match value {
            ScoringArg::LastMerge => ScoringMode::LastMerge,
            ScoringArg::SumOfMerges => ScoringMode::SumOfMerges,
        }
    }
}

#[derive(Parser)]
#[command(name = "tile_merge", version = VERSION, about = "Sliding tile merge puzzle")]
struct Args {
    /// Board side length; 1 settles the game with a single draw
    #[arg(long, allow_negative_numbers = true)]
    size: Option<i64>,
    /// Tile value that wins the game, a power of two
    #[arg(long, allow_negative_numbers = true)]
    target: Option<i64>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, value_enum)]
    scoring: Option<ScoringArg>,
    /// Spawn 4s after moves too, not only at the start
    #[arg(long)]
    weighted_spawns: bool,
    #[arg(long, default_value = "tile_merge.yaml")]
    config: PathBuf,
    /// Write the effective configuration back to the config file
    #[arg(long)]
    save_config: bool,
    #[arg(long)]
    use_log_prefix: bool,
    #[arg(long)]
    verbose: bool,
}

impl Args {
    fn apply_to(&self, config: &mut ClientConfig) {
        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(target) = self.target {
            config.target_value = target;
        }
        if let Some(scoring) = self.scoring {
            config.scoring = scoring.into();
        }
        if self.weighted_spawns {
            config.follow_up_spawn = FollowUpSpawn::Weighted;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TileMerge".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let config_manager = ClientConfigManager::from_yaml_file(&args.config);
    // Validated only after the command line overrides are applied.
    let mut config = config_manager.read_config()?;
    args.apply_to(&mut config);

    let settings = config.to_settings()?;
    log!(
        "Starting {}x{} game, target {}, scoring {:?}, follow-up spawn {:?}",
        settings.size(),
        settings.size(),
        settings.target_value(),
        settings.scoring(),
        settings.follow_up_spawn()
    );

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Saved configuration to {}", args.config.display());
    }

    let rng = match config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Seed {}", rng.seed());

    let stdout = io::stdout();
    let mut output = stdout.lock();

    match GameLauncher::launch(settings, rng)? {
        GameLaunch::Instant(outcome) => {
            print_instant_outcome(&outcome, &mut output)?;
        }
        GameLaunch::Session(mut session) => {
            let end = run_session(&mut session, io::stdin().lock(), &mut output)?;
            match end {
                LoopEnd::Finished(state) => log!(
                    "Game ended {:?} with score {} after {} moves",
                    state,
                    session.score(),
                    session.moves_made()
                ),
                LoopEnd::InputClosed => log!(
                    "Input closed, leaving the game with score {}",
                    session.score()
                ),
            }
        }
    }

    Ok(())
}
