use std::error::Error;
use std::io::{BufRead, Write};

use tile_merge_common::games::puzzle2048::{Direction, GameSession, GameState, InstantOutcome};
use tile_merge_common::debug_log;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopEnd {
    Finished(GameState),
    InputClosed,
}

pub fn print_controls<W: Write>(output: &mut W) -> std::io::Result<()> {
    writeln!(output, "Press w to slide up")?;
    writeln!(output, "Press s to slide down")?;
    writeln!(output, "Press a to slide left")?;
    writeln!(output, "Press d to slide right")
}

pub fn print_instant_outcome<W: Write>(
    outcome: &InstantOutcome,
    output: &mut W,
) -> std::io::Result<()> {
    writeln!(output, "Drew {}", outcome.drawn)?;
    match outcome.state {
        GameState::Win => writeln!(output, "You Win!"),
        _ => writeln!(output, "Game Over!"),
    }
}

/// Reads one direction per line until the game ends or input runs out.
/// Unknown tokens are reported and re-prompted without touching the game.
pub fn run_session<R: BufRead, W: Write>(
    session: &mut GameSession,
    input: R,
    output: &mut W,
) -> Result<LoopEnd, Box<dyn Error>> {
    print_controls(output)?;
    let mut lines = input.lines();

    loop {
        writeln!(output, "Score: {}", session.score())?;
        write!(output, "{}", session.grid())?;

        match session.state() {
            GameState::Win => {
                writeln!(output, "You Win!")?;
                debug_log!("Won with score {} after {} moves", session.score(), session.moves_made());
                return Ok(LoopEnd::Finished(GameState::Win));
            }
            GameState::Lose => {
                writeln!(output, "Game Over")?;
                debug_log!("Lost with score {} after {} moves", session.score(), session.moves_made());
                return Ok(LoopEnd::Finished(GameState::Lose));
            }
            GameState::Continue => {}
        }

        write!(output, "Insert direction: ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            debug_log!("Input closed");
            return Ok(LoopEnd::InputClosed);
        };

        let direction = match line?.parse::<Direction>() {
            Ok(direction) => direction,
            Err(err) => {
                debug_log!("{}", err);
                writeln!(output, "Input error! Please try again")?;
                continue;
            }
        };

        let report = session.apply_move(direction)?;
        debug_log!(
            "{} changed={} delta={} spawned={:?}",
            direction,
            report.changed,
            report.score_delta,
            report.spawned
        );
    }
}
