//! Tortoise race runner (default binary).
//!
//! Thin glue around the race loop: parse the flag, bracket the session
//! in raw mode, seed the RNG from the wall clock, run one race.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;

use tortoise_rush::cli::{self, Command};
use tortoise_rush::core::{ConfigurationError, RaceState, SimpleRng};
use tortoise_rush::runner::{run_race, KeyboardInterrupt, SystemClock};
use tortoise_rush::term::{RaceView, TerminalRenderer};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let num_tortoises = match cli::parse_args(&args)? {
        Command::Help => {
            println!("{}", cli::USAGE);
            return Ok(());
        }
        Command::Run { num_tortoises } => num_tortoises,
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, num_tortoises);

    // Always try to restore terminal state before reporting anything.
    let _ = term.exit();

    match result {
        Ok(()) => Ok(()),
        Err(e) => match e.downcast_ref::<ConfigurationError>() {
            // Viewport too small: plain-text report, clean exit.
            Some(cfg) => {
                println!("{cfg}");
                Ok(())
            }
            None => Err(e),
        },
    }
}

fn run(term: &mut TerminalRenderer, num_tortoises: usize) -> Result<()> {
    let (width, height) = crossterm::terminal::size()?;

    let mut rng = SimpleRng::new(clock_seed());
    let mut state = RaceState::new(height, width, num_tortoises, &mut rng)?;
    let view = RaceView;

    run_race(
        &mut state,
        &mut rng,
        &view,
        term,
        &mut SystemClock,
        &mut KeyboardInterrupt,
    )?;
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
