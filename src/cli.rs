//! Command-line parsing for the `tortoise-rush` binary.
//!
//! One flag, no subcommands. Both `--num_tortoises 7` and
//! `--num_tortoises=7` are accepted.

use anyhow::{anyhow, Result};

use crate::types::DEFAULT_TORTOISES;

pub const USAGE: &str = "\
Tortoise race animation!

usage: tortoise-rush [--num_tortoises <n>]

options:
  --num_tortoises <n>  Number of tortoises in the race (default: 5)
  -h, --help           Show this help";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Run a race with this many tortoises.
    Run { num_tortoises: usize },
    /// Print usage and exit.
    Help,
}

pub fn parse_args(args: &[String]) -> Result<Command> {
    let mut num_tortoises = DEFAULT_TORTOISES;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--num_tortoises" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --num_tortoises"))?;
                num_tortoises = parse_count(v)?;
            }
            other => match other.strip_prefix("--num_tortoises=") {
                Some(v) => num_tortoises = parse_count(v)?,
                None => return Err(anyhow!("unknown argument: {}", other)),
            },
        }
        i += 1;
    }

    Ok(Command::Run { num_tortoises })
}

fn parse_count(v: &str) -> Result<usize> {
    let n = v
        .parse::<usize>()
        .map_err(|_| anyhow!("invalid --num_tortoises value: {}", v))?;
    if n == 0 {
        return Err(anyhow!("--num_tortoises must be at least 1"));
    }
    Ok(n)
}
