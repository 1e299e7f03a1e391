//! Race loop driver: intro sequence, frame loop, outcome screen.
//!
//! The loop is single-threaded and cooperative. Pacing goes through the
//! [`Clock`] trait and operator interrupts through [`InterruptSource`],
//! so tests can drive a full race without real-time delays or a
//! keyboard; production uses [`SystemClock`] and [`KeyboardInterrupt`].

use std::thread;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::core::{RaceOutcome, RaceState, SimpleRng};
use crate::term::{FrameBuffer, RaceView, Surface};
use crate::types::{INTRO_STEPS, INTRO_STEP_MS, OUTCOME_HOLD_MS, TICK_MS};

/// Fixed-duration pacing sleeps.
pub trait Clock {
    fn sleep(&mut self, duration: Duration);
}

/// Real wall-clock sleeps.
pub struct SystemClock;

impl Clock for SystemClock {
    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Non-blocking check for an operator interrupt, polled once per frame.
pub trait InterruptSource {
    fn interrupted(&mut self) -> Result<bool>;
}

/// Any pending key press aborts the race.
pub struct KeyboardInterrupt;

impl InterruptSource for KeyboardInterrupt {
    fn interrupted(&mut self) -> Result<bool> {
        if !event::poll(Duration::ZERO)? {
            return Ok(false);
        }
        match event::read()? {
            Event::Key(key) => Ok(key.kind == KeyEventKind::Press),
            _ => Ok(false),
        }
    }
}

/// Run one full race: intro, frame loop, outcome screen.
///
/// Owns the presentation surface for its whole duration. Returns how
/// the race ended; the caller only has to restore the terminal.
pub fn run_race(
    state: &mut RaceState,
    rng: &mut SimpleRng,
    view: &RaceView,
    surface: &mut impl Surface,
    clock: &mut impl Clock,
    keys: &mut impl InterruptSource,
) -> Result<RaceOutcome> {
    let mut fb = FrameBuffer::new(state.width, state.height);

    // Intro: blocking and non-cancelable, no input polled.
    for step in 0..INTRO_STEPS.len() {
        view.render_intro_into(step, &mut fb);
        surface.present(&fb)?;
        clock.sleep(Duration::from_millis(INTRO_STEP_MS));
    }

    let outcome = loop {
        let winner = state.step(rng);

        view.render_race_into(state, &mut fb);
        surface.present(&fb)?;

        if let Some(i) = winner {
            break RaceOutcome::Winner(state.tortoises[i].name.clone());
        }
        if keys.interrupted()? {
            break RaceOutcome::Interrupted;
        }
        clock.sleep(Duration::from_millis(TICK_MS));
    };

    view.render_outcome_into(&outcome, &mut fb);
    surface.present(&fb)?;
    clock.sleep(Duration::from_millis(OUTCOME_HOLD_MS));

    Ok(outcome)
}
