//! RaceView: maps `core::RaceState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{RaceOutcome, RaceState};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GLYPH_OFFSET, INTRO_STEPS, LABEL_WIDTH, PALETTE_LEN, TORTOISE_GLYPH};

/// Display palette, indexed by `Tortoise::style`. Seven entries,
/// mirroring a classic terminal color set.
const PALETTE: [Rgb; PALETTE_LEN] = [
    Rgb::new(220, 80, 80),   // red
    Rgb::new(100, 220, 120), // green
    Rgb::new(240, 220, 80),  // yellow
    Rgb::new(80, 120, 220),  // blue
    Rgb::new(200, 120, 220), // magenta
    Rgb::new(80, 220, 220),  // cyan
    Rgb::new(230, 230, 230), // white
];

/// A lightweight terminal renderer for the race.
///
/// All `render_*_into` methods clear the framebuffer first and draw a
/// complete screen; the caller owns one framebuffer and presents it
/// after each call.
#[derive(Debug, Default)]
pub struct RaceView;

impl RaceView {
    /// Render one race frame: track geometry first, racers on top.
    pub fn render_race_into(&self, state: &RaceState, fb: &mut FrameBuffer) {
        fb.clear();

        let track = CellStyle::default().dim();
        for t in &state.tortoises {
            let row = t.row();
            fb.hline(row, '-', track);
            fb.put_char(state.finish_column, row + 1, '|', CellStyle::default());
        }

        for t in &state.tortoises {
            let row = t.row();
            let style = palette_style(t.style);
            fb.put_str(
                0,
                row,
                &format!("{:<width$}", t.name, width = LABEL_WIDTH),
                style,
            );
            // `as u16` saturates; clipping past the right edge is the
            // framebuffer's job.
            let col = (t.position as u16).saturating_add(GLYPH_OFFSET);
            fb.put_char(col, row, TORTOISE_GLYPH, style);
        }
    }

    /// Render one intro banner step ("READY!", "STEADY!", "GO!") on a
    /// cleared screen, stacked around the vertical center.
    pub fn render_intro_into(&self, step: usize, fb: &mut FrameBuffer) {
        fb.clear();
        let row = (fb.height() / 2)
            .saturating_sub(2)
            .saturating_add(step as u16);
        fb.put_str_centered(row, INTRO_STEPS[step], CellStyle::default().bold());
    }

    /// Render the final screen: the winner announcement, or the
    /// interrupted notice when the race ended without one.
    pub fn render_outcome_into(&self, outcome: &RaceOutcome, fb: &mut FrameBuffer) {
        fb.clear();
        let row = fb.height() / 2;
        let style = CellStyle::default().bold();
        match outcome {
            RaceOutcome::Winner(name) => {
                fb.put_str_centered(row, &format!("The winner is: {name}!"), style);
            }
            RaceOutcome::Interrupted => {
                fb.put_str_centered(row, "Race interrupted!", style);
            }
        }
    }
}

fn palette_style(index: usize) -> CellStyle {
    CellStyle::fg(PALETTE[index % PALETTE.len()])
}
