//! Shared constants for the tortoise race.
//!
//! Pure data with no dependencies, usable from the core state machine,
//! the terminal view, and the runner alike.
//!
//! # Track geometry
//!
//! Lanes are laid out from the top of the viewport with one blank row
//! between them:
//!
//! - lane `i` draws on row `LANE_TOP_ROW + i * LANE_SPACING`
//! - the viewport must hold `N * LANE_SPACING + VIEWPORT_MARGIN_ROWS`
//!   rows, otherwise initialization fails before any frame is drawn
//! - the finish line sits at `width - FINISH_MARGIN_COLS`, leaving room
//!   for the glyph and label at the right edge
//!
//! # Timing
//!
//! All pacing is fixed real-time delay; there is no adaptive frame-rate
//! control:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 100 | Inter-frame pacing sleep |
//! | `INTRO_STEP_MS` | 1000 | Hold per intro banner |
//! | `OUTCOME_HOLD_MS` | 3000 | Hold on the final screen |

/// Default number of tortoises when `--num_tortoises` is not given.
pub const DEFAULT_TORTOISES: usize = 5;

/// Inter-frame pacing sleep in milliseconds (the sole throttle).
pub const TICK_MS: u64 = 100;

/// Hold duration per intro banner step in milliseconds.
pub const INTRO_STEP_MS: u64 = 1000;

/// Hold duration of the outcome screen in milliseconds.
pub const OUTCOME_HOLD_MS: u64 = 3000;

/// Row of lane 0.
pub const LANE_TOP_ROW: u16 = 2;

/// Vertical distance between consecutive lanes.
pub const LANE_SPACING: u16 = 2;

/// Rows reserved beyond the lanes (2 header rows + 1 spacing row).
pub const VIEWPORT_MARGIN_ROWS: u16 = 3;

/// Columns kept free between the finish line and the right edge.
pub const FINISH_MARGIN_COLS: u16 = 5;

/// Name labels are left-aligned and padded to this many columns.
pub const LABEL_WIDTH: usize = 10;

/// Horizontal offset of the glyph from the lane start, so the glyph
/// never overlaps the label.
pub const GLYPH_OFFSET: u16 = 12;

/// The racer glyph.
pub const TORTOISE_GLYPH: char = '🐢';

/// Initial speed is sampled uniformly from this range (cells/frame).
pub const SPEED_RANGE: (f32, f32) = (0.5, 1.5);

/// Speed never drops below this floor, enforced after every update.
pub const SPEED_FLOOR: f32 = 0.1;

/// Acceleration is sampled uniformly from `[-ACCEL_LIMIT, ACCEL_LIMIT]`.
pub const ACCEL_LIMIT: f32 = 0.05;

/// Per-entity, per-frame probability of resampling acceleration.
pub const RESAMPLE_CHANCE: f32 = 0.1;

/// Number of styles in the display palette. Styles are drawn uniformly
/// at random, so repeats across entities are expected.
pub const PALETTE_LEN: usize = 7;

/// Cyclic name pool; entity `i` gets `NAMES[i % NAMES.len()]` plus a
/// numeric suffix to stay unique.
pub const NAMES: [&str; 10] = [
    "Speedy", "Flash", "Bolt", "Dash", "Zoom", "Swift", "Blaze", "Thunder", "Rocket", "Comet",
];

/// Intro banner words, displayed in order, one per step.
pub const INTRO_STEPS: [&str; 3] = ["READY!", "STEADY!", "GO!"];
