//! Race state machine: entities, per-frame kinematics, winner detection.
//!
//! This module is pure (no I/O, no clocks). The runner owns pacing and
//! input, the term crate owns drawing; everything here is driven by an
//! explicit `SimpleRng` so a race is replayable from its seed.

use std::error::Error;
use std::fmt;

use tortoise_rush_types::{
    ACCEL_LIMIT, LANE_SPACING, LANE_TOP_ROW, NAMES, PALETTE_LEN, RESAMPLE_CHANCE,
    FINISH_MARGIN_COLS, SPEED_FLOOR, SPEED_RANGE, VIEWPORT_MARGIN_ROWS,
};

use crate::rng::SimpleRng;

/// The requested field doesn't fit the terminal.
///
/// Raised before any entity is constructed or any frame drawn; the
/// binary reports it as plain text after terminal teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigurationError {
    pub required_rows: u32,
    pub available_rows: u32,
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The terminal height is too small for the number of tortoises \
             (need {} rows, have {}).",
            self.required_rows, self.available_rows
        )
    }
}

impl Error for ConfigurationError {}

/// How a race ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RaceOutcome {
    /// An entity crossed the finish line; carries its name.
    Winner(String),
    /// The operator pressed a key before anyone finished.
    Interrupted,
}

/// One racer. Created once before the first frame, mutated only by
/// [`RaceState::step`], immutable once the race has ended.
#[derive(Debug, Clone)]
pub struct Tortoise {
    /// Unique label: pool name plus numeric suffix.
    pub name: String,
    /// Fixed lane index 0..N-1; determines the draw row.
    pub lane: usize,
    /// Horizontal offset along the lane. Monotonically non-decreasing.
    pub position: f32,
    /// Cells advanced per frame. Never below [`SPEED_FLOOR`].
    pub speed: f32,
    /// Applied to speed each frame; stochastically resampled.
    pub acceleration: f32,
    /// Palette index, fixed at creation.
    pub style: usize,
}

impl Tortoise {
    /// Terminal row this tortoise's lane draws on.
    pub fn row(&self) -> u16 {
        lane_row(self.lane)
    }
}

/// Terminal row for a lane index.
pub fn lane_row(lane: usize) -> u16 {
    LANE_TOP_ROW + lane as u16 * LANE_SPACING
}

/// Full state of one race.
///
/// Fields are public so tests can pin kinematics (fixed speed, zero
/// acceleration, resampling off) without a test-only constructor.
#[derive(Debug, Clone)]
pub struct RaceState {
    pub tortoises: Vec<Tortoise>,
    /// Viewport height captured at init.
    pub height: u16,
    /// Viewport width captured at init.
    pub width: u16,
    /// Column a position must reach to win: `width - FINISH_MARGIN_COLS`.
    pub finish_column: u16,
    /// Number of completed update passes.
    pub frame: u32,
    /// Index of the winning tortoise, once one crosses.
    pub winner: Option<usize>,
    /// Per-entity, per-frame acceleration resample probability.
    pub resample_chance: f32,
}

impl RaceState {
    /// Validate the viewport and create `count` racers in lane order.
    ///
    /// Fails with [`ConfigurationError`] when the viewport cannot hold
    /// `count` lanes plus the header/footer margin; in that case no
    /// entity is constructed.
    pub fn new(
        height: u16,
        width: u16,
        count: usize,
        rng: &mut SimpleRng,
    ) -> Result<Self, ConfigurationError> {
        let required = count as u32 * LANE_SPACING as u32 + VIEWPORT_MARGIN_ROWS as u32;
        if (height as u32) < required {
            return Err(ConfigurationError {
                required_rows: required,
                available_rows: height as u32,
            });
        }

        let tortoises = (0..count)
            .map(|i| Tortoise {
                name: format!("{} {}", NAMES[i % NAMES.len()], i + 1),
                lane: i,
                position: 0.0,
                speed: rng.uniform(SPEED_RANGE.0, SPEED_RANGE.1),
                acceleration: rng.uniform(-ACCEL_LIMIT, ACCEL_LIMIT),
                style: rng.next_range(PALETTE_LEN as u32) as usize,
            })
            .collect();

        Ok(Self {
            tortoises,
            height,
            width,
            finish_column: width.saturating_sub(FINISH_MARGIN_COLS),
            frame: 0,
            winner: None,
            resample_chance: RESAMPLE_CHANCE,
        })
    }

    /// Advance every racer by one frame, in creation order.
    ///
    /// Per racer: apply acceleration (clamped to the speed floor),
    /// maybe resample acceleration, advance position, check the finish
    /// line. The pass stops at the first racer to cross: racers after
    /// it are not updated that frame, so the first in creation order
    /// wins even if a later one would have crossed by a larger margin.
    /// That tie-break is deliberate and matches the display order.
    ///
    /// Returns the winner index, if any. No-op once the race is over.
    pub fn step(&mut self, rng: &mut SimpleRng) -> Option<usize> {
        if self.winner.is_some() {
            return self.winner;
        }

        self.frame += 1;
        let finish = self.finish_column as f32;

        for (i, t) in self.tortoises.iter_mut().enumerate() {
            t.speed = (t.speed + t.acceleration).max(SPEED_FLOOR);

            if rng.chance(self.resample_chance) {
                t.acceleration = rng.uniform(-ACCEL_LIMIT, ACCEL_LIMIT);
            }

            t.position += t.speed;

            if t.position >= finish {
                self.winner = Some(i);
                break;
            }
        }

        self.winner
    }

    /// Name of the winning tortoise, if the race has one.
    pub fn winner_name(&self) -> Option<&str> {
        self.winner.map(|i| self.tortoises[i].name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn race(height: u16, width: u16, count: usize) -> RaceState {
        let mut rng = SimpleRng::new(12345);
        RaceState::new(height, width, count, &mut rng).unwrap()
    }

    #[test]
    fn init_produces_n_racers_in_lane_order() {
        let state = race(30, 80, 5);

        assert_eq!(state.tortoises.len(), 5);
        for (i, t) in state.tortoises.iter().enumerate() {
            assert_eq!(t.lane, i);
            assert_eq!(t.position, 0.0);
            assert!(t.speed >= SPEED_RANGE.0 && t.speed < SPEED_RANGE.1);
            assert!(t.speed >= SPEED_FLOOR);
            assert!(t.style < tortoise_rush_types::PALETTE_LEN);
        }
        assert_eq!(state.finish_column, 75);
        assert!(state.winner.is_none());
    }

    #[test]
    fn names_are_unique_even_when_the_pool_cycles() {
        // 12 racers on a 10-name pool forces two pool repeats.
        let state = race(40, 80, 12);

        let mut names: Vec<&str> = state.tortoises.iter().map(|t| t.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 12);

        assert_eq!(state.tortoises[0].name, "Speedy 1");
        assert_eq!(state.tortoises[10].name, "Speedy 11");
    }

    #[test]
    fn short_viewport_is_a_configuration_error() {
        let mut rng = SimpleRng::new(1);
        let err = RaceState::new(4, 80, 3, &mut rng).unwrap_err();
        assert_eq!(err.required_rows, 9);
        assert_eq!(err.available_rows, 4);
    }

    #[test]
    fn minimum_viewport_boundary() {
        let mut rng = SimpleRng::new(1);
        // N*2 + 3 rows exactly fits; one less does not.
        assert!(RaceState::new(13, 80, 5, &mut rng).is_ok());
        assert!(RaceState::new(12, 80, 5, &mut rng).is_err());
    }

    #[test]
    fn lane_rows_have_fixed_spacing() {
        let state = race(30, 80, 4);
        let rows: Vec<u16> = state.tortoises.iter().map(|t| t.row()).collect();
        assert_eq!(rows, vec![2, 4, 6, 8]);
    }

    #[test]
    fn speed_never_drops_below_the_floor() {
        let mut rng = SimpleRng::new(9);
        let mut state = race(30, 10_000, 3);

        // Force the worst case: every racer decelerating hard,
        // resampling disabled so the pull downward never lets up.
        state.resample_chance = 0.0;
        for t in &mut state.tortoises {
            t.acceleration = -1.0;
        }

        for _ in 0..200 {
            state.step(&mut rng);
            for t in &state.tortoises {
                assert!(t.speed >= SPEED_FLOOR, "speed fell to {}", t.speed);
            }
        }
    }

    #[test]
    fn positions_are_monotonically_non_decreasing() {
        let mut rng = SimpleRng::new(777);
        let mut state = race(30, 10_000, 5);

        let mut prev: Vec<f32> = state.tortoises.iter().map(|t| t.position).collect();
        for _ in 0..500 {
            state.step(&mut rng);
            for (t, p) in state.tortoises.iter().zip(&prev) {
                assert!(t.position >= *p);
            }
            prev = state.tortoises.iter().map(|t| t.position).collect();
        }
    }

    #[test]
    fn fixed_speed_racer_wins_on_frame_five() {
        let mut rng = SimpleRng::new(1);
        // width 15 puts the finish column at exactly 10.
        let mut state = race(30, 15, 1);
        state.resample_chance = 0.0;
        state.tortoises[0].speed = 2.0;
        state.tortoises[0].acceleration = 0.0;

        for expected_frame in 1..=4 {
            assert_eq!(state.step(&mut rng), None);
            assert_eq!(state.frame, expected_frame);
        }

        assert_eq!(state.step(&mut rng), Some(0));
        assert_eq!(state.frame, 5);
        assert_eq!(state.tortoises[0].position, 10.0);
        assert_eq!(state.winner_name(), Some("Speedy 1"));
    }

    #[test]
    fn first_in_creation_order_wins_same_frame_crossings() {
        let mut rng = SimpleRng::new(1);
        let mut state = race(30, 105, 3);
        state.resample_chance = 0.0;
        for t in &mut state.tortoises {
            t.acceleration = 0.0;
            t.position = 99.0;
        }
        // Lane 2 would cross by the larger margin, but lane 0 is
        // updated first and the pass stops there.
        state.tortoises[0].speed = 1.0;
        state.tortoises[2].speed = 50.0;

        assert_eq!(state.step(&mut rng), Some(0));

        // Racers after the winner were not updated this frame.
        assert_eq!(state.tortoises[1].position, 99.0);
        assert_eq!(state.tortoises[2].position, 99.0);
    }

    #[test]
    fn finished_race_is_immutable() {
        let mut rng = SimpleRng::new(1);
        let mut state = race(30, 15, 2);
        state.resample_chance = 0.0;
        state.tortoises[0].speed = 20.0;
        state.tortoises[0].acceleration = 0.0;

        assert_eq!(state.step(&mut rng), Some(0));
        let frozen: Vec<f32> = state.tortoises.iter().map(|t| t.position).collect();
        let frame = state.frame;

        assert_eq!(state.step(&mut rng), Some(0));
        assert_eq!(state.frame, frame);
        let after: Vec<f32> = state.tortoises.iter().map(|t| t.position).collect();
        assert_eq!(frozen, after);
    }

    #[test]
    fn configuration_error_is_plain_text() {
        let err = ConfigurationError {
            required_rows: 13,
            available_rows: 10,
        };
        let msg = err.to_string();
        assert!(msg.contains("too small"));
        assert!(msg.contains("13"));
        assert!(msg.contains("10"));
    }
}
