//! Terminal presentation for the race.
//!
//! Rendering goes through a simple framebuffer: the view maps race
//! state into styled cells (pure, unit-testable), and the renderer
//! flushes whole frames to the terminal behind the [`Surface`] trait.
//! Framebuffer writes are total — out-of-bounds coordinates are
//! silently dropped, never errors.

pub mod fb;
pub mod race_view;
pub mod renderer;

pub use tortoise_rush_core as core;
pub use tortoise_rush_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use race_view::RaceView;
pub use renderer::{encode_frame_into, Surface, TerminalRenderer};
