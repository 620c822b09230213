//! Studio clock: an LED-style analog/digital clock face.
//!
//! Sixty positions around a circle carry twelve fixed five-minute markers and
//! one moving second LED; an "HH:MM" readout sits in the middle. Marks stay lit
//! until the face is wiped at the top of every minute.
//!
//! Layers:
//! - [`geometry`]: tick index to screen coordinates
//! - [`config`]: palette, layout and highlight rules
//! - [`time_source`]: where the current time comes from
//! - [`face`]: the per-frame state machine drawing onto a canvas
//! - [`app`]: glue to the engine runtime

pub mod app;
pub mod config;
pub mod error;
pub mod face;
pub mod font;
pub mod geometry;
pub mod time_source;

pub use app::{run, ClockApp};
pub use config::{ClockConfig, HighlightRule, Layout, Palette, Rgb};
pub use error::{Error, Result};
pub use face::{ClockFace, LoopState};
pub use geometry::{tick_position, Point2D};
pub use time_source::{ClockReading, LocalClock, TimeSource};
