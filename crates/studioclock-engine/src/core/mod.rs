//! Core engine-facing contracts.
//!
//! The stable interface between the runtime (platform loop) and the
//! application: a per-frame callback, the context it receives, and the
//! directive it returns.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
