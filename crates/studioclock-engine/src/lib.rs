//! Studio clock engine crate.
//!
//! Owns the platform + GPU runtime pieces the clock draws through: one window,
//! a wgpu surface, a persistent canvas and the renderers that present it.

pub mod device;
pub mod window;
pub mod input;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
pub mod text;
