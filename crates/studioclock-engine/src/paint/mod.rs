//! Paint model shared between the canvas and renderers.
//!
//! Colors are linear, premultiplied RGBA. Conversion from the sRGB byte
//! triples the application speaks happens once, at construction.

pub mod color;

pub use color::Color;
