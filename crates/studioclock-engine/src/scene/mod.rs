//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands
//! - retain them across frames until the canvas is explicitly cleared
//! - keep shape-specific helpers isolated per shape file under `scene::shapes`

mod canvas;
mod cmd;

pub mod shapes;

pub use canvas::Canvas;
pub use cmd::DrawCmd;
pub use shapes::circle::CircleCmd;
pub use shapes::text::TextCmd;
