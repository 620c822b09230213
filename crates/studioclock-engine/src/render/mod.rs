//! GPU rendering subsystem.
//!
//! Renderers replay a [`Canvas`](crate::scene::Canvas) and issue GPU commands
//! via wgpu. Each renderer owns its GPU resources (pipelines, buffers).
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - Vertex shader converts to NDC using a viewport uniform.

mod ctx;
pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};
