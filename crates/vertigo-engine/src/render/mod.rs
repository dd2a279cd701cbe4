//! GPU rendering.
//!
//! The frame is cleared by [`FrameCtx::render`](crate::core::FrameCtx::render);
//! renderers then load the cleared target and draw on top of it.

mod ctx;
mod mesh;

pub use ctx::{RenderCtx, RenderTarget};
pub use mesh::MeshRenderer;
