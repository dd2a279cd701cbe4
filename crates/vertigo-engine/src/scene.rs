//! Animated scenes: a fixed mesh plus the animator that moves it.

use crate::geometry::{Mesh, MeshVertex};
use crate::time::FrameTime;

/// One exercise's geometry and per-frame update.
pub trait Scene {
    type Vertex: MeshVertex;

    fn mesh(&self) -> &Mesh<Self::Vertex>;

    /// Advances the animation by one frame, mutating vertex positions in place.
    ///
    /// Called before the frame is drawn; `time.frame_index` starts at 0.
    fn update(&mut self, time: FrameTime);
}
