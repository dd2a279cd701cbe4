use vertigo_engine::animate::{AngularIndex, Orbit, OrbitPoint};
use vertigo_engine::geometry::{ColorVertex, Mesh, MeshVertex};
use vertigo_engine::scene::Scene;
use vertigo_engine::time::FrameTime;

use crate::AMPLITUDE;

// 0.5 · sin(45°)
const C: f32 = 0.353_553_4;

const TOP_LEFT: [f32; 3] = [-C, 0.5, C];
const TOP_RIGHT: [f32; 3] = [C, 0.5, C];
const BOTTOM_RIGHT: [f32; 3] = [C, -0.5, -C];
const BOTTOM_LEFT: [f32; 3] = [-C, -0.5, -C];

const RED: [f32; 3] = [1.0, 0.2, 0.2];
const GREEN: [f32; 3] = [0.2, 1.0, 0.2];
const BLUE: [f32; 3] = [0.2, 0.2, 1.0];
const YELLOW: [f32; 3] = [1.0, 1.0, 0.2];

/// Two triangles sharing the top-left / bottom-right diagonal.
const INITIAL: [ColorVertex; 6] = [
    ColorVertex::new(TOP_LEFT, RED),
    ColorVertex::new(BOTTOM_LEFT, GREEN),
    ColorVertex::new(BOTTOM_RIGHT, BLUE),
    ColorVertex::new(TOP_LEFT, RED),
    ColorVertex::new(BOTTOM_RIGHT, BLUE),
    ColorVertex::new(TOP_RIGHT, YELLOW),
];

/// Frames between two debug dumps of the corner positions.
const DEBUG_EVERY: u64 = 60;

/// Fourth exercise: a quad made of two triangles.
///
/// The four corners sit a quarter turn apart (±45°, ±135°) on one orbit; the
/// top and bottom edges cross each other as the quad turns.
pub struct RotatingSquare {
    mesh: Mesh<ColorVertex>,
    orbit: Orbit,
    index: AngularIndex,
}

impl RotatingSquare {
    pub fn new() -> Self {
        Self {
            mesh: Mesh::new(INITIAL.to_vec()),
            orbit: Orbit::new(
                AMPLITUDE,
                vec![
                    OrbitPoint::new(-45.0, [0, 3]),
                    OrbitPoint::new(-135.0, [1]),
                    OrbitPoint::new(135.0, [2, 4]),
                    OrbitPoint::new(45.0, [5]),
                ],
            ),
            index: AngularIndex::degrees(),
        }
    }

    fn log_corners(&self, time: FrameTime) {
        let v = self.mesh.vertices();
        log::debug!(
            "frame {} ({:.1} ms) index {:3}: tl {:?} bl {:?} br {:?} tr {:?}",
            time.frame_index,
            time.dt * 1000.0,
            self.index.value(),
            v[0].position(),
            v[1].position(),
            v[2].position(),
            v[5].position()
        );
    }
}

impl Default for RotatingSquare {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for RotatingSquare {
    type Vertex = ColorVertex;

    fn mesh(&self) -> &Mesh<ColorVertex> {
        &self.mesh
    }

    fn update(&mut self, time: FrameTime) {
        self.orbit.apply(self.index.value(), self.mesh.vertices_mut());
        if time.every(DEBUG_EVERY) {
            self.log_corners(time);
        }
        self.index.advance();
    }
}
