use vertigo_engine::animate::{AngularIndex, Orbit, OrbitPoint};
use vertigo_engine::geometry::{Mesh, Vertex};
use vertigo_engine::scene::Scene;
use vertigo_engine::time::FrameTime;

use crate::AMPLITUDE;

const INITIAL: [Vertex; 3] = [
    Vertex::new(0.0, 0.5, 0.0),
    Vertex::new(-0.5, -0.5, 0.0),
    Vertex::new(0.5, -0.5, 0.0),
];

/// Second exercise: a single position-only triangle.
///
/// The apex stays put while the two base corners orbit the Y axis half a turn
/// apart, so the triangle spins like a blade seen from the side.
pub struct SpinningTriangle {
    mesh: Mesh<Vertex>,
    orbit: Orbit,
    index: AngularIndex,
}

impl SpinningTriangle {
    pub fn new() -> Self {
        Self {
            mesh: Mesh::new(INITIAL.to_vec()),
            orbit: Orbit::new(
                AMPLITUDE,
                vec![OrbitPoint::new(270.0, [1]), OrbitPoint::new(90.0, [2])],
            ),
            index: AngularIndex::degrees(),
        }
    }
}

impl Default for SpinningTriangle {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for SpinningTriangle {
    type Vertex = Vertex;

    fn mesh(&self) -> &Mesh<Vertex> {
        &self.mesh
    }

    fn update(&mut self, _time: FrameTime) {
        self.orbit.apply(self.index.value(), self.mesh.vertices_mut());
        self.index.advance();
    }
}
