use vertigo_engine::animate::{Orbit, OrbitPoint, OscillatorPair};
use vertigo_engine::geometry::{ColorVertex, Mesh};
use vertigo_engine::scene::Scene;
use vertigo_engine::time::FrameTime;

use crate::AMPLITUDE;

const HALF_WIDTH: f32 = 0.15;
const TOP: f32 = 0.4;
const BOTTOM: f32 = -0.4;

const WARM: [f32; 3] = [1.0, 0.5, 0.1];
const COOL: [f32; 3] = [0.1, 0.6, 1.0];

/// Left triangle (0..3) then right triangle (3..6), each wound top, left, right.
const INITIAL: [ColorVertex; 6] = [
    ColorVertex::new([-AMPLITUDE, TOP, 0.0], WARM),
    ColorVertex::new([-AMPLITUDE - HALF_WIDTH, BOTTOM, 0.0], WARM),
    ColorVertex::new([-AMPLITUDE + HALF_WIDTH, BOTTOM, 0.0], WARM),
    ColorVertex::new([AMPLITUDE, TOP, 0.0], COOL),
    ColorVertex::new([AMPLITUDE - HALF_WIDTH, BOTTOM, 0.0], COOL),
    ColorVertex::new([AMPLITUDE + HALF_WIDTH, BOTTOM, 0.0], COOL),
];

/// A rigid triangle riding one orbit: all three corners share the phase and
/// keep their horizontal offsets.
fn rigid_triangle(phase: f32, first: usize) -> Orbit {
    Orbit::new(
        AMPLITUDE,
        vec![
            OrbitPoint::new(phase, [first]),
            OrbitPoint::new(phase, [first + 1]).with_x_offset(-HALF_WIDTH),
            OrbitPoint::new(phase, [first + 2]).with_x_offset(HALF_WIDTH),
        ],
    )
}

/// Sixth exercise: two triangles trading places.
///
/// Each triangle follows its own counter of an [`OscillatorPair`]; the
/// counters run in opposite directions, so the triangles pass each other,
/// swap sides, then slide back.
pub struct SwapTriangles {
    mesh: Mesh<ColorVertex>,
    left: Orbit,
    right: Orbit,
    osc: OscillatorPair,
}

impl SwapTriangles {
    pub fn new() -> Self {
        Self {
            mesh: Mesh::new(INITIAL.to_vec()),
            left: rigid_triangle(-90.0, 0),
            right: rigid_triangle(90.0, 3),
            osc: OscillatorPair::half_turns(),
        }
    }

    pub fn oscillator(&self) -> &OscillatorPair {
        &self.osc
    }
}

impl Default for SwapTriangles {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for SwapTriangles {
    type Vertex = ColorVertex;

    fn mesh(&self) -> &Mesh<ColorVertex> {
        &self.mesh
    }

    fn update(&mut self, _time: FrameTime) {
        self.left.apply(self.osc.a(), self.mesh.vertices_mut());
        self.right.apply(self.osc.b(), self.mesh.vertices_mut());
        if self.osc.advance() {
            log::debug!(
                "swap: turning around at a={} b={}, a now heading {:+}",
                self.osc.a(),
                self.osc.b(),
                self.osc.direction()
            );
        }
    }
}
