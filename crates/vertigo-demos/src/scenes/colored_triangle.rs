use vertigo_engine::animate::{AngularIndex, Orbit, OrbitPoint};
use vertigo_engine::geometry::{ColorVertex, Mesh};
use vertigo_engine::scene::Scene;
use vertigo_engine::time::FrameTime;

use crate::AMPLITUDE;

// sin(120°) · 0.5
const S: f32 = 0.433_012_7;

const INITIAL: [ColorVertex; 3] = [
    ColorVertex::new([0.0, 0.5, 0.5], [1.0, 0.0, 0.0]),
    ColorVertex::new([-S, -0.5, -0.25], [0.0, 1.0, 0.0]),
    ColorVertex::new([S, -0.5, -0.25], [0.0, 0.0, 1.0]),
];

/// Third exercise: one triangle with a color per vertex.
///
/// All three corners ride the same orbit a third of a turn apart, so the
/// triangle twists around the Y axis while its corners stay equidistant.
pub struct ColoredTriangle {
    mesh: Mesh<ColorVertex>,
    orbit: Orbit,
    index: AngularIndex,
}

impl ColoredTriangle {
    pub fn new() -> Self {
        Self {
            mesh: Mesh::new(INITIAL.to_vec()),
            orbit: Orbit::new(
                AMPLITUDE,
                vec![
                    OrbitPoint::new(0.0, [0]),
                    OrbitPoint::new(240.0, [1]),
                    OrbitPoint::new(120.0, [2]),
                ],
            ),
            index: AngularIndex::degrees(),
        }
    }
}

impl Default for ColoredTriangle {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for ColoredTriangle {
    type Vertex = ColorVertex;

    fn mesh(&self) -> &Mesh<ColorVertex> {
        &self.mesh
    }

    fn update(&mut self, _time: FrameTime) {
        self.orbit.apply(self.index.value(), self.mesh.vertices_mut());
        self.index.advance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenes::test_util::{assert_positions_close, at};

    #[test]
    fn first_draw_is_three_vertex_triangle_list() {
        let call = ColoredTriangle::new().mesh().draw_call();
        assert_eq!(call.vertex_count, 3);
        assert_eq!(call.topology, wgpu::PrimitiveTopology::TriangleList);
    }

    #[test]
    fn upload_without_animation_is_identity() {
        let scene = ColoredTriangle::new();
        let uploaded: &[ColorVertex] = bytemuck::cast_slice(scene.mesh().as_bytes());
        assert_eq!(uploaded, &INITIAL);
    }

    #[test]
    fn first_frame_matches_hand_written_geometry() {
        let mut scene = ColoredTriangle::new();
        scene.update(at(0));
        assert_positions_close(scene.mesh().vertices(), &INITIAL);
    }

    #[test]
    fn colors_and_heights_never_change() {
        let mut scene = ColoredTriangle::new();
        for frame in 0..720 {
            scene.update(at(frame));
        }
        for (v, init) in scene.mesh().vertices().iter().zip(&INITIAL) {
            assert_eq!(v.color, init.color);
            assert_eq!(v.pos[1], init.pos[1]);
        }
    }

    #[test]
    fn full_turn_comes_back() {
        let mut scene = ColoredTriangle::new();
        for frame in 0..=360 {
            scene.update(at(frame));
        }
        assert_positions_close(scene.mesh().vertices(), &INITIAL);
    }
}
