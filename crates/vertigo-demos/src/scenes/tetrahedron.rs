use vertigo_engine::animate::{AngularIndex, Orbit, OrbitPoint};
use vertigo_engine::geometry::{ColorVertex, Mesh, Triangle};
use vertigo_engine::scene::Scene;
use vertigo_engine::time::FrameTime;

use crate::AMPLITUDE;

// sin(120°) · 0.5
const S: f32 = 0.433_012_7;

const APEX: [f32; 3] = [0.0, 0.5, 0.0];
const A: [f32; 3] = [0.0, -0.5, 0.5];
const B: [f32; 3] = [S, -0.5, -0.25];
const C: [f32; 3] = [-S, -0.5, -0.25];

const FACES: [Triangle; 4] = [
    Triangle::flat(A, B, APEX, [1.0, 0.2, 0.2]),
    Triangle::flat(B, C, APEX, [0.2, 1.0, 0.2]),
    Triangle::flat(C, A, APEX, [0.2, 0.2, 1.0]),
    Triangle::flat(A, C, B, [1.0, 1.0, 0.2]),
];

/// Fifth exercise: four flat-shaded faces around a fixed apex.
///
/// Each base corner appears in three faces; all copies are moved together so
/// the faces never come apart.
pub struct Tetrahedron {
    mesh: Mesh<ColorVertex>,
    orbit: Orbit,
    index: AngularIndex,
}

impl Tetrahedron {
    pub fn new() -> Self {
        Self {
            mesh: Mesh::from_triangles(&FACES),
            orbit: Orbit::new(
                AMPLITUDE,
                vec![
                    OrbitPoint::new(0.0, [0, 7, 9]),
                    OrbitPoint::new(120.0, [1, 3, 11]),
                    OrbitPoint::new(240.0, [4, 6, 10]),
                ],
            ),
            index: AngularIndex::degrees(),
        }
    }
}

impl Default for Tetrahedron {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for Tetrahedron {
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
    use vertigo_engine::geometry::MeshVertex;

    fn initial() -> Vec<ColorVertex> {
        FACES.iter().flat_map(|t| t.vertices).collect()
    }

    #[test]
    fn draws_twelve_vertices_per_frame() {
        let call = Tetrahedron::new().mesh().draw_call();
        assert_eq!(call.vertex_count, 12);
        assert_eq!(call.topology, wgpu::PrimitiveTopology::TriangleList);
    }

    #[test]
    fn first_frame_matches_hand_written_geometry() {
        let mut scene = Tetrahedron::new();
        scene.update(at(0));
        assert_positions_close(scene.mesh().vertices(), &initial());
    }

    #[test]
    fn every_copy_of_a_corner_moves_together() {
        let mut scene = Tetrahedron::new();
        for frame in 0..200 {
            scene.update(at(frame));
        }
        let v = scene.mesh().vertices();
        for group in [[0, 7, 9], [1, 3, 11], [4, 6, 10]] {
            let p = v[group[0]].position();
            assert!(group.iter().all(|&i| v[i].position() == p));
        }
    }

    #[test]
    fn apex_and_colors_are_fixed() {
        let mut scene = Tetrahedron::new();
        let before = initial();
        for frame in 0..100 {
            scene.update(at(frame));
        }
        for (i, (now, then)) in scene.mesh().vertices().iter().zip(&before).enumerate() {
            assert_eq!(now.color, then.color);
            if i % 3 == 2 && i < 9 {
                assert_eq!(now.pos, APEX);
            }
        }
    }
}
