use std::f32::consts::PI;

use crate::geometry::MeshVertex;

/// Position on a circle around the Y axis.
///
/// Returns `(x, z) = (a·sin(2π(i+p)/360), a·cos(2π(i+p)/360))` for index `i`
/// and phase `p`, both in degrees.
pub fn orbit_xz(index: i32, phase_deg: f32, amplitude: f32) -> (f32, f32) {
    let angle = 2.0 * PI * (index as f32 + phase_deg) / 360.0;
    (amplitude * angle.sin(), amplitude * angle.cos())
}

/// One animated point: a phase offset and the mesh vertices sitting on it.
///
/// Several vertices share a point when triangles share a corner. Vertices are
/// addressed by their position in the finished mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitPoint {
    pub phase: f32,
    /// Added to the orbit's x; lets a whole shape ride one orbit rigidly.
    pub x_offset: f32,
    pub vertices: Vec<usize>,
}

impl OrbitPoint {
    pub fn new(phase: f32, vertices: impl Into<Vec<usize>>) -> Self {
        Self {
            phase,
            x_offset: 0.0,
            vertices: vertices.into(),
        }
    }

    pub fn with_x_offset(mut self, x_offset: f32) -> Self {
        self.x_offset = x_offset;
        self
    }
}

/// Points that rotate together around the Y axis, staying equidistant.
#[derive(Debug, Clone, PartialEq)]
pub struct Orbit {
    amplitude: f32,
    points: Vec<OrbitPoint>,
}

impl Orbit {
    pub fn new(amplitude: f32, points: Vec<OrbitPoint>) -> Self {
        Self { amplitude, points }
    }

    /// Writes x/z of every listed vertex for angular index `index`.
    ///
    /// Panics if a point names a vertex outside `vertices`; orbits are built
    /// alongside their mesh, so that is a construction bug.
    pub fn apply<V: MeshVertex>(&self, index: i32, vertices: &mut [V]) {
        for point in &self.points {
            let (x, z) = orbit_xz(index, point.phase, self.amplitude);
            for &i in &point.vertices {
                let pos = vertices[i].position_mut();
                pos[0] = x + point.x_offset;
                pos[2] = z;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Vertex;

    const EPS: f32 = 1e-5;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < EPS
    }

    // ── orbit_xz ──────────────────────────────────────────────────────────

    #[test]
    fn orbit_matches_closed_form() {
        for &(i, p) in &[(0, 0.0), (30, 45.0), (90, -45.0), (200, 135.0), (359, -135.0)] {
            let (x, z) = orbit_xz(i, p, 0.5);
            let angle = 2.0 * std::f64::consts::PI * (i as f64 + p as f64) / 360.0;
            assert!(close(x, (0.5 * angle.sin()) as f32), "x at i={i} p={p}");
            assert!(close(z, (0.5 * angle.cos()) as f32), "z at i={i} p={p}");
        }
    }

    #[test]
    fn orbit_quarter_turns() {
        let (x, z) = orbit_xz(0, 0.0, 0.5);
        assert!(close(x, 0.0) && close(z, 0.5));
        let (x, z) = orbit_xz(90, 0.0, 0.5);
        assert!(close(x, 0.5) && close(z, 0.0));
        let (x, z) = orbit_xz(0, 180.0, 0.5);
        assert!(close(x, 0.0) && close(z, -0.5));
    }

    #[test]
    fn points_stay_on_the_circle() {
        for i in 0..360 {
            let (x, z) = orbit_xz(i, 45.0, 0.5);
            assert!(close((x * x + z * z).sqrt(), 0.5));
        }
    }

    // ── apply ─────────────────────────────────────────────────────────────

    #[test]
    fn apply_moves_only_listed_vertices() {
        let mut vertices = vec![
            Vertex::new(0.0, 0.5, 0.0),
            Vertex::new(9.0, -0.5, 9.0),
            Vertex::new(9.0, -0.5, 9.0),
        ];
        let orbit = Orbit::new(
            0.5,
            vec![OrbitPoint::new(-45.0, [1]), OrbitPoint::new(45.0, [2])],
        );

        orbit.apply(10, &mut vertices);

        assert_eq!(vertices[0].pos, [0.0, 0.5, 0.0]);
        let (x, z) = orbit_xz(10, -45.0, 0.5);
        assert!(close(vertices[1].pos[0], x) && close(vertices[1].pos[2], z));
        assert_eq!(vertices[1].pos[1], -0.5);
        let (x, z) = orbit_xz(10, 45.0, 0.5);
        assert!(close(vertices[2].pos[0], x) && close(vertices[2].pos[2], z));
    }

    #[test]
    fn shared_corner_vertices_move_together() {
        let mut vertices = vec![Vertex::new(0.0, 0.0, 0.0); 4];
        let orbit = Orbit::new(0.5, vec![OrbitPoint::new(135.0, [0, 3])]);
        orbit.apply(77, &mut vertices);
        assert_eq!(vertices[0], vertices[3]);
        assert_eq!(vertices[1], Vertex::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn x_offset_shifts_without_changing_depth() {
        let mut vertices = vec![Vertex::new(0.0, 0.0, 0.0); 2];
        let orbit = Orbit::new(
            0.5,
            vec![
                OrbitPoint::new(-90.0, [0]),
                OrbitPoint::new(-90.0, [1]).with_x_offset(0.15),
            ],
        );
        orbit.apply(33, &mut vertices);
        assert!(close(vertices[1].pos[0] - vertices[0].pos[0], 0.15));
        assert!(close(vertices[1].pos[2], vertices[0].pos[2]));
    }

    #[test]
    fn points_keep_their_phase_gap() {
        let mut vertices = vec![Vertex::new(0.0, 0.0, 0.0); 2];
        let orbit = Orbit::new(
            0.5,
            vec![OrbitPoint::new(0.0, [0]), OrbitPoint::new(120.0, [1])],
        );
        for i in [0, 45, 170, 300] {
            orbit.apply(i, &mut vertices);
            let [ax, _, az] = vertices[0].pos;
            let [bx, _, bz] = vertices[1].pos;
            // chord of a 120 degree arc on a radius 0.5 circle
            let chord = ((ax - bx).powi(2) + (az - bz).powi(2)).sqrt();
            assert!((chord - 0.5 * 3f32.sqrt()).abs() < 1e-4);
        }
    }
}
