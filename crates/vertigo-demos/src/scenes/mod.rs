//! One module per exercise, in the order they build on each other.

mod colored_triangle;
mod hello_window;
mod rotating_square;
mod spinning_triangle;
mod swap;
mod tetrahedron;

pub use colored_triangle::ColoredTriangle;
pub use hello_window::HelloWindow;
pub use rotating_square::RotatingSquare;
pub use spinning_triangle::SpinningTriangle;
pub use swap::SwapTriangles;
pub use tetrahedron::Tetrahedron;

#[cfg(test)]
pub(crate) mod test_util {
    use vertigo_engine::geometry::MeshVertex;
    use vertigo_engine::time::FrameTime;

    pub const EPS: f32 = 1e-5;

    /// Frame `index` of a steady 60 Hz run.
    pub fn at(index: u64) -> FrameTime {
        FrameTime {
            dt: 1.0 / 60.0,
            frame_index: index,
        }
    }

    pub fn assert_positions_close<V: MeshVertex>(actual: &[V], expected: &[V]) {
        assert_eq!(actual.len(), expected.len());
        for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
            let (a, e) = (a.position(), e.position());
            for axis in 0..3 {
                assert!(
                    (a[axis] - e[axis]).abs() < EPS,
                    "vertex {i} axis {axis}: {a:?} vs {e:?}"
                );
            }
        }
    }
}
