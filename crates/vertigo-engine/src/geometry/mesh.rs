use super::{ColorVertex, MeshVertex, Triangle};

/// Parameters of the single non-indexed draw issued for a mesh.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DrawCall {
    pub topology: wgpu::PrimitiveTopology,
    pub vertex_count: u32,
}

/// A fixed, ordered list of vertices drawn with one topology.
///
/// The vertex count never changes after construction; animators only move
/// positions through [`vertices_mut`](Self::vertices_mut).
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh<V> {
    vertices: Vec<V>,
    topology: wgpu::PrimitiveTopology,
}

impl<V: MeshVertex> Mesh<V> {
    /// A triangle list.
    pub fn new(vertices: Vec<V>) -> Self {
        Self {
            vertices,
            topology: wgpu::PrimitiveTopology::TriangleList,
        }
    }

    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Mutable access to the vertex data; the slice length is fixed.
    pub fn vertices_mut(&mut self) -> &mut [V] {
        &mut self.vertices
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn topology(&self) -> wgpu::PrimitiveTopology {
        self.topology
    }

    /// Size of the vertex data in bytes (count × vertex size).
    pub fn byte_len(&self) -> u64 {
        (self.vertices.len() * std::mem::size_of::<V>()) as u64
    }

    /// Raw bytes for upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn draw_call(&self) -> DrawCall {
        DrawCall {
            topology: self.topology,
            vertex_count: self.vertices.len() as u32,
        }
    }
}

impl Mesh<ColorVertex> {
    /// Flattens triangles into a triangle list, keeping their order.
    pub fn from_triangles(triangles: &[Triangle]) -> Self {
        Self::new(triangles.iter().flat_map(|t| t.vertices).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Vertex;

    fn two_triangles() -> Vec<Triangle> {
        let red = [1.0, 0.0, 0.0];
        let blue = [0.0, 0.0, 1.0];
        vec![
            Triangle::flat([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0], red),
            Triangle::flat([0.0, 0.0, 0.5], [1.0, 0.0, 0.5], [0.0, 1.0, 0.5], blue),
        ]
    }

    #[test]
    fn byte_len_is_count_times_vertex_size() {
        let mesh = Mesh::new(vec![Vertex::new(0.0, 0.0, 0.0); 3]);
        assert_eq!(mesh.byte_len(), 36);
        assert_eq!(mesh.as_bytes().len() as u64, mesh.byte_len());
    }

    #[test]
    fn from_triangles_keeps_order() {
        let mesh = Mesh::from_triangles(&two_triangles());
        assert_eq!(mesh.vertices().len(), 6);
        assert_eq!(mesh.vertices()[0].color, [1.0, 0.0, 0.0]);
        assert_eq!(mesh.vertices()[3].color, [0.0, 0.0, 1.0]);
        assert_eq!(mesh.vertices()[5].pos, [0.0, 1.0, 0.5]);
    }

    #[test]
    fn draw_call_covers_every_vertex() {
        let mesh = Mesh::from_triangles(&two_triangles());
        assert_eq!(
            mesh.draw_call(),
            DrawCall {
                topology: wgpu::PrimitiveTopology::TriangleList,
                vertex_count: 6,
            }
        );
    }

    #[test]
    fn empty_mesh_draws_nothing() {
        let mesh: Mesh<Vertex> = Mesh::new(Vec::new());
        assert!(mesh.is_empty());
        assert_eq!(mesh.byte_len(), 0);
        assert_eq!(mesh.draw_call().vertex_count, 0);
    }

    #[test]
    fn upload_bytes_mirror_positions() {
        let mesh = Mesh::new(vec![Vertex::new(0.25, -0.5, 1.0)]);
        let floats: &[f32] = bytemuck::cast_slice(mesh.as_bytes());
        assert_eq!(floats, &[0.25, -0.5, 1.0]);
    }
}
