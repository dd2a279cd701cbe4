//! Fixed geometry records and the CPU-side mesh that feeds the vertex buffer.
//!
//! Convention: positions are already in clip space (x/y in -1..1, z in -1..1
//! and remapped to wgpu's 0..1 depth range by the vertex shaders).

mod mesh;
mod vertex;

pub use mesh::{DrawCall, Mesh};
pub use vertex::{ColorVertex, MeshVertex, Triangle, Vertex};
