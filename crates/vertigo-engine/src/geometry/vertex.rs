use bytemuck::{Pod, Zeroable};

/// A vertex type that can live in a [`Mesh`](super::Mesh) vertex buffer.
pub trait MeshVertex: Pod {
    /// Attribute layout, `location 0` being the position.
    fn attributes() -> &'static [wgpu::VertexAttribute];

    fn position(&self) -> [f32; 3];

    fn position_mut(&mut self) -> &mut [f32; 3];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: Self::attributes(),
        }
    }
}

// ── position only ─────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub pos: [f32; 3],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { pos: [x, y, z] }
    }
}

impl MeshVertex for Vertex {
    fn attributes() -> &'static [wgpu::VertexAttribute] {
        &Self::ATTRS
    }

    fn position(&self) -> [f32; 3] {
        self.pos
    }

    fn position_mut(&mut self) -> &mut [f32; 3] {
        &mut self.pos
    }
}

// ── position + color ──────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ColorVertex {
    pub pos: [f32; 3],
    pub color: [f32; 3],
}

impl ColorVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x3  // color
    ];

    pub const fn new(pos: [f32; 3], color: [f32; 3]) -> Self {
        Self { pos, color }
    }
}

impl MeshVertex for ColorVertex {
    fn attributes() -> &'static [wgpu::VertexAttribute] {
        &Self::ATTRS
    }

    fn position(&self) -> [f32; 3] {
        self.pos
    }

    fn position_mut(&mut self) -> &mut [f32; 3] {
        &mut self.pos
    }
}

/// Three colored vertices, wound counter-clockwise.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Triangle {
    pub vertices: [ColorVertex; 3],
}

impl Triangle {
    /// A flat-shaded triangle: every corner gets `color`.
    pub const fn flat(a: [f32; 3], b: [f32; 3], c: [f32; 3], color: [f32; 3]) -> Self {
        Self {
            vertices: [
                ColorVertex::new(a, color),
                ColorVertex::new(b, color),
                ColorVertex::new(c, color),
            ],
        }
    }
}
