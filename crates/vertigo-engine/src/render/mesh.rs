use std::marker::PhantomData;

use crate::geometry::{DrawCall, Mesh, MeshVertex};
use crate::render::{RenderCtx, RenderTarget};
use crate::shader::{ShaderProgram, Stage};

/// Draws one [`Mesh`] with one linked [`ShaderProgram`].
///
/// The whole vertex buffer is re-uploaded every frame; meshes here hold a
/// dozen vertices at most. The pipeline is built lazily and rebuilt if the
/// surface format changes.
pub struct MeshRenderer<V> {
    program: ShaderProgram,

    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    vbo: Option<wgpu::Buffer>,
    vbo_size: u64,

    _vertex: PhantomData<V>,
}

impl<V: MeshVertex> MeshRenderer<V> {
    pub fn new(program: ShaderProgram) -> Self {
        Self {
            program,
            pipeline_format: None,
            pipeline: None,
            vbo: None,
            vbo_size: 0,
            _vertex: PhantomData,
        }
    }

    /// Uploads `mesh`, then issues its draw call into `target`.
    ///
    /// Returns the draw call issued, or `None` when there was nothing to draw.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        mesh: &Mesh<V>,
    ) -> Option<DrawCall> {
        if mesh.is_empty() || !ctx.has_area() {
            return None;
        }

        self.ensure_pipeline(ctx, mesh.topology());
        self.ensure_vertex_buffer(ctx, mesh.byte_len());

        let vbo = self.vbo.as_ref()?;
        ctx.queue.write_buffer(vbo, 0, mesh.as_bytes());

        let pipeline = self.pipeline.as_ref()?;
        let call = mesh.draw_call();

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("vertigo mesh pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        let (width, height) = ctx.viewport();
        rpass.set_viewport(0.0, 0.0, width, height, 0.0, 1.0);
        rpass.set_pipeline(pipeline);
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.draw(0..call.vertex_count, 0..1);

        Some(call)
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>, topology: wgpu::PrimitiveTopology) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        // Stage modules are only needed until the pipeline exists.
        let vs = self.program.create_module(ctx.device, Stage::Vertex);
        let fs = self.program.create_module(ctx.device, Stage::Fragment);

        let pipeline_layout = ctx
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("vertigo mesh pipeline layout"),
                bind_group_layouts: &[],
                immediate_size: 0,
            });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("vertigo mesh pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &vs,
                entry_point: Some(self.program.entry_point()),
                compilation_options: Default::default(),
                buffers: &[V::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &fs,
                entry_point: Some(self.program.entry_point()),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::debug!("mesh pipeline built for {:?}", ctx.surface_format);

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
    }

    fn ensure_vertex_buffer(&mut self, ctx: &RenderCtx<'_>, size: u64) {
        if self.vbo.is_some() && self.vbo_size == size {
            return;
        }

        self.vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("vertigo mesh vbo"),
            size,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.vbo_size = size;
    }
}
