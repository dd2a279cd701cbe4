use vertigo_engine::core::{App, AppControl, FrameCtx};

/// First exercise: an empty window, cleared every frame, closed by any key.
pub struct HelloWindow {
    clear_color: wgpu::Color,
}

impl HelloWindow {
    pub fn new(clear_color: wgpu::Color) -> Self {
        Self { clear_color }
    }
}

impl App for HelloWindow {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        ctx.render(self.clear_color, |_, _| {})
    }
}
