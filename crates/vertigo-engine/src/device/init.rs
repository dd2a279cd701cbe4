/// GPU knobs for the window's surface and device.
///
/// Every field has a working default; exercises only ever change `vsync`.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Pick an sRGB surface format when the adapter offers one.
    pub srgb: bool,

    /// Swap on vertical blank. Off asks for `AutoNoVsync`, which still falls
    /// back to FIFO where nothing else is supported.
    pub vsync: bool,

    /// Requested alpha mode; ignored unless the surface supports it.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Device limits. The exercises need nothing past downlevel defaults.
    pub limits: wgpu::Limits,

    /// Frames the presentation engine may queue (hint).
    pub frame_latency: u32,
}

impl GpuInit {
    pub fn present_mode(&self) -> wgpu::PresentMode {
        if self.vsync {
            wgpu::PresentMode::AutoVsync
        } else {
            wgpu::PresentMode::AutoNoVsync
        }
    }
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            srgb: true,
            vsync: true,
            alpha_mode: None,
            limits: wgpu::Limits::downlevel_defaults(),
            frame_latency: 2,
        }
    }
}
