//! Surface capability negotiation.
//!
//! Each helper takes the list the adapter reported and never fails once that
//! list is non-empty.

/// First sRGB format if wanted and offered, else the adapter's first choice.
pub(crate) fn pick_format(
    formats: &[wgpu::TextureFormat],
    srgb: bool,
) -> Option<wgpu::TextureFormat> {
    let preferred = srgb
        .then(|| formats.iter().copied().find(|f| f.is_srgb()))
        .flatten();
    preferred.or_else(|| formats.first().copied())
}

pub(crate) fn pick_alpha_mode(
    modes: &[wgpu::CompositeAlphaMode],
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    match requested {
        Some(mode) if modes.contains(&mode) => mode,
        _ => modes.first().copied().unwrap_or(wgpu::CompositeAlphaMode::Auto),
    }
}

/// `Auto*` modes are always accepted by wgpu; concrete modes must be listed.
pub(crate) fn pick_present_mode(
    modes: &[wgpu::PresentMode],
    requested: wgpu::PresentMode,
) -> wgpu::PresentMode {
    match requested {
        wgpu::PresentMode::AutoVsync | wgpu::PresentMode::AutoNoVsync => requested,
        mode if modes.contains(&mode) => mode,
        _ => wgpu::PresentMode::Fifo,
    }
}
