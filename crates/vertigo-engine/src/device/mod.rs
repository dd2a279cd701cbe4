//! Surface, device and queue for the single window.
//!
//! [`Gpu`] is created once the window exists, hands out one [`GpuFrame`] per
//! redraw and maps swapchain failures to a [`SurfaceErrorAction`].

mod frame;
mod gpu;
mod init;
mod surface;

pub use frame::{GpuFrame, SurfaceErrorAction};
pub use gpu::Gpu;
pub use init::GpuInit;
