//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the single exercise window, and wires them
//! to the GPU layer and the interrupt flag.

mod runtime;

pub use runtime::{RunOutcome, Runtime, RuntimeConfig};
