use winit::keyboard::PhysicalKey;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    /// Close the window and leave the render loop.
    Exit,
}

/// Application contract implemented by the exercises.
pub trait App {
    /// Called for each key press (repeats excluded). Any key closes by default.
    fn on_key_pressed(&mut self, key: PhysicalKey) -> AppControl {
        log::info!("key {key:?} pressed, closing");
        AppControl::Exit
    }

    /// Called once per rendered frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
