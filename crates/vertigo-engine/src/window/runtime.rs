use anyhow::{Context, Result, anyhow};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App, AppControl, FrameCtx};
use crate::device::{Gpu, GpuInit};
use crate::signal::ShutdownFlag;
use crate::time::FrameClock;

/// Window configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

/// How the render loop ended.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RunOutcome {
    /// The window was closed (close button, key press, or app request).
    Closed,
    /// An interrupt signal arrived.
    Interrupted,
}

/// Wake-ups sent into the event loop from other threads.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum RuntimeEvent {
    /// The shutdown flag was raised.
    Interrupt,
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window and runs the render loop until it closes.
    ///
    /// Window or GPU creation failure is returned as an error once the event
    /// loop has shut down.
    pub fn run<A>(
        config: RuntimeConfig,
        gpu_init: GpuInit,
        shutdown: ShutdownFlag,
        app: A,
    ) -> Result<RunOutcome>
    where
        A: App + 'static,
    {
        let event_loop = EventLoop::<RuntimeEvent>::with_user_event()
            .build()
            .context("failed to create winit EventLoop")?;

        // Minimized windows stop redrawing; the proxy wakes the loop anyway.
        let proxy = event_loop.create_proxy();
        shutdown.set_waker(move || {
            let _ = proxy.send_event(RuntimeEvent::Interrupt);
        });

        let mut state = AppState::new(config, gpu_init, shutdown, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        state.finish()
    }
}

#[self_referencing]
struct WindowEntry {
    clock: FrameClock,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

/// Lifecycle: no window → RUNNING (window open) → CLOSING (window dropped).
struct AppState<A>
where
    A: App + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    shutdown: ShutdownFlag,
    app: A,

    entry: Option<WindowEntry>,
    outcome: Option<RunOutcome>,
    failure: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: App + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, shutdown: ShutdownFlag, app: A) -> Self {
        Self {
            config,
            gpu_init,
            shutdown,
            app,
            entry: None,
            outcome: None,
            failure: None,
        }
    }

    fn create_window_entry(&self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("window initialization failed")?;

        let gpu_init = self.gpu_init.clone();

        WindowEntryTryBuilder {
            clock: FrameClock::default(),
            window,
            gpu_builder: |w| {
                pollster::block_on(Gpu::new(w, gpu_init)).context("GPU initialization failed")
            },
        }
        .try_build()
    }

    /// Moves to CLOSING: drops GPU objects and the window, leaves the loop.
    fn close(&mut self, event_loop: &ActiveEventLoop, outcome: RunOutcome) {
        if self.outcome.is_none() {
            self.outcome = Some(outcome);
        }
        self.entry = None;
        event_loop.exit();
    }

    fn poll_shutdown(&mut self, event_loop: &ActiveEventLoop) -> bool {
        if self.outcome.is_none() && self.shutdown.is_requested() {
            log::info!("got interrupt signal, terminating");
            self.close(event_loop, RunOutcome::Interrupted);
            return true;
        }
        false
    }

    fn draw_frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(entry) = self.entry.as_mut() else { return };
        let app = &mut self.app;

        let control = entry.with_mut(|fields| {
            let time = fields.clock.tick();
            let mut ctx = FrameCtx {
                window: fields.window,
                gpu: fields.gpu,
                time,
            };
            app.on_frame(&mut ctx)
        });

        if control == AppControl::Exit {
            self.close(event_loop, RunOutcome::Closed);
        }
    }

    fn finish(self) -> Result<RunOutcome> {
        if let Some(e) = self.failure {
            return Err(e);
        }
        self.outcome
            .ok_or_else(|| anyhow!("event loop ended before a window was opened"))
    }
}

impl<A> ApplicationHandler<RuntimeEvent> for AppState<A>
where
    A: App + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() || self.outcome.is_some() {
            return;
        }

        match self.create_window_entry(event_loop) {
            Ok(entry) => {
                log::info!("window \"{}\" opened", self.config.title);
                entry.with_window(|w| w.request_redraw());
                self.entry = Some(entry);
            }
            Err(e) => {
                log::error!("{e:#}");
                self.failure = Some(e);
                event_loop.exit();
            }
        }
    }

    fn user_event(&mut self, event_loop: &ActiveEventLoop, event: RuntimeEvent) {
        match event {
            RuntimeEvent::Interrupt => {
                self.poll_shutdown(event_loop);
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.poll_shutdown(event_loop) {
            return;
        }

        // Continuous redraw: every iteration renders a frame.
        event_loop.set_control_flow(ControlFlow::Wait);
        if let Some(entry) = &self.entry {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(entry) = self.entry.as_mut() else { return };
        if entry.with_window(|w| w.id()) != window_id {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                log::info!("close requested");
                self.close(event_loop, RunOutcome::Closed);
            }

            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed && !event.repeat =>
            {
                if self.app.on_key_pressed(event.physical_key) == AppControl::Exit {
                    self.close(event_loop, RunOutcome::Closed);
                }
            }

            WindowEvent::Resized(new_size) => {
                entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                entry.with_window(|w| w.request_redraw());
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                let new_size = entry.with_window(|w| w.inner_size());
                entry.with_gpu_mut(|gpu| gpu.resize(new_size));
            }

            WindowEvent::RedrawRequested => {
                if !self.poll_shutdown(event_loop) {
                    self.draw_frame(event_loop);
                }
            }

            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.entry = None;
        log::debug!("event loop exiting");
    }
}
