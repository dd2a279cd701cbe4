//! Program bootstrap shared by the exercises.
//!
//! `run_scene` performs the fixed startup sequence: logging → interrupt
//! handler → shader program (fail fast) → window + render loop, and maps
//! the result to a process exit status.

use std::process::ExitCode;

use crate::config::DemoConfig;
use crate::core::{App, AppControl, FrameCtx};
use crate::geometry::MeshVertex;
use crate::logging::init_logging;
use crate::render::MeshRenderer;
use crate::scene::Scene;
use crate::shader::ShaderPipelineBuilder;
use crate::signal::{ShutdownFlag, install_interrupt_handler};
use crate::window::{RunOutcome, Runtime, RuntimeConfig};

/// Drives a [`Scene`]: update → upload → draw, once per frame.
pub struct SceneApp<S: Scene> {
    scene: S,
    renderer: MeshRenderer<S::Vertex>,
    clear_color: wgpu::Color,
    drawn_frames: u64,
}

impl<S: Scene> SceneApp<S> {
    pub fn new(scene: S, renderer: MeshRenderer<S::Vertex>, clear_color: wgpu::Color) -> Self {
        Self {
            scene,
            renderer,
            clear_color,
            drawn_frames: 0,
        }
    }
}

impl<S: Scene> App for SceneApp<S> {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        self.scene.update(ctx.time);

        let (scene, renderer) = (&self.scene, &mut self.renderer);
        let mut issued = None;
        let control = ctx.render(self.clear_color, |rctx, target| {
            issued = renderer.render(rctx, target, scene.mesh());
        });

        if let Some(call) = issued {
            if self.drawn_frames == 0 {
                log::debug!(
                    "first draw: {} vertices as {:?}",
                    call.vertex_count,
                    call.topology
                );
            }
            self.drawn_frames += 1;
        }

        control
    }
}

/// Runs a window-only app (no shader program).
pub fn run_app<A: App + 'static>(config: DemoConfig, app: A) -> ExitCode {
    init_logging(config.logging.clone());
    let Some(shutdown) = shutdown_flag() else {
        return ExitCode::FAILURE;
    };
    run_loop(&config, shutdown, app)
}

/// Builds the scene's shader program and runs it until the window closes.
///
/// Exit status: 0 when the window is closed, 1 on interrupt or on any
/// window, GPU or shader failure.
pub fn run_scene<S>(config: DemoConfig, scene: S) -> ExitCode
where
    S: Scene + 'static,
{
    init_logging(config.logging.clone());
    let Some(shutdown) = shutdown_flag() else {
        return ExitCode::FAILURE;
    };

    let program = match ShaderPipelineBuilder::new(config.shaders.clone())
        .build(<S::Vertex as MeshVertex>::attributes())
    {
        Ok(program) => program,
        Err(_) => {
            log::error!("shader program could not be built, exiting");
            return ExitCode::FAILURE;
        }
    };

    let app = SceneApp::new(scene, MeshRenderer::new(program), config.clear_color);
    run_loop(&config, shutdown, app)
}

fn shutdown_flag() -> Option<ShutdownFlag> {
    let shutdown = ShutdownFlag::new();
    match install_interrupt_handler(&shutdown) {
        Ok(()) => Some(shutdown),
        Err(e) => {
            log::error!("{e:#}");
            None
        }
    }
}

fn run_loop<A: App + 'static>(config: &DemoConfig, shutdown: ShutdownFlag, app: A) -> ExitCode {
    let runtime = RuntimeConfig {
        title: config.title.clone(),
        initial_size: config.initial_size,
    };

    match Runtime::run(runtime, config.gpu.clone(), shutdown, app) {
        Ok(RunOutcome::Closed) => ExitCode::SUCCESS,
        Ok(RunOutcome::Interrupted) => ExitCode::from(1),
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
