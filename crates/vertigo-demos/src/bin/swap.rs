use std::process::ExitCode;

use vertigo_demos::scenes::SwapTriangles;
use vertigo_demos::shader_dir;
use vertigo_engine::app::run_scene;
use vertigo_engine::config::DemoConfig;

fn main() -> ExitCode {
    let config = DemoConfig::new("swap")
        .shader_dir(shader_dir("colored"))
        .from_env();
    run_scene(config, SwapTriangles::new())
}
