use std::process::ExitCode;

use vertigo_demos::scenes::SpinningTriangle;
use vertigo_demos::shader_dir;
use vertigo_engine::app::run_scene;
use vertigo_engine::config::DemoConfig;

fn main() -> ExitCode {
    let config = DemoConfig::new("triangle")
        .shader_dir(shader_dir("plain"))
        .from_env();
    run_scene(config, SpinningTriangle::new())
}
