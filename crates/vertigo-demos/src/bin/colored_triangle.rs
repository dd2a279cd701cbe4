use std::process::ExitCode;

use vertigo_demos::scenes::ColoredTriangle;
use vertigo_demos::shader_dir;
use vertigo_engine::app::run_scene;
use vertigo_engine::config::DemoConfig;

fn main() -> ExitCode {
    let config = DemoConfig::new("colored triangle")
        .shader_dir(shader_dir("colored"))
        .from_env();
    run_scene(config, ColoredTriangle::new())
}
