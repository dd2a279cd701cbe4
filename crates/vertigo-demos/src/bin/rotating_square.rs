use std::process::ExitCode;

use vertigo_demos::scenes::RotatingSquare;
use vertigo_demos::shader_dir;
use vertigo_engine::app::run_scene;
use vertigo_engine::config::DemoConfig;

fn main() -> ExitCode {
    let config = DemoConfig::new("rotating square")
        .shader_dir(shader_dir("colored"))
        .log_filter("info,vertigo_demos=debug")
        .from_env();
    run_scene(config, RotatingSquare::new())
}
