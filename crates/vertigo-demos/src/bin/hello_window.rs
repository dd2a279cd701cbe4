use std::process::ExitCode;

use vertigo_demos::scenes::HelloWindow;
use vertigo_engine::app::run_app;
use vertigo_engine::config::DemoConfig;

fn main() -> ExitCode {
    let config = DemoConfig::new("hello window")
        .clear_color(0.2, 0.3, 0.3)
        .from_env();
    let app = HelloWindow::new(config.clear_color);
    run_app(config, app)
}
