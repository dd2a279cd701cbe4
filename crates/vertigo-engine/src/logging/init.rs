use std::sync::Once;

/// Logger settings.
///
/// `env_filter` uses `env_logger` directives (e.g. "debug",
/// "info,vertigo_demos=debug"). When unset, `RUST_LOG` is consulted.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

/// GPU stack crates that log per-frame at `info`.
const QUIET_MODULES: [&str; 4] = ["wgpu_core", "wgpu_hal", "naga", "winit"];

static INIT: Once = Once::new();

/// Installs the global logger; later calls do nothing.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let directives = active_filter(config.env_filter, std::env::var("RUST_LOG").ok());
        let mut builder = builder_for(directives.as_deref());
        builder.write_style(config.write_style);

        // Test harnesses may have installed one already.
        if builder.try_init().is_ok() {
            log::debug!("logging initialized ({})", directives.as_deref().unwrap_or("info"));
        }
    });
}

/// Explicit configuration wins over `RUST_LOG`.
fn active_filter(configured: Option<String>, rust_log: Option<String>) -> Option<String> {
    configured.or(rust_log).filter(|f| !f.trim().is_empty())
}

/// `info` everywhere with the GPU stack capped at `warn`; `directives`
/// are applied on top, so they can still raise any of those modules.
fn builder_for(directives: Option<&str>) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(log::LevelFilter::Info);
    for module in QUIET_MODULES {
        builder.filter_module(module, log::LevelFilter::Warn);
    }
    if let Some(directives) = directives {
        builder.parse_filters(directives);
    }
    builder
}
