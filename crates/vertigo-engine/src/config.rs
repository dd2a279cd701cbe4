//! Per-program configuration.
//!
//! Every exercise starts from `DemoConfig::default()`, overrides its title and
//! shader directory, then applies the environment via [`DemoConfig::from_env`].

use std::path::PathBuf;

use winit::dpi::LogicalSize;

use crate::device::GpuInit;
use crate::logging::LoggingConfig;
use crate::shader::ShaderPaths;

/// Overrides the directory holding `vertex_shader.vert` / `fragment_shader.frag`.
pub const SHADER_DIR_ENV: &str = "VERTIGO_SHADER_DIR";

/// Overrides the log filter (takes precedence over `RUST_LOG`).
pub const LOG_FILTER_ENV: &str = "VERTIGO_LOG";

/// Window, shader, logging and GPU settings for one exercise.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    pub shaders: ShaderPaths,
    pub clear_color: wgpu::Color,
    pub logging: LoggingConfig,
    pub gpu: GpuInit,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: "hello window".to_string(),
            initial_size: LogicalSize::new(640.0, 480.0),
            shaders: ShaderPaths::default(),
            clear_color: wgpu::Color {
                r: 0.1,
                g: 0.1,
                b: 0.12,
                a: 1.0,
            },
            logging: LoggingConfig::default(),
            gpu: GpuInit::default(),
        }
    }
}

impl DemoConfig {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn shader_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.shaders = ShaderPaths::in_dir(dir.into());
        self
    }

    pub fn clear_color(mut self, r: f64, g: f64, b: f64) -> Self {
        self.clear_color = wgpu::Color { r, g, b, a: 1.0 };
        self
    }

    /// Log directives for this program; `VERTIGO_LOG` still overrides them.
    pub fn log_filter(mut self, filter: impl Into<String>) -> Self {
        self.logging.env_filter = Some(filter.into());
        self
    }

    /// Applies `VERTIGO_SHADER_DIR` and `VERTIGO_LOG` when set.
    pub fn from_env(self) -> Self {
        self.with_overrides(
            std::env::var_os(SHADER_DIR_ENV).map(PathBuf::from),
            std::env::var(LOG_FILTER_ENV).ok(),
        )
    }

    fn with_overrides(mut self, shader_dir: Option<PathBuf>, log_filter: Option<String>) -> Self {
        if let Some(dir) = shader_dir {
            self.shaders = ShaderPaths::in_dir(dir);
        }
        if let Some(filter) = log_filter {
            self.logging.env_filter = Some(filter);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_matches_exercises() {
        let config = DemoConfig::default();
        assert_eq!(config.initial_size, LogicalSize::new(640.0, 480.0));
        assert_eq!(config.shaders, ShaderPaths::default());
    }

    #[test]
    fn shader_dir_keeps_fixed_file_names() {
        let config = DemoConfig::new("t").shader_dir("shaders/colored");
        assert_eq!(
            config.shaders.vertex,
            PathBuf::from("shaders/colored/vertex_shader.vert")
        );
        assert_eq!(
            config.shaders.fragment,
            PathBuf::from("shaders/colored/fragment_shader.frag")
        );
    }

    #[test]
    fn clear_color_is_opaque() {
        let config = DemoConfig::new("t").clear_color(0.2, 0.3, 0.3);
        assert_eq!(
            config.clear_color,
            wgpu::Color {
                r: 0.2,
                g: 0.3,
                b: 0.3,
                a: 1.0
            }
        );
    }

    #[test]
    fn overrides_replace_dir_and_filter() {
        let config = DemoConfig::new("t")
            .shader_dir("a")
            .with_overrides(Some(PathBuf::from("b")), Some("debug".to_string()));
        assert_eq!(config.shaders, ShaderPaths::in_dir("b"));
        assert_eq!(config.logging.env_filter.as_deref(), Some("debug"));
    }

    #[test]
    fn env_filter_replaces_program_default() {
        let config = DemoConfig::new("t")
            .log_filter("info,vertigo_demos=debug")
            .with_overrides(None, Some("warn".to_string()));
        assert_eq!(config.logging.env_filter.as_deref(), Some("warn"));
    }

    #[test]
    fn missing_overrides_leave_config_untouched() {
        let config = DemoConfig::new("t").shader_dir("a").with_overrides(None, None);
        assert_eq!(config.shaders, ShaderPaths::in_dir("a"));
        assert!(config.logging.env_filter.is_none());
    }
}
