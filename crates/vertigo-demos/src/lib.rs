//! Scene definitions for the vertigo exercises.
//!
//! Each binary in `src/bin` pairs one of these scenes with a window; keeping
//! the geometry and animators here lets them be tested without a GPU.

use std::path::PathBuf;

pub mod scenes;

/// Orbit radius shared by every animated exercise.
pub const AMPLITUDE: f32 = 0.5;

/// Shader set shipped with this crate (`shaders/<set>/`).
pub fn shader_dir(set: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("shaders").join(set)
}
