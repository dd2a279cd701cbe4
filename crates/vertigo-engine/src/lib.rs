//! Vertigo engine crate.
//!
//! Window + GPU runtime, GLSL shader pipeline, fixed-geometry meshes and the
//! trigonometric vertex animators shared by the vertigo exercises.

pub mod animate;
pub mod app;
pub mod config;
pub mod core;
pub mod device;
pub mod geometry;
pub mod logging;
pub mod render;
pub mod scene;
pub mod shader;
pub mod signal;
pub mod time;
pub mod window;
