//! Shader pipeline builder.
//!
//! GLSL sources are read from disk, compiled per stage with naga's GLSL
//! front end, validated, and linked into a [`ShaderProgram`] whose stage
//! interfaces are known to match. The GPU only ever sees programs that made
//! it through this path.

mod error;
mod interface;
mod program;
mod source;
mod stage;

pub use error::{ShaderError, StageLog};
pub use program::{ShaderPipelineBuilder, ShaderProgram, link};
pub use source::{FRAGMENT_SHADER_FILE, ShaderPaths, VERTEX_SHADER_FILE, read_source};
pub use stage::{CompiledStage, Stage, compile_stage};
