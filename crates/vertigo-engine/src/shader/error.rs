use std::fmt;

use super::Stage;

/// Compiler diagnostic for one failed stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageLog {
    pub stage: Stage,
    /// Diagnostic text as produced by the compiler (may span several lines).
    pub log: String,
}

impl StageLog {
    pub(crate) fn new(stage: Stage, log: impl Into<String>) -> Self {
        Self { stage, log: log.into() }
    }
}

impl fmt::Display for StageLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} shader compilation failed: {}", self.stage, self.log.trim_end())
    }
}

/// Any failure that prevents a program from being built.
///
/// All variants are fatal before the render loop starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShaderError {
    /// One entry per stage that failed to compile.
    Compile(Vec<StageLog>),
    /// Vertex outputs do not satisfy the fragment inputs.
    Link(String),
    /// Vertex shader inputs are not fed by the vertex buffer layout.
    VertexInput(String),
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderError::Compile(logs) => {
                write!(f, "shader compilation failed")?;
                for log in logs {
                    write!(f, "\n{log}")?;
                }
                Ok(())
            }
            ShaderError::Link(msg) => write!(f, "shader program link failed: {msg}"),
            ShaderError::VertexInput(msg) => write!(f, "vertex input mismatch: {msg}"),
        }
    }
}

impl std::error::Error for ShaderError {}
