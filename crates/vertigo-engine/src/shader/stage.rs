use std::fmt;

use naga::front::glsl;
use naga::valid::{Capabilities, ValidationFlags, Validator};

use super::StageLog;

/// Programmable pipeline stage.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Stage {
    Vertex,
    Fragment,
}

impl Stage {
    pub(crate) fn naga(self) -> naga::ShaderStage {
        match self {
            Stage::Vertex => naga::ShaderStage::Vertex,
            Stage::Fragment => naga::ShaderStage::Fragment,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Vertex => "vertex",
            Stage::Fragment => "fragment",
        })
    }
}

/// Entry point every stage must define.
pub(crate) const ENTRY_POINT: &str = "main";

/// A parsed and validated stage.
#[derive(Debug, Clone)]
pub struct CompiledStage {
    pub(crate) stage: Stage,
    pub(crate) module: naga::Module,
}

impl CompiledStage {
    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn module(&self) -> &naga::Module {
        &self.module
    }

    pub(crate) fn entry_point(&self) -> Option<&naga::EntryPoint> {
        self.module
            .entry_points
            .iter()
            .find(|ep| ep.name == ENTRY_POINT && ep.stage == self.stage.naga())
    }
}

/// Compiles one GLSL stage.
///
/// The failure carries the compiler's diagnostic text. An empty source (e.g.
/// from a missing file) always fails.
pub fn compile_stage(stage: Stage, source: &str) -> Result<CompiledStage, StageLog> {
    if source.trim().is_empty() {
        return Err(StageLog::new(stage, "empty shader source"));
    }

    let mut frontend = glsl::Frontend::default();
    let module = frontend
        .parse(&glsl::Options::from(stage.naga()), source)
        .map_err(|errors| StageLog::new(stage, errors.emit_to_string(source)))?;

    Validator::new(ValidationFlags::all(), Capabilities::empty())
        .validate(&module)
        .map_err(|err| StageLog::new(stage, err.emit_to_string(source)))?;

    let compiled = CompiledStage { stage, module };
    if compiled.entry_point().is_none() {
        return Err(StageLog::new(
            stage,
            format!("no `{ENTRY_POINT}` entry point for the {stage} stage"),
        ));
    }

    Ok(compiled)
}
