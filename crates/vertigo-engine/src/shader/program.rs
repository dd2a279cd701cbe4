use std::borrow::Cow;

use super::interface::{self, components, format_components};
use super::stage::ENTRY_POINT;
use super::{CompiledStage, ShaderError, ShaderPaths, Stage, StageLog, compile_stage, read_source};

/// A linked vertex + fragment pair, ready to become a render pipeline.
///
/// Immutable once built.
#[derive(Debug, Clone)]
pub struct ShaderProgram {
    vertex: CompiledStage,
    fragment: CompiledStage,
}

impl ShaderProgram {
    pub fn vertex(&self) -> &CompiledStage {
        &self.vertex
    }

    pub fn fragment(&self) -> &CompiledStage {
        &self.fragment
    }

    pub fn entry_point(&self) -> &'static str {
        ENTRY_POINT
    }

    /// Checks that every vertex shader input is fed by one of `attributes`
    /// with the same component count.
    pub fn check_vertex_inputs(
        &self,
        attributes: &[wgpu::VertexAttribute],
    ) -> Result<(), ShaderError> {
        let Some(ep) = self.vertex.entry_point() else {
            return Err(ShaderError::VertexInput("vertex entry point missing".into()));
        };

        for (location, ty) in interface::inputs(&self.vertex.module, ep) {
            let Some(attr) = attributes.iter().find(|a| a.shader_location == location) else {
                return Err(ShaderError::VertexInput(format!(
                    "shader input at location {location} has no vertex attribute"
                )));
            };

            let wanted = components(&ty);
            let given = format_components(attr.format);
            if wanted.is_none() || wanted != given {
                return Err(ShaderError::VertexInput(format!(
                    "location {location}: shader reads {ty:?}, buffer provides {:?}",
                    attr.format
                )));
            }
        }

        Ok(())
    }

    /// Uploads one stage to the device.
    ///
    /// The returned module is only needed while creating a pipeline and can be
    /// dropped right after.
    pub fn create_module(&self, device: &wgpu::Device, stage: Stage) -> wgpu::ShaderModule {
        let compiled = match stage {
            Stage::Vertex => &self.vertex,
            Stage::Fragment => &self.fragment,
        };
        let label = format!("vertigo {stage} shader");

        device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(&label),
            source: wgpu::ShaderSource::Naga(Cow::Owned(compiled.module.clone())),
        })
    }
}

/// Links two compiled stages.
///
/// Every fragment input location must be written by the vertex stage with
/// the same type.
pub fn link(vertex: CompiledStage, fragment: CompiledStage) -> Result<ShaderProgram, ShaderError> {
    if vertex.stage != Stage::Vertex || fragment.stage != Stage::Fragment {
        return Err(ShaderError::Link(format!(
            "expected vertex + fragment stages, got {} + {}",
            vertex.stage, fragment.stage
        )));
    }

    let (Some(vs_ep), Some(fs_ep)) = (vertex.entry_point(), fragment.entry_point()) else {
        return Err(ShaderError::Link(format!("missing `{ENTRY_POINT}` entry point")));
    };

    let written = interface::outputs(&vertex.module, vs_ep);
    let read = interface::inputs(&fragment.module, fs_ep);

    for (location, ty) in &read {
        match written.get(location) {
            None => {
                return Err(ShaderError::Link(format!(
                    "fragment input at location {location} is not written by the vertex stage"
                )));
            }
            Some(out) if out != ty => {
                return Err(ShaderError::Link(format!(
                    "location {location}: vertex writes {out:?}, fragment reads {ty:?}"
                )));
            }
            Some(_) => {}
        }
    }

    Ok(ShaderProgram { vertex, fragment })
}

/// Reads, compiles and links a program from its two source files.
#[derive(Debug, Clone)]
pub struct ShaderPipelineBuilder {
    paths: ShaderPaths,
}

impl ShaderPipelineBuilder {
    pub fn new(paths: ShaderPaths) -> Self {
        Self { paths }
    }

    /// Builds the program for a vertex buffer described by `attributes`.
    pub fn build(&self, attributes: &[wgpu::VertexAttribute]) -> Result<ShaderProgram, ShaderError> {
        log::debug!(
            "building shader program from {} + {}",
            self.paths.vertex.display(),
            self.paths.fragment.display()
        );
        let vertex = read_source(&self.paths.vertex);
        let fragment = read_source(&self.paths.fragment);
        Self::build_from_sources(&vertex, &fragment, attributes)
    }

    /// Same as [`build`](Self::build) with in-memory sources.
    ///
    /// Both stages are compiled before failing so that each broken stage
    /// logs exactly one diagnostic.
    pub fn build_from_sources(
        vertex: &str,
        fragment: &str,
        attributes: &[wgpu::VertexAttribute],
    ) -> Result<ShaderProgram, ShaderError> {
        let program = match (
            compile_stage(Stage::Vertex, vertex),
            compile_stage(Stage::Fragment, fragment),
        ) {
            (Ok(vs), Ok(fs)) => link(vs, fs),
            (vs, fs) => {
                let logs: Vec<StageLog> = [vs.err(), fs.err()].into_iter().flatten().collect();
                for entry in &logs {
                    log::error!("{entry}");
                }
                return Err(ShaderError::Compile(logs));
            }
        }
        .and_then(|program| {
            program.check_vertex_inputs(attributes)?;
            Ok(program)
        });

        if let Err(e) = &program {
            log::error!("{e}");
        }
        program
    }
}
