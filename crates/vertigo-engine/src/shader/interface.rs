//! Stage interface inspection (user-defined `location` bindings).

use std::collections::BTreeMap;

use naga::{Binding, Handle, Module, Type, TypeInner};

/// `location -> type` for one side of a stage interface.
pub(crate) type Interface = BTreeMap<u32, TypeInner>;

/// Locations consumed by the entry point (its `in` variables).
pub(crate) fn inputs(module: &Module, ep: &naga::EntryPoint) -> Interface {
    let mut out = Interface::new();
    for arg in &ep.function.arguments {
        collect(module, arg.ty, arg.binding.as_ref(), &mut out);
    }
    out
}

/// Locations produced by the entry point (its `out` variables).
pub(crate) fn outputs(module: &Module, ep: &naga::EntryPoint) -> Interface {
    let mut out = Interface::new();
    if let Some(result) = &ep.function.result {
        collect(module, result.ty, result.binding.as_ref(), &mut out);
    }
    out
}

fn collect(module: &Module, ty: Handle<Type>, binding: Option<&Binding>, out: &mut Interface) {
    match binding {
        Some(Binding::Location { location, .. }) => {
            out.insert(*location, module.types[ty].inner.clone());
        }
        Some(Binding::BuiltIn(_)) => {}
        None => {
            if let TypeInner::Struct { members, .. } = &module.types[ty].inner {
                for member in members {
                    collect(module, member.ty, member.binding.as_ref(), out);
                }
            }
        }
    }
}

/// Number of scalar components of a scalar or vector type.
pub(crate) fn components(inner: &TypeInner) -> Option<u32> {
    match inner {
        TypeInner::Scalar(_) => Some(1),
        TypeInner::Vector { size, .. } => Some(*size as u32),
        _ => None,
    }
}

/// Component count of a float vertex attribute format.
pub(crate) fn format_components(format: wgpu::VertexFormat) -> Option<u32> {
    match format {
        wgpu::VertexFormat::Float32 => Some(1),
        wgpu::VertexFormat::Float32x2 => Some(2),
        wgpu::VertexFormat::Float32x3 => Some(3),
        wgpu::VertexFormat::Float32x4 => Some(4),
        _ => None,
    }
}
