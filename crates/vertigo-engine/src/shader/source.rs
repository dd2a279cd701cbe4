use std::path::{Path, PathBuf};

/// Fixed file name of the vertex stage source.
pub const VERTEX_SHADER_FILE: &str = "vertex_shader.vert";
/// Fixed file name of the fragment stage source.
pub const FRAGMENT_SHADER_FILE: &str = "fragment_shader.frag";

/// Locations of the two stage sources of a program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderPaths {
    pub vertex: PathBuf,
    pub fragment: PathBuf,
}

impl Default for ShaderPaths {
    /// The fixed names, relative to the working directory.
    fn default() -> Self {
        Self {
            vertex: PathBuf::from(VERTEX_SHADER_FILE),
            fragment: PathBuf::from(FRAGMENT_SHADER_FILE),
        }
    }
}

impl ShaderPaths {
    /// The fixed names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            vertex: dir.join(VERTEX_SHADER_FILE),
            fragment: dir.join(FRAGMENT_SHADER_FILE),
        }
    }
}

/// Reads a whole shader source file.
///
/// A file that cannot be read is logged and yields an empty source; the empty
/// source then fails compilation, which is where the program stops.
pub fn read_source(path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            log::error!("could not open shader source {}: {e}", path.display());
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_empty() {
        let path = std::env::temp_dir().join("vertigo-no-such-shader.vert");
        assert_eq!(read_source(&path), "");
    }

    #[test]
    fn existing_file_is_read_whole() {
        let path = std::env::temp_dir().join(format!(
            "vertigo-read-source-{}.vert",
            std::process::id()
        ));
        std::fs::write(&path, "line one\nline two\n").unwrap();
        assert_eq!(read_source(&path), "line one\nline two\n");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn default_paths_are_relative_fixed_names() {
        let paths = ShaderPaths::default();
        assert_eq!(paths.vertex, PathBuf::from("vertex_shader.vert"));
        assert_eq!(paths.fragment, PathBuf::from("fragment_shader.frag"));
    }
}
