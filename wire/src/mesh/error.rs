use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, MeshError>;

/// Everything that can go wrong while turning an OBJ file into a `Mesh`.
#[derive(Error, Debug)]
pub enum MeshError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read mesh data: {0}")]
    Read(#[from] std::io::Error),

    /// `line` is 1-based, as editors show it.
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// `face` is the 0-based face number, `index` the 1-based value written in the file.
    #[error("face {face} references vertex {index}, but the mesh has only {vertex_count} vertices")]
    IndexOutOfRange { face: usize, index: u64, vertex_count: usize },

    #[error("mesh has no vertices")]
    EmptyMesh,
}

impl MeshError {
    pub(crate) fn parse(line: usize, reason: impl Into<String>) -> Self {
        MeshError::Parse { line, reason: reason.into() }
    }

    /// Attaches the file name to a bare stream error.
    pub(crate) fn at_path(self, path: &std::path::Path) -> Self {
        match self {
            MeshError::Read(source) => MeshError::Io { path: path.to_path_buf(), source },
            other => other,
        }
    }
}
