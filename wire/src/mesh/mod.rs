//! Wavefront OBJ loading, reduced to what a wireframe needs: `v` positions and `f` polygons.
//!
//! The source is scanned twice, once for vertices and once for faces. Loading is strict:
//! malformed lines, dangling face indices and meshes without vertices are errors.

pub mod error;
pub mod normalize;
pub mod obj;

pub use error::*;
pub use normalize::*;
pub use obj::*;

use crate::math::*;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mesh {
    pub vertices: Vec<Vec3>,
    pub faces: Vec<Face>,
}

impl Mesh {
    /// Loads and normalizes an OBJ file, opening it once per scan.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Mesh> {
        let path = path.as_ref();
        let open = || {
            File::open(path)
                .map(BufReader::new)
                .map_err(|source| MeshError::Io { path: path.to_path_buf(), source })
        };

        let vertices = read_vertices(open()?).map_err(|e| e.at_path(path))?;
        let faces = read_faces(open()?).map_err(|e| e.at_path(path))?;
        tracing::debug!(path = %path.display(), "read mesh source");
        Mesh::assemble(vertices, faces)
    }

    /// Same as `load`, for OBJ text already in memory.
    pub fn parse(text: &str) -> Result<Mesh> {
        let vertices = read_vertices(text.as_bytes())?;
        let faces = read_faces(text.as_bytes())?;
        Mesh::assemble(vertices, faces)
    }

    fn assemble(mut vertices: Vec<Vec3>, faces: Vec<Face>) -> Result<Mesh> {
        if vertices.is_empty() {
            return Err(MeshError::EmptyMesh);
        }
        validate_faces(&faces, vertices.len())?;
        let scale = normalize(&mut vertices)?;
        tracing::debug!(vertices = vertices.len(), faces = faces.len(), scale, "mesh loaded");
        Ok(Mesh { vertices, faces })
    }
}
