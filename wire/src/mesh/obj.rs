use super::error::{MeshError, Result};
use crate::math::*;
use std::io::BufRead;

/// One polygon as 0-based vertex indices, drawn as an open line strip.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Face(pub Vec<u32>);

impl Face {
    pub fn indices(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// How the vertex references on an `f` line are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceFormat {
    /// `f 1 2 3`
    Plain,
    /// `f 1/1/1 2/2/2 3/3/3`, also `1//1` and `1/1`
    Composite,
}

impl FaceFormat {
    pub fn detect(data: &str) -> FaceFormat {
        if data.contains('/') {
            FaceFormat::Composite
        } else {
            FaceFormat::Plain
        }
    }

    /// The part of a reference group that names the vertex.
    fn vertex_field(self, group: &str) -> &str {
        match self {
            FaceFormat::Plain => group,
            FaceFormat::Composite => group.split('/').next().unwrap_or(group),
        }
    }
}

const VERTEX_PREFIX: &[u8] = b"v ";
const FACE_PREFIX: &[u8] = b"f ";

/// Parses the data part of a `v` line, i.e. everything after `"v "`.
/// Tokens past the third (`w`, vertex colors) are ignored.
pub fn parse_vertex_line(line: usize, data: &str) -> Result<Vec3> {
    let mut tokens = data.split_whitespace();
    let mut coords = [0.0f32; 3];
    for (axis, coord) in ["x", "y", "z"].iter().zip(coords.iter_mut()) {
        let token = tokens
            .next()
            .ok_or_else(|| MeshError::parse(line, format!("vertex is missing its {} coordinate", axis)))?;
        *coord = token
            .parse::<f32>()
            .map_err(|e| MeshError::parse(line, format!("bad {} coordinate {:?}: {}", axis, token, e)))?;
    }
    let vertex = Vec3::new(coords[0], coords[1], coords[2]);
    if !vertex.is_finite() {
        return Err(MeshError::parse(line, format!("vertex {:?} is not finite", data.trim())));
    }
    Ok(vertex)
}

/// Parses the data part of an `f` line into 0-based vertex indices,
/// whichever sub-format it is written in.
pub fn parse_face_line(line: usize, data: &str) -> Result<Face> {
    let format = FaceFormat::detect(data);
    let mut indices = Vec::new();
    for group in data.split_whitespace() {
        let field = format.vertex_field(group);
        if field.is_empty() {
            return Err(MeshError::parse(line, format!("reference {:?} has no vertex index", group)));
        }
        let index = field
            .parse::<i64>()
            .map_err(|e| MeshError::parse(line, format!("bad vertex index {:?}: {}", field, e)))?;
        if index < 1 {
            return Err(MeshError::parse(line, format!("vertex index {} is not 1-based", index)));
        }
        let index = u32::try_from(index - 1)
            .map_err(|_| MeshError::parse(line, format!("vertex index {} is too large", index)))?;
        indices.push(index);
    }
    if indices.is_empty() {
        return Err(MeshError::parse(line, "face has no vertex indices"));
    }
    Ok(Face(indices))
}

/// Calls `parse` with the 1-based line number and the data of every line starting with `prefix`.
/// Lines are split on raw bytes; only the data of matching lines has to be UTF-8.
fn scan_lines<R, T>(reader: R, prefix: &[u8], mut parse: impl FnMut(usize, &str) -> Result<T>) -> Result<Vec<T>>
where
    R: BufRead,
{
    let mut items = Vec::new();
    for (n, bytes) in reader.split(b'\n').enumerate() {
        let bytes = bytes?;
        let Some(data) = bytes.strip_prefix(prefix) else {
            continue;
        };
        let data = std::str::from_utf8(data)
            .map_err(|e| MeshError::parse(n + 1, format!("line is not valid UTF-8: {}", e)))?;
        items.push(parse(n + 1, data)?);
    }
    Ok(items)
}

/// First scan: collects every `v` line in file order.
pub fn read_vertices<R: BufRead>(reader: R) -> Result<Vec<Vec3>> {
    scan_lines(reader, VERTEX_PREFIX, parse_vertex_line)
}

/// Second scan: collects every `f` line in file order.
pub fn read_faces<R: BufRead>(reader: R) -> Result<Vec<Face>> {
    scan_lines(reader, FACE_PREFIX, parse_face_line)
}

/// Checks that every face only references existing vertices.
pub fn validate_faces(faces: &[Face], vertex_count: usize) -> Result<()> {
    for (face_number, face) in faces.iter().enumerate() {
        if let Some(&bad) = face.indices().iter().find(|&&i| i as usize >= vertex_count) {
            return Err(MeshError::IndexOutOfRange { face: face_number, index: bad as u64 + 1, vertex_count });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vertex_line() {
        assert_eq!(parse_vertex_line(1, "1.5 -2 0.25").unwrap(), Vec3::new(1.5, -2.0, 0.25));
        assert_eq!(parse_vertex_line(1, "  1e2\t0 -0 ").unwrap(), Vec3::new(100.0, 0.0, 0.0));
    }

    #[test]
    fn test_parse_vertex_line_ignores_extra_components() {
        let v = parse_vertex_line(1, "1 2 3 1.0 0.5 0.5 0.5").unwrap();
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_parse_vertex_line_errors() {
        assert!(matches!(parse_vertex_line(7, "1 2"), Err(MeshError::Parse { line: 7, .. })));
        assert!(matches!(parse_vertex_line(3, "1 two 3"), Err(MeshError::Parse { line: 3, .. })));
        assert!(matches!(parse_vertex_line(1, ""), Err(MeshError::Parse { .. })));
        assert!(matches!(parse_vertex_line(1, "nan 0 0"), Err(MeshError::Parse { .. })));
        assert!(matches!(parse_vertex_line(1, "0 inf 0"), Err(MeshError::Parse { .. })));
    }

    #[test]
    fn test_face_format_detect() {
        assert_eq!(FaceFormat::detect("1 2 3"), FaceFormat::Plain);
        assert_eq!(FaceFormat::detect("1/1/1 2/2/2 3/3/3"), FaceFormat::Composite);
        assert_eq!(FaceFormat::detect("1//1 2//2"), FaceFormat::Composite);
    }

    #[test]
    fn test_parse_face_line_plain() {
        assert_eq!(parse_face_line(1, "1 2 3 4").unwrap(), Face(vec![0, 1, 2, 3]));
    }

    #[test]
    fn test_parse_face_line_composite() {
        assert_eq!(parse_face_line(1, "1/1/1 2/2/2 3/3/3").unwrap(), Face(vec![0, 1, 2]));
        assert_eq!(parse_face_line(1, "4//9 5//9 6//9").unwrap(), Face(vec![3, 4, 5]));
        assert_eq!(parse_face_line(1, "7/2 8/3").unwrap(), Face(vec![6, 7]));
    }

    #[test]
    fn test_parse_face_line_errors() {
        assert!(matches!(parse_face_line(2, ""), Err(MeshError::Parse { line: 2, .. })));
        assert!(matches!(parse_face_line(2, "0 1 2"), Err(MeshError::Parse { .. })));
        assert!(matches!(parse_face_line(2, "-1 1 2"), Err(MeshError::Parse { .. })));
        assert!(matches!(parse_face_line(2, "1 a 2"), Err(MeshError::Parse { .. })));
        assert!(matches!(parse_face_line(2, "/1/1 2/2/2"), Err(MeshError::Parse { .. })));
        assert!(matches!(parse_face_line(2, "99999999999 1"), Err(MeshError::Parse { .. })));
    }

    #[test]
    fn test_read_vertices_prefix_is_exact() {
        let text = "# comment\nvn 1 0 0\nvt 0.5 0.5\nv 1 2 3\nv\t4 5 6\no thing\n  v 7 8 9\nv 0 0 1\n";
        let vertices = read_vertices(text.as_bytes()).unwrap();
        assert_eq!(vertices, vec![Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.0, 0.0, 1.0)]);
    }

    #[test]
    fn test_read_faces_keeps_order() {
        let text = "v 0 0 0\nf 3 2 1\ns off\nf 1/1 2/2\nfo 1 2\n";
        let faces = read_faces(text.as_bytes()).unwrap();
        assert_eq!(faces, vec![Face(vec![2, 1, 0]), Face(vec![0, 1])]);
    }

    #[test]
    fn test_read_reports_line_numbers() {
        let text = "v 0 0 0\n\nv 1 x 1\n";
        match read_vertices(text.as_bytes()) {
            Err(MeshError::Parse { line, .. }) => assert_eq!(line, 3),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_read_handles_crlf() {
        let text = "v 1 2 3\r\nf 1 1 1\r\n";
        assert_eq!(read_vertices(text.as_bytes()).unwrap(), vec![Vec3::new(1.0, 2.0, 3.0)]);
        assert_eq!(read_faces(text.as_bytes()).unwrap(), vec![Face(vec![0, 0, 0])]);
    }

    #[test]
    fn test_validate_faces() {
        let faces = vec![Face(vec![0, 1]), Face(vec![1, 2, 5])];
        assert!(validate_faces(&faces, 6).is_ok());
        match validate_faces(&faces, 3) {
            Err(MeshError::IndexOutOfRange { face, index, vertex_count }) => {
                assert_eq!((face, index, vertex_count), (1, 6, 3));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
