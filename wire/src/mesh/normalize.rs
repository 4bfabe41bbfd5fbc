use super::error::{MeshError, Result};
use crate::math::*;

/// Index and Chebyshev magnitude of the vertex furthest from the origin.
/// Ties go to the earliest vertex.
pub fn max_chebyshev(vertices: &[Vec3]) -> Option<(usize, f32)> {
    let mut best: Option<(usize, f32)> = None;
    for (i, v) in vertices.iter().enumerate() {
        let magnitude = v.chebyshev();
        match best {
            Some((_, max)) if magnitude <= max => {}
            _ => best = Some((i, magnitude)),
        }
    }
    best
}

/// Shrinks the vertices into the `[-1, 1]` cube, never scaling up.
/// Returns the divisor that was applied (1.0 when the mesh already fits).
pub fn normalize(vertices: &mut [Vec3]) -> Result<f32> {
    let (_, max) = max_chebyshev(vertices).ok_or(MeshError::EmptyMesh)?;
    let scale = max.max(1.0);
    for v in vertices.iter_mut() {
        *v /= scale;
    }
    Ok(scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_chebyshev_empty() {
        assert_eq!(max_chebyshev(&[]), None);
    }

    #[test]
    fn test_max_chebyshev_first_maximum_wins() {
        let vertices = [
            Vec3::new(0.5, 0.0, 0.0),
            Vec3::new(0.0, -3.0, 0.0),
            Vec3::new(3.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 3.0),
        ];
        assert_eq!(max_chebyshev(&vertices), Some((1, 3.0)));
    }

    #[test]
    fn test_normalize_scales_down() {
        let mut vertices = vec![Vec3::new(2.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -4.0)];
        assert_eq!(normalize(&mut vertices).unwrap(), 4.0);
        assert_eq!(vertices, vec![Vec3::new(0.5, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0)]);
    }

    #[test]
    fn test_normalize_never_scales_up() {
        let mut vertices = vec![Vec3::new(0.2, 0.1, 0.0), Vec3::new(-0.5, 0.0, 0.3)];
        let before = vertices.clone();
        assert_eq!(normalize(&mut vertices).unwrap(), 1.0);
        assert_eq!(vertices, before);
    }

    #[test]
    fn test_normalize_empty() {
        let mut vertices: Vec<Vec3> = Vec::new();
        assert!(matches!(normalize(&mut vertices), Err(MeshError::EmptyMesh)));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let mut vertices = vec![Vec3::new(13.0, -7.5, 2.0), Vec3::new(-1.0, 26.0, 0.1), Vec3::new(3.3, 3.3, -3.3)];
        normalize(&mut vertices).unwrap();
        let once = vertices.clone();
        assert_eq!(normalize(&mut vertices).unwrap(), 1.0);
        assert_eq!(vertices, once);
    }
}
