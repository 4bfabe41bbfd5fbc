use crate::math::*;
use arrayvec::ArrayVec;

// Only the side planes: depth is clamped later instead of clipped.
const CLIP_PLANES: [Vec4; 4] = [
    Vec4::new(1.0, 0.0, 0.0, 1.0),  // Left
    Vec4::new(-1.0, 0.0, 0.0, 1.0), // Right
    Vec4::new(0.0, 1.0, 0.0, 1.0),  // Bottom
    Vec4::new(0.0, -1.0, 0.0, 1.0), // Top
];

/// Clips a clip-space segment to the view volume sides.
/// Returns both endpoints if anything is left, nothing otherwise.
pub fn clip_line(input_points: &[Vec4; 2]) -> ArrayVec<Vec4, 2> {
    let mut p0 = input_points[0];
    let mut p1 = input_points[1];
    for &plane in &CLIP_PLANES {
        let d0 = dot(p0, plane);
        let d1 = dot(p1, plane);
        let inside0 = d0 >= 0.0;
        let inside1 = d1 >= 0.0;
        if !inside0 && !inside1 {
            return ArrayVec::new();
        } else if inside0 && inside1 {
            continue;
        } else {
            let t = d0 / (d0 - d1);
            let clipped = (1.0 - t) * p0 + t * p1;
            if !inside0 {
                p0 = clipped;
            } else {
                p1 = clipped;
            }
        }
    }
    ArrayVec::from([p0, p1])
}
