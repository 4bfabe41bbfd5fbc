use crate::math::*;

/// Row-major 4x4 matrix, applied to column vectors as `m * v`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat44(pub [f32; 16]);

impl Mat44 {
    pub fn identity() -> Mat44 {
        Mat44([
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    pub fn scale_non_uniform(s: Vec3) -> Mat44 {
        Mat44([
            s.x, 0.0, 0.0, 0.0, //
            0.0, s.y, 0.0, 0.0, //
            0.0, 0.0, s.z, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    pub fn translate(s: Vec3) -> Mat44 {
        Mat44([
            1.0, 0.0, 0.0, s.x, //
            0.0, 1.0, 0.0, s.y, //
            0.0, 0.0, 1.0, s.z, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Right-handed rotation by `angle` radians around `axis`.
    /// The axis is normalized first, so any non-zero length works.
    pub fn rotate_axis_angle(axis: Vec3, angle: f32) -> Mat44 {
        let a = axis.normalized();
        let cos = angle.cos();
        let sin = angle.sin();
        let t = 1.0 - cos;
        Mat44([
            cos + t * a.x * a.x,
            t * a.x * a.y - sin * a.z,
            t * a.x * a.z + sin * a.y,
            0.0, //
            t * a.x * a.y + sin * a.z,
            cos + t * a.y * a.y,
            t * a.y * a.z - sin * a.x,
            0.0, //
            t * a.x * a.z - sin * a.y,
            t * a.y * a.z + sin * a.x,
            cos + t * a.z * a.z,
            0.0, //
            0.0,
            0.0,
            0.0,
            1.0,
        ])
    }
}

// Vec4 = Mat44 * Vec4
impl std::ops::Mul<Vec4> for Mat44 {
    type Output = Vec4;
    fn mul(self, v: Vec4) -> Vec4 {
        &self * v
    }
}

// Vec4 = &Mat44 * Vec4
impl std::ops::Mul<Vec4> for &Mat44 {
    type Output = Vec4;
    fn mul(self, v: Vec4) -> Vec4 {
        let m = &self.0;
        Vec4 {
            x: m[0] * v.x + m[1] * v.y + m[2] * v.z + m[3] * v.w,
            y: m[4] * v.x + m[5] * v.y + m[6] * v.z + m[7] * v.w,
            z: m[8] * v.x + m[9] * v.y + m[10] * v.z + m[11] * v.w,
            w: m[12] * v.x + m[13] * v.y + m[14] * v.z + m[15] * v.w,
        }
    }
}

// Mat44 = Mat44 * Mat44
impl std::ops::Mul for Mat44 {
    type Output = Mat44;

    fn mul(self, other: Mat44) -> Mat44 {
        &self * &other
    }
}

// Mat44 = &Mat44 * &Mat44
impl std::ops::Mul<&Mat44> for &Mat44 {
    type Output = Mat44;

    fn mul(self, other: &Mat44) -> Mat44 {
        let mut result = [0.0f32; 16];
        for i in 0..4 {
            for j in 0..4 {
                for k in 0..4 {
                    result[4 * i + j] += self.0[4 * i + k] * other.0[4 * k + j];
                }
            }
        }
        Mat44(result)
    }
}
