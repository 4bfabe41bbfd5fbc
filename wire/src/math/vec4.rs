use crate::math::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    pub fn xyz(self) -> Vec3 {
        Vec3 { x: self.x, y: self.y, z: self.z }
    }

    /// Perspective divide.
    pub fn to_ndc(self) -> Vec3 {
        Vec3 { x: self.x / self.w, y: self.y / self.w, z: self.z / self.w }
    }
}

// a * b
impl Dot for Vec4 {
    fn dot(self, rhs: Vec4) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
    }
}

// Vec4 + Vec4
impl std::ops::Add for Vec4 {
    type Output = Vec4;
    fn add(self, other: Vec4) -> Vec4 {
        Vec4 { x: self.x + other.x, y: self.y + other.y, z: self.z + other.z, w: self.w + other.w }
    }
}

// Vec4 - Vec4
impl std::ops::Sub for Vec4 {
    type Output = Vec4;
    fn sub(self, other: Vec4) -> Vec4 {
        Vec4 { x: self.x - other.x, y: self.y - other.y, z: self.z - other.z, w: self.w - other.w }
    }
}

// f32 * Vec4
impl std::ops::Mul<Vec4> for f32 {
    type Output = Vec4;
    fn mul(self, vec: Vec4) -> Vec4 {
        Vec4 { x: vec.x * self, y: vec.y * self, z: vec.z * self, w: vec.w * self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec4_xyz() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.xyz(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_vec4_to_ndc() {
        let v = Vec4::new(2.0, -4.0, 1.0, 2.0);
        assert_eq!(v.to_ndc(), Vec3::new(1.0, -2.0, 0.5));
    }

    #[test]
    fn test_vec4_interpolation() {
        let a = Vec4::new(0.0, 0.0, 0.0, 1.0);
        let b = Vec4::new(2.0, 2.0, -2.0, 1.0);
        let t = 0.25;
        assert_eq!((1.0 - t) * a + t * b, Vec4::new(0.5, 0.5, -0.5, 1.0));
        assert_eq!(b - a, Vec4::new(2.0, 2.0, -2.0, 0.0));
    }

    #[test]
    fn test_vec4_dot() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(dot(a, a), 30.0);
    }
}
