use crate::math::*;

/// Wireframe color where there is no fog at all.
pub const BASE_COLOR: Vec3 = Vec3::new(0.7, 1.0, 0.0);

/// Per-frame inputs of the shading program, constant over a draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uniforms {
    pub rotation: Mat44,
    pub translation: Mat44,
    pub scale: Mat44,
    /// Elapsed simulated time. Pushed every frame, not read by the current stages.
    pub time: f32,
    pub fog_color: Vec3,
}

impl Default for Uniforms {
    fn default() -> Self {
        Self {
            rotation: Mat44::identity(),
            translation: Mat44::identity(),
            scale: Mat44::identity(),
            time: 0.0,
            fog_color: Vec3::new(0.0, 0.0, 0.0),
        }
    }
}

impl Uniforms {
    /// `scale * translate * rotate`: rotation hits the vertex first.
    pub fn model(&self) -> Mat44 {
        &(&self.scale * &self.translation) * &self.rotation
    }
}

/// The fixed vertex + fog program.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Program {
    pub base_color: Vec3,
}

impl Default for Program {
    fn default() -> Self {
        Self { base_color: BASE_COLOR }
    }
}

impl Program {
    pub fn new(base_color: Vec3) -> Self {
        Self { base_color }
    }

    /// Transforms a position; the result doubles as the varying handed to `fragment`.
    pub fn vertex(&self, model: &Mat44, position: Vec3) -> Vec4 {
        model * position.as_point4()
    }

    pub fn fragment(&self, uniforms: &Uniforms, pos: Vec3) -> Vec3 {
        lerp(uniforms.fog_color, self.base_color, fog_amount(pos))
    }
}

/// `clamp(distance(clamp(-z, 0, 1), 0), 0, 1)`, which reduces to `clamp(-z, 0, 1)`.
/// 0 means the fragment is fully fogged, 1 means it gets the base color.
pub fn fog_amount(pos: Vec3) -> f32 {
    (-pos.z).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_applies_rotation_first() {
        let uniforms = Uniforms {
            rotation: Mat44::rotate_axis_angle(Vec3::new(0.0, 0.0, 1.0), std::f32::consts::FRAC_PI_2),
            translation: Mat44::translate(Vec3::new(1.0, 0.0, 0.0)),
            scale: Mat44::scale_non_uniform(Vec3::new(2.0, 2.0, 2.0)),
            ..Default::default()
        };
        let program = Program::default();
        // (1,0,0) -> rotate -> (0,1,0) -> translate -> (1,1,0) -> scale -> (2,2,0)
        let out = program.vertex(&uniforms.model(), Vec3::new(1.0, 0.0, 0.0));
        assert!((out.x - 2.0).abs() < 1e-6);
        assert!((out.y - 2.0).abs() < 1e-6);
        assert!(out.z.abs() < 1e-6);
        assert_eq!(out.w, 1.0);
    }

    #[test]
    fn test_fog_amount() {
        assert_eq!(fog_amount(Vec3::new(0.0, 0.0, 0.5)), 0.0);
        assert_eq!(fog_amount(Vec3::new(0.0, 0.0, 0.0)), 0.0);
        assert_eq!(fog_amount(Vec3::new(0.0, 0.0, -0.25)), 0.25);
        assert_eq!(fog_amount(Vec3::new(0.0, 0.0, -1.0)), 1.0);
        assert_eq!(fog_amount(Vec3::new(0.0, 0.0, -7.0)), 1.0);
    }

    #[test]
    fn test_fragment_blends_fog_into_base() {
        let program = Program::default();
        let uniforms = Uniforms { fog_color: Vec3::new(0.2, 0.2, 0.2), ..Default::default() };
        assert_eq!(program.fragment(&uniforms, Vec3::new(0.0, 0.0, 1.0)), uniforms.fog_color);
        let full = program.fragment(&uniforms, Vec3::new(0.0, 0.0, -2.0));
        assert!((full - BASE_COLOR).length() < 1e-6);

        let half = program.fragment(&uniforms, Vec3::new(0.0, 0.0, -0.5));
        assert!((half.x - 0.45).abs() < 1e-6);
        assert!((half.y - 0.6).abs() < 1e-6);
        assert!((half.z - 0.1).abs() < 1e-6);
    }
}
