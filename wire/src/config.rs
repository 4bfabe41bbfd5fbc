use crate::math::*;
use crate::render::BASE_COLOR;

/// Fixed knobs of the viewer. `Default` holds the values the viewer ships with.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,

    /// Simulated time added per frame, not tied to the wall clock.
    pub time_step: f32,
    /// Radians added to the rotation angle per frame.
    pub rotation_step: f32,
    pub rotation_axis: Vec3,

    pub translation: Vec3,
    pub scale: Vec3,

    /// Also used as the clear color.
    pub fog_color: Vec3,
    pub base_color: Vec3,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            window_title: "wire".to_string(),
            window_width: 640,
            window_height: 480,
            time_step: 0.01,
            rotation_step: 0.005,
            rotation_axis: Vec3::new(0.75, 0.4, 0.6),
            translation: Vec3::new(-0.05, 0.0, -0.55),
            scale: Vec3::new(1.0, 1.0, 1.0),
            fog_color: Vec3::new(0.0, 0.0, 0.0),
            base_color: BASE_COLOR,
        }
    }
}
