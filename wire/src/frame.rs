use crate::config::ViewerConfig;
use crate::math::*;
use crate::render::Uniforms;
use std::f32::consts::TAU;

/// Everything that changes from one frame to the next.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameState {
    pub time: f32,
    /// Kept in `[0, 2π)`.
    pub rotation_angle: f32,
    pub frames: u64,
}

impl FrameState {
    pub fn advance_time(&mut self, step: f32) {
        self.time += step;
    }

    pub fn advance_rotation(&mut self, step: f32) {
        self.rotation_angle = (self.rotation_angle + step).rem_euclid(TAU);
    }
}

/// The fixed part of the model transform, plus the axis the mesh spins around.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub axis: Vec3,
    pub translation: Mat44,
    pub scale: Mat44,
}

impl Transform {
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            axis: config.rotation_axis,
            translation: Mat44::translate(config.translation),
            scale: Mat44::scale_non_uniform(config.scale),
        }
    }

    pub fn rotation(&self, angle: f32) -> Mat44 {
        Mat44::rotate_axis_angle(self.axis, angle)
    }

    pub fn uniforms(&self, state: &FrameState, fog_color: Vec3) -> Uniforms {
        Uniforms {
            rotation: self.rotation(state.rotation_angle),
            translation: self.translation,
            scale: self.scale,
            time: state.time,
            fog_color,
        }
    }
}
