use crate::math::*;
use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Zeroable, Pod)]
pub struct RGBA {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl RGBA {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from float channels in `[0, 1]`, out-of-range values saturate.
    pub fn from_color(c: Vec3) -> Self {
        fn float_to_u8(x: f32) -> u8 {
            (x * 256.0).clamp(0.0, 255.0) as u8
        }
        RGBA { r: float_to_u8(c.x), g: float_to_u8(c.y), b: float_to_u8(c.z), a: 255 }
    }

    pub fn to_u32(&self) -> u32 {
        bytemuck::cast(*self)
    }

    pub fn from_u32(packed: u32) -> Self {
        bytemuck::cast(packed)
    }
}
