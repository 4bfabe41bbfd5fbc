use crate::math::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub xmin: u16,
    pub ymin: u16,
    pub xmax: u16,
    pub ymax: u16,
}

impl Viewport {
    pub fn new(xmin: u16, ymin: u16, xmax: u16, ymax: u16) -> Viewport {
        Viewport { xmin, ymin, xmax, ymax }
    }

    pub fn width(&self) -> u16 {
        self.xmax.saturating_sub(self.xmin)
    }

    pub fn height(&self) -> u16 {
        self.ymax.saturating_sub(self.ymin)
    }

    /// NDC to window coordinates, y pointing down. Z is passed through untouched.
    pub fn apply(&self, v: Vec3) -> Vec3 {
        let w = self.width() as f32 - 1.0;
        let h = self.height() as f32 - 1.0;
        Vec3::new(self.xmin as f32 + w * (0.5 + 0.5 * v.x), self.ymin as f32 + h * (0.5 - 0.5 * v.y), v.z)
    }
}
