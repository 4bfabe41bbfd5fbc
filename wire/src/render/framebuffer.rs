use super::*;

/// Borrowed render targets for one draw. Either target may be absent.
pub struct Framebuffer<'a> {
    pub color_buffer: Option<&'a mut Buffer<u32>>,
    pub depth_buffer: Option<&'a mut Buffer<f32>>,
}

impl Default for Framebuffer<'_> {
    fn default() -> Self {
        Self { color_buffer: None, depth_buffer: None }
    }
}

impl Framebuffer<'_> {
    pub fn width(&self) -> usize {
        if let Some(buffer) = &self.color_buffer {
            return buffer.width;
        }
        if let Some(buffer) = &self.depth_buffer {
            return buffer.width;
        }
        0
    }

    pub fn height(&self) -> usize {
        if let Some(buffer) = &self.color_buffer {
            return buffer.height;
        }
        if let Some(buffer) = &self.depth_buffer {
            return buffer.height;
        }
        0
    }

    /// Depth test (LESS) and write for a single fragment. Returns false if the fragment is hidden.
    pub fn test_and_set_depth(&mut self, x: usize, y: usize, depth: f32) -> bool {
        match self.depth_buffer.as_deref_mut() {
            Some(buf) => {
                let dst = buf.at_mut(x, y);
                if depth < *dst {
                    *dst = depth;
                    true
                } else {
                    false
                }
            }
            None => true,
        }
    }

    pub fn write_color(&mut self, x: usize, y: usize, color: RGBA) {
        if let Some(buf) = self.color_buffer.as_deref_mut() {
            *buf.at_mut(x, y) = color.to_u32();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framebuffer_size_from_any_target() {
        let mut depth = Buffer::<f32>::new(7, 3);
        let framebuffer = Framebuffer { depth_buffer: Some(&mut depth), ..Default::default() };
        assert_eq!((framebuffer.width(), framebuffer.height()), (7, 3));
        assert_eq!(Framebuffer::default().width(), 0);
    }

    #[test]
    fn test_framebuffer_depth_less() {
        let mut depth = Buffer::<f32>::new(2, 2);
        depth.fill(1.0);
        let mut framebuffer = Framebuffer { depth_buffer: Some(&mut depth), ..Default::default() };
        assert!(!framebuffer.test_and_set_depth(0, 0, 1.0));
        assert!(framebuffer.test_and_set_depth(0, 0, 0.5));
        assert!(!framebuffer.test_and_set_depth(0, 0, 0.5));
        assert!(framebuffer.test_and_set_depth(0, 0, 0.25));
        assert_eq!(depth.at(0, 0), 0.25);
    }

    #[test]
    fn test_framebuffer_without_depth_always_passes() {
        let mut color = Buffer::<u32>::new(2, 2);
        let mut framebuffer = Framebuffer { color_buffer: Some(&mut color), ..Default::default() };
        assert!(framebuffer.test_and_set_depth(1, 1, 5.0));
        framebuffer.write_color(1, 1, RGBA::new(1, 2, 3, 255));
        assert_eq!(RGBA::from_u32(color.at(1, 1)), RGBA::new(1, 2, 3, 255));
    }
}
