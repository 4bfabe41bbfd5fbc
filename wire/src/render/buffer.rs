use bytemuck::{Pod, Zeroable};

/// A flat 2D array of pixels, used for both the color and the depth target.
pub struct Buffer<T> {
    /// Width of usable elements in the buffer
    pub width: usize,

    /// Height of usable elements in the buffer
    pub height: usize,

    /// Number of elements between the rows
    pub stride: usize,

    /// The actual elements in the buffer
    pub elems: Vec<T>,
}

impl<T: Copy + Zeroable + Pod> Buffer<T> {
    pub fn new(width: usize, height: usize) -> Self {
        let stride = width;
        let elems = vec![T::zeroed(); stride * height];
        Self { width, height, stride, elems }
    }

    pub fn at(&self, x: usize, y: usize) -> T {
        assert!(x < self.width, "x out of bounds: {} >= {}", x, self.width);
        assert!(y < self.height, "y out of bounds: {} >= {}", y, self.height);
        self.elems[y * self.stride + x]
    }

    pub fn at_mut(&mut self, x: usize, y: usize) -> &mut T {
        assert!(x < self.width, "x out of bounds: {} >= {}", x, self.width);
        assert!(y < self.height, "y out of bounds: {} >= {}", y, self.height);
        &mut self.elems[y * self.stride + x]
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn as_u8_slice_mut(&mut self) -> &mut [u8] {
        bytemuck::cast_slice_mut(&mut self.elems)
    }

    pub fn fill(&mut self, with: T) {
        self.elems.fill(with);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_new_is_zeroed() {
        let buffer = Buffer::<u32>::new(3, 2);
        assert_eq!(buffer.elems.len(), 6);
        assert!(buffer.elems.iter().all(|&e| e == 0));
        assert!(!buffer.is_empty());
        assert!(Buffer::<f32>::new(0, 5).is_empty());
    }

    #[test]
    fn test_buffer_at_mut_and_fill() {
        let mut buffer = Buffer::<f32>::new(4, 4);
        buffer.fill(1.0);
        *buffer.at_mut(2, 3) = 0.25;
        assert_eq!(buffer.at(2, 3), 0.25);
        assert_eq!(buffer.at(3, 2), 1.0);
        assert_eq!(buffer.as_u8_slice_mut().len(), 4 * 4 * 4);
    }

    #[test]
    #[should_panic]
    fn test_buffer_out_of_bounds() {
        let buffer = Buffer::<u32>::new(2, 2);
        buffer.at(2, 0);
    }
}
