use super::super::math::*;
use super::*;

/// Vertex positions, uploaded once and read by every draw.
pub struct VertexBuffer {
    positions: Vec<Vec3>,
}

impl VertexBuffer {
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }
}

impl Drop for VertexBuffer {
    fn drop(&mut self) {
        tracing::trace!(vertices = self.positions.len(), "released vertex buffer");
    }
}

/// Element buffer, refilled before each draw. Keeps its allocation between fills.
#[derive(Default)]
pub struct IndexBuffer {
    indices: Vec<u32>,
}

impl IndexBuffer {
    pub fn fill(&mut self, indices: &[u32]) {
        self.indices.clear();
        self.indices.extend_from_slice(indices);
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }
}

impl Drop for IndexBuffer {
    fn drop(&mut self) {
        tracing::trace!(capacity = self.indices.capacity(), "released index buffer");
    }
}

/// Software stand-in for a GPU context: owns the buffers, the bound program with its
/// uniforms, and the color/depth targets. Everything is released when the device drops.
pub struct Device {
    vertex_buffer: Option<VertexBuffer>,
    index_buffer: IndexBuffer,
    program: Program,
    uniforms: Uniforms,
    viewport: Viewport,
    color_buffer: Buffer<u32>,
    depth_buffer: Buffer<f32>,
}

impl Device {
    pub fn new(program: Program) -> Self {
        Self {
            vertex_buffer: None,
            index_buffer: IndexBuffer::default(),
            program,
            uniforms: Uniforms::default(),
            viewport: Viewport::new(0, 0, 0, 0),
            color_buffer: Buffer::new(0, 0),
            depth_buffer: Buffer::new(0, 0),
        }
    }

    pub fn upload_vertices(&mut self, positions: &[Vec3]) {
        tracing::debug!(vertices = positions.len(), "uploading vertex buffer");
        self.vertex_buffer = Some(VertexBuffer { positions: positions.to_vec() });
    }

    pub fn upload_indices(&mut self, indices: &[u32]) {
        self.index_buffer.fill(indices);
    }

    /// Sets the drawing area to the whole target, reallocating the targets when the size changes.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        let width = width.min(u16::MAX as u32) as u16;
        let height = height.min(u16::MAX as u32) as u16;
        let viewport = Viewport::new(0, 0, width, height);
        if viewport != self.viewport {
            tracing::debug!(width, height, "resizing render targets");
            self.color_buffer = Buffer::new(width as usize, height as usize);
            self.depth_buffer = Buffer::new(width as usize, height as usize);
            self.viewport = viewport;
        }
    }

    pub fn clear(&mut self, color: RGBA, depth: f32) {
        self.color_buffer.fill(color.to_u32());
        self.depth_buffer.fill(depth);
    }

    pub fn set_uniforms(&mut self, uniforms: Uniforms) {
        self.uniforms = uniforms;
    }

    /// Draws the current index buffer as a line strip over the vertex buffer.
    /// Returns the number of fragments written.
    pub fn draw_line_strip(&mut self) -> usize {
        let positions = match &self.vertex_buffer {
            Some(buffer) => buffer.positions(),
            None => return 0,
        };
        let command = DrawLineStripCommand {
            positions,
            indices: self.index_buffer.indices(),
            uniforms: self.uniforms,
            program: self.program,
        };
        let mut framebuffer =
            Framebuffer { color_buffer: Some(&mut self.color_buffer), depth_buffer: Some(&mut self.depth_buffer) };
        draw_line_strip(&mut framebuffer, &self.viewport, &command)
    }

    pub fn uniforms(&self) -> &Uniforms {
        &self.uniforms
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn index_buffer(&self) -> &IndexBuffer {
        &self.index_buffer
    }

    pub fn color_buffer(&self) -> &Buffer<u32> {
        &self.color_buffer
    }

    pub fn color_buffer_mut(&mut self) -> &mut Buffer<u32> {
        &mut self.color_buffer
    }

    pub fn depth_buffer(&self) -> &Buffer<f32> {
        &self.depth_buffer
    }
}
