use crate::config::ViewerConfig;
use crate::frame::{FrameState, Transform};
use crate::math::*;
use crate::mesh::{Face, Mesh};
use crate::render::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WindowError {
    #[error("failed to initialize the window system: {0}")]
    Init(String),

    #[error("failed to present frame: {0}")]
    Present(String),
}

/// What the render loop needs from the windowing system.
pub trait Window {
    /// Current drawable size in pixels.
    fn size(&self) -> (u32, u32);

    fn present(&mut self, frame: &mut Buffer<u32>) -> Result<(), WindowError>;

    fn pump_events(&mut self);

    /// Latched: stays true once Escape was seen down during `pump_events`.
    fn escape_pressed(&self) -> bool;

    fn close_requested(&self) -> bool;

    fn should_exit(&self) -> bool {
        self.escape_pressed() || self.close_requested()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    pub draws: usize,
    pub fragments: usize,
}

/// Owns the device with the mesh already uploaded and draws it frame by frame.
pub struct Viewer {
    device: Device,
    faces: Vec<Face>,
    transform: Transform,
    time_step: f32,
    rotation_step: f32,
    fog_color: Vec3,
}

impl Viewer {
    pub fn new(mesh: Mesh, config: &ViewerConfig) -> Self {
        let mut device = Device::new(Program::new(config.base_color));
        device.upload_vertices(&mesh.vertices);
        Self {
            device,
            faces: mesh.faces,
            transform: Transform::new(config),
            time_step: config.time_step,
            rotation_step: config.rotation_step,
            fog_color: config.fog_color,
        }
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    pub fn render_frame<W: Window>(&mut self, state: &mut FrameState, window: &mut W) -> Result<FrameStats, WindowError> {
        state.advance_time(self.time_step);

        let (width, height) = window.size();
        self.device.set_viewport(width, height);
        self.device.clear(RGBA::from_color(self.fog_color), 1.0);

        state.advance_rotation(self.rotation_step);
        self.device.set_uniforms(self.transform.uniforms(state, self.fog_color));

        let mut stats = FrameStats::default();
        for face in &self.faces {
            self.device.upload_indices(face.indices());
            stats.fragments += self.device.draw_line_strip();
            stats.draws += 1;
        }

        window.present(self.device.color_buffer_mut())?;
        window.pump_events();
        state.frames += 1;
        tracing::trace!(frame = state.frames, draws = stats.draws, fragments = stats.fragments, "frame done");
        Ok(stats)
    }

    /// Renders until Escape is pressed or the window is asked to close.
    /// At least one frame is always drawn; the exit check follows each frame.
    pub fn run<W: Window>(&mut self, state: &mut FrameState, window: &mut W) -> Result<(), WindowError> {
        tracing::info!(faces = self.faces.len(), "entering render loop");
        loop {
            self.render_frame(state, window)?;
            if window.should_exit() {
                break;
            }
        }
        tracing::info!(frames = state.frames, "render loop finished");
        Ok(())
    }
}
