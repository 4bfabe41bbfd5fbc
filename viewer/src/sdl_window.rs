use sdl3::event::{Event, WindowEvent};
use sdl3::keyboard::{Keycode, Scancode};
use sdl3::pixels::PixelFormat;
use sdl3::surface::Surface;
use wire::app::{Window, WindowError};
use wire::config::ViewerConfig;
use wire::render::Buffer;

/// An SDL3 window that shows the device's color buffer by blitting it onto the window surface.
pub struct SdlWindow {
    window: sdl3::video::Window,
    event_pump: sdl3::EventPump,
    escape_pressed: bool,
    close_requested: bool,
    _video: sdl3::VideoSubsystem,
    _sdl: sdl3::Sdl,
}

fn init_error<E: ToString>(e: E) -> WindowError {
    WindowError::Init(e.to_string())
}

fn present_error<E: ToString>(e: E) -> WindowError {
    WindowError::Present(e.to_string())
}

impl SdlWindow {
    pub fn new(config: &ViewerConfig) -> Result<Self, WindowError> {
        let sdl = sdl3::init().map_err(init_error)?;
        let video = sdl.video().map_err(init_error)?;
        let window = video
            .window(&config.window_title, config.window_width, config.window_height)
            .resizable()
            .build()
            .map_err(init_error)?;
        let event_pump = sdl.event_pump().map_err(init_error)?;
        tracing::info!(width = config.window_width, height = config.window_height, "window created");
        Ok(Self {
            window,
            event_pump,
            escape_pressed: false,
            close_requested: false,
            _video: video,
            _sdl: sdl,
        })
    }
}

impl Window for SdlWindow {
    fn size(&self) -> (u32, u32) {
        self.window.size()
    }

    fn present(&mut self, frame: &mut Buffer<u32>) -> Result<(), WindowError> {
        if frame.is_empty() {
            return Ok(());
        }
        let width = frame.width as u32;
        let height = frame.height as u32;
        let pitch = (frame.stride * 4) as u32;
        let source = Surface::from_data(frame.as_u8_slice_mut(), width, height, pitch, PixelFormat::ABGR8888.into())
            .map_err(present_error)?;
        let mut target = self.window.surface(&self.event_pump).map_err(present_error)?;
        source.blit(None, &mut target, None).map_err(present_error)?;
        target.finish().map_err(present_error)
    }

    fn pump_events(&mut self) {
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } | Event::Window { win_event: WindowEvent::CloseRequested, .. } => {
                    self.close_requested = true
                }
                Event::KeyDown { keycode: Some(Keycode::Escape), .. } => self.escape_pressed = true,
                _ => {}
            }
        }
        if self.event_pump.keyboard_state().is_scancode_pressed(Scancode::Escape) {
            self.escape_pressed = true;
        }
    }

    fn escape_pressed(&self) -> bool {
        self.escape_pressed
    }

    fn close_requested(&self) -> bool {
        self.close_requested
    }
}
