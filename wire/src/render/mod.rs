pub mod buffer;
pub mod clipper;
pub mod device;
pub mod draw_line_strip;
pub mod framebuffer;
pub mod program;
pub mod rgba;
pub mod viewport;

pub use buffer::*;
pub use clipper::*;
pub use device::*;
pub use draw_line_strip::*;
pub use framebuffer::*;
pub use program::*;
pub use rgba::*;
pub use viewport::*;
