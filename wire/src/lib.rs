pub mod app;
pub mod config;
pub mod frame;
pub mod math;
pub mod mesh;
pub mod render;
