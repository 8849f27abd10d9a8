pub mod paint;
pub mod renderer;

pub use renderer::Renderer;
