pub mod mesh;
pub mod renderer;
pub mod window;

pub use mesh::SphereOptions;
pub use renderer::{RenderOptions, Renderer};
pub use window::run;
