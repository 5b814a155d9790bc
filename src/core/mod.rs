pub mod bindings;
pub mod geometry;
pub mod machine;

pub use bindings::*;
pub use geometry::*;
pub use machine::*;

// Shader bundled as a string constant
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
