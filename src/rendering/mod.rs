pub mod color;
pub mod context;
#[cfg(feature = "egui")]
pub mod painter;
#[cfg(feature = "render")]
pub mod raster;
pub mod surface;

// Re-export main types
pub use color::Color;
pub use context::{DrawCommand, RenderContext};
pub use surface::{RecordingSurface, Surface};
