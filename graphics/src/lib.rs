//! # plotgl Graphics
//!
//! GPU vertex buffers for drawing very large point, line and triangle
//! datasets.
//!
//! ## Overview
//!
//! This crate provides:
//! - [`VertexBuffer`] - Uploads a flat float payload once and draws sub-ranges of it
//! - [`RenderingContext`] - Trait for the GL-style context buffers are driven through
//! - [`ShaderProgram`] - Trait for looking up the linked program at bind time
//! - Backends: glow (OpenGL / WebGL2) and Dummy (for testing)
//!
//! ## Example
//!
//! ```ignore
//! use plotgl_graphics::{DrawMode, DummyBackend, Shader, VertexBuffer};
//!
//! let backend = DummyBackend::new();
//! let shader = Shader::new(backend.create_program(&["aVertexPosition"]));
//! let mut points = VertexBuffer::new(&backend, &shader, 2, positions);
//!
//! if points.build() && points.bind("aVertexPosition") {
//!     points.render(None, None, Some(DrawMode::Points));
//! }
//! points.destroy();
//! ```

pub mod backend;
pub mod error;
pub mod resources;
pub mod shader;
pub mod types;

// Re-export main types for convenience
pub use backend::dummy::{DrawCall, DummyBackend, DummyCommand};
#[cfg(feature = "glow-backend")]
pub use backend::glow_backend::GlowBackend;
pub use backend::{GpuBuffer, GpuProgram, RenderingContext};
pub use error::{GraphicsError, VertexBufferError};
pub use resources::{BufferState, DrawRange, VertexBuffer, VertexData};
pub use shader::{Shader, ShaderProgram};
pub use types::{
    BufferUsage, DEFAULT_COMPONENTS_PER_VERTEX, DrawMode, VertexAttribLayout,
    VertexBufferDescriptor,
};

/// Graphics library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the graphics subsystem.
///
/// Logs the crate version.
pub fn init() {
    log::info!("plotgl Graphics v{} initialized", VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_dummy_backend() {
        let backend = DummyBackend::new();
        assert_eq!(backend.name(), "Dummy Backend");
    }
}
