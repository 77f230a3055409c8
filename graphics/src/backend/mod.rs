//! GPU backend abstraction layer.
//!
//! This module provides the [`RenderingContext`] capability trait that
//! vertex buffers drive, along with the opaque handle types it hands out.
//!
//! # Available Backends
//!
//! - `dummy` (always built): recording backend for testing and headless runs
//! - `glow-backend`: OpenGL / OpenGL ES / WebGL2 through `glow`
//!
//! # Binding State
//!
//! GL-style contexts keep a single "current array buffer" and a table of
//! enabled attribute slots. Every method here may mutate that shared state;
//! none of them restores a previous binding.

#[cfg(feature = "glow-backend")]
pub mod glow_backend;

pub mod dummy;

use crate::error::GraphicsError;
use crate::types::{BufferUsage, DrawMode, VertexAttribLayout};

/// Handle to a GPU buffer object.
///
/// Not `Copy`: whoever holds the handle is responsible for passing it back
/// to [`RenderingContext::delete_buffer`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GpuBuffer {
    /// Dummy backend buffer id
    Dummy { id: u32 },
    /// glow backend buffer
    #[cfg(feature = "glow-backend")]
    Glow(<glow::Context as glow::HasContext>::Buffer),
}

/// Handle to a linked shader program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GpuProgram {
    /// Dummy backend program id
    Dummy { id: u32 },
    /// glow backend program
    #[cfg(feature = "glow-backend")]
    Glow(<glow::Context as glow::HasContext>::Program),
}

/// Rendering context capability consumed by vertex buffers.
///
/// Implementations are expected to be used from the thread that owns the
/// underlying graphics context only.
pub trait RenderingContext {
    /// Get the backend name.
    fn name(&self) -> &'static str;

    /// Allocate a buffer object.
    fn create_buffer(&self) -> Result<GpuBuffer, GraphicsError>;

    /// Bind a buffer to the array-buffer target, or unbind with `None`.
    fn bind_array_buffer(&self, buffer: Option<&GpuBuffer>);

    /// Upload floats to the currently bound array buffer.
    fn upload_array_buffer(&self, data: &[f32], usage: BufferUsage);

    /// Resolve a vertex attribute location by name.
    ///
    /// Returns `None` when the program has no active attribute with that name.
    fn attrib_location(&self, program: &GpuProgram, name: &str) -> Option<u32>;

    /// Enable an attribute slot and point it at the bound array buffer.
    fn enable_vertex_attrib(&self, location: u32, layout: &VertexAttribLayout);

    /// Draw `count` vertices starting at vertex `first` from the enabled attributes.
    ///
    /// Fails without drawing when the range cannot be expressed by the backend.
    fn draw_arrays(
        &self,
        mode: DrawMode,
        first: usize,
        count: usize,
    ) -> Result<(), GraphicsError>;

    /// Release a buffer object.
    fn delete_buffer(&self, buffer: GpuBuffer);
}
