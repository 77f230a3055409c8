//! Common types and descriptors for vertex data.
//!
//! This module contains the draw topology enum, the buffer usage hint,
//! the attribute layout declared at bind time and the descriptor used
//! to configure a [`VertexBuffer`](crate::resources::VertexBuffer).

mod buffer;
mod draw;

pub use buffer::{
    BufferUsage, DEFAULT_COMPONENTS_PER_VERTEX, VertexAttribLayout, VertexBufferDescriptor,
};
pub use draw::DrawMode;
