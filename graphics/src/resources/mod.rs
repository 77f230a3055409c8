//! GPU resources.
//!
//! This module contains the vertex data types driven through a
//! [`RenderingContext`]:
//! - [`VertexBuffer`] - Flat float payload uploaded to one GPU buffer
//! - [`VertexData`] - Packed `f32` payload with numeric conversions
//! - [`DrawRange`] - Vertex range derived from an element range
//!
//! [`RenderingContext`]: crate::backend::RenderingContext

mod draw_range;
mod vertex_buffer;
mod vertex_data;

pub use draw_range::{DrawRange, clamp_element_range};
pub use vertex_buffer::{BufferState, VertexBuffer};
pub use vertex_data::VertexData;
