//! Buffer types and descriptors.

/// Stride used when no valid component count is supplied.
pub const DEFAULT_COMPONENTS_PER_VERTEX: usize = 2;

/// Upload hint passed to the rendering context with the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BufferUsage {
    /// Uploaded once, drawn many times.
    #[default]
    StaticDraw,
    /// Re-uploaded occasionally, drawn many times.
    DynamicDraw,
    /// Uploaded once, drawn a few times.
    StreamDraw,
}

/// Layout of a single float vertex attribute.
///
/// The element type is always 32-bit float.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexAttribLayout {
    /// Number of floats per vertex.
    pub components: usize,
    /// Whether fixed-point values are normalized.
    pub normalized: bool,
    /// Byte stride between vertices (0 = tightly packed).
    pub stride: usize,
    /// Byte offset of the first element.
    pub offset: usize,
}

impl VertexAttribLayout {
    /// Layout for `components` floats per vertex with no padding.
    pub fn tightly_packed(components: usize) -> Self {
        Self {
            components,
            normalized: false,
            stride: 0,
            offset: 0,
        }
    }
}

/// Descriptor for creating a vertex buffer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VertexBufferDescriptor {
    /// Debug label for the buffer.
    pub label: Option<String>,
    /// Requested floats per vertex. Values below 1 fall back to
    /// [`DEFAULT_COMPONENTS_PER_VERTEX`].
    pub components_per_vertex: i32,
    /// Upload hint.
    pub usage: BufferUsage,
}

impl VertexBufferDescriptor {
    /// Create a new vertex buffer descriptor.
    pub fn new(components_per_vertex: i32) -> Self {
        Self {
            label: None,
            components_per_vertex,
            usage: BufferUsage::StaticDraw,
        }
    }

    /// Set the debug label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the upload hint.
    pub fn with_usage(mut self, usage: BufferUsage) -> Self {
        self.usage = usage;
        self
    }
}

impl Default for VertexBufferDescriptor {
    fn default() -> Self {
        Self::new(DEFAULT_COMPONENTS_PER_VERTEX as i32)
    }
}
