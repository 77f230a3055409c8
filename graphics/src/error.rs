//! Graphics error types.

use std::fmt;

/// Errors reported by a rendering context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphicsError {
    /// Failed to create a resource.
    ResourceCreationFailed(String),
    /// An invalid parameter was provided.
    InvalidParameter(String),
}

impl fmt::Display for GraphicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResourceCreationFailed(msg) => write!(f, "resource creation failed: {msg}"),
            Self::InvalidParameter(msg) => write!(f, "invalid parameter: {msg}"),
        }
    }
}

impl std::error::Error for GraphicsError {}

/// Reasons a [`VertexBuffer`] operation did not take effect.
///
/// The boolean operations (`build`, `bind`, `render`) collapse all of these
/// into `false`; the `try_*` variants hand them back for logging.
///
/// [`VertexBuffer`]: crate::resources::VertexBuffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VertexBufferError {
    /// The payload holds no values.
    EmptyPayload,
    /// No GPU buffer exists; `build` has not succeeded yet.
    NotBuilt,
    /// The shader has no linked program.
    NoProgram,
    /// The attribute name did not resolve in the linked program.
    UnknownAttribute(String),
    /// The normalized element range is empty or inverted.
    EmptyRange {
        /// First element index after clamping.
        from: i64,
        /// End element index after clamping.
        to: i64,
    },
    /// The rendering context failed to allocate the buffer.
    Backend(GraphicsError),
}

impl fmt::Display for VertexBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPayload => write!(f, "vertex payload is empty"),
            Self::NotBuilt => write!(f, "vertex buffer has not been built"),
            Self::NoProgram => write!(f, "shader has no linked program"),
            Self::UnknownAttribute(name) => write!(f, "attribute `{name}` not found in program"),
            Self::EmptyRange { from, to } => write!(f, "empty draw range {from}..{to}"),
            Self::Backend(err) => write!(f, "backend error: {err}"),
        }
    }
}

impl std::error::Error for VertexBufferError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Backend(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GraphicsError> for VertexBufferError {
    fn from(err: GraphicsError) -> Self {
        Self::Backend(err)
    }
}
