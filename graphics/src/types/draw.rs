//! Draw topology.

use std::fmt;
use std::str::FromStr;

use crate::error::GraphicsError;

/// Primitive topology used when issuing a draw call.
///
/// Names follow the GL enumerants, so the plotting layer can pass modes
/// around as text (`"TRIANGLE_FAN"`) and parse them at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DrawMode {
    /// Each vertex is a separate point.
    #[default]
    Points,
    /// Every two vertices form a line.
    Lines,
    /// Vertices form a closed loop of lines.
    LineLoop,
    /// Vertices form a connected strip of lines.
    LineStrip,
    /// Every three vertices form a triangle.
    Triangles,
    /// Vertices form a connected strip of triangles.
    TriangleStrip,
    /// Vertices form a fan of triangles around the first vertex.
    TriangleFan,
}

impl DrawMode {
    /// All draw modes, in GL enumerant order.
    pub const ALL: [DrawMode; 7] = [
        Self::Points,
        Self::Lines,
        Self::LineLoop,
        Self::LineStrip,
        Self::Triangles,
        Self::TriangleStrip,
        Self::TriangleFan,
    ];

    /// The GL name of this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Points => "POINTS",
            Self::Lines => "LINES",
            Self::LineLoop => "LINE_LOOP",
            Self::LineStrip => "LINE_STRIP",
            Self::Triangles => "TRIANGLES",
            Self::TriangleStrip => "TRIANGLE_STRIP",
            Self::TriangleFan => "TRIANGLE_FAN",
        }
    }
}

impl fmt::Display for DrawMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DrawMode {
    type Err = GraphicsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| GraphicsError::InvalidParameter(format!("unknown draw mode `{s}`")))
    }
}

static_assertions::assert_impl_all!(DrawMode: Copy, Send, Sync);
