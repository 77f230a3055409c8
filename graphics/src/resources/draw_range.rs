//! Element range to vertex range conversion.

/// Vertex range issued by a single draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrawRange {
    /// Index of the first vertex to draw.
    pub first_vertex: usize,
    /// Number of vertices to draw.
    pub vertex_count: usize,
}

/// Clamp an element range against a payload of `len` floats.
///
/// `from` falls back to 0 when absent, zero, negative or past `len`.
/// `to` falls back to `len` when absent, zero or past `len`; a negative
/// `to` is kept and yields an inverted range.
pub fn clamp_element_range(from: Option<i64>, to: Option<i64>, len: usize) -> (i64, i64) {
    let len = i64::try_from(len).unwrap_or(i64::MAX);
    let from = match from {
        Some(from) if from > 0 && from <= len => from,
        _ => 0,
    };
    let to = match to {
        Some(to) if to != 0 && to <= len => to,
        _ => len,
    };
    (from, to)
}

impl DrawRange {
    /// Convert a clamped, non-empty element range into vertices.
    ///
    /// Both ends are divided by `components` with truncation, so element
    /// indices not aligned to the stride silently drop the partial vertex.
    /// Returns `None` for an empty or inverted range.
    pub fn from_elements(
        from: Option<i64>,
        to: Option<i64>,
        len: usize,
        components: usize,
    ) -> Option<Self> {
        let (from, to) = clamp_element_range(from, to, len);
        if from >= to {
            return None;
        }
        // 0 <= from < to <= len here
        let (from, to) = (from as usize, to as usize);
        let components = components.max(1);
        Some(Self {
            first_vertex: from / components,
            vertex_count: (to - from) / components,
        })
    }
}
