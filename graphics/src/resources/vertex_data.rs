//! Packed float payloads.

/// A packed `f32` vertex payload.
///
/// Row-major, `components_per_vertex` values per vertex, no padding and no
/// header. Numeric input of other types is converted on construction.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VertexData(Vec<f32>);

impl VertexData {
    /// Create an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a payload of `len` zeroes.
    pub fn zeroed(len: usize) -> Self {
        Self(vec![0.0; len])
    }

    /// Number of floats.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the payload holds no floats.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// View the payload.
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// Take the packed floats.
    pub fn into_inner(self) -> Vec<f32> {
        self.0
    }
}

impl From<Vec<f32>> for VertexData {
    fn from(values: Vec<f32>) -> Self {
        Self(values)
    }
}

impl From<Vec<f64>> for VertexData {
    fn from(values: Vec<f64>) -> Self {
        values.into_iter().map(|v| v as f32).collect()
    }
}

impl<T: Copy + Into<f64>> From<&[T]> for VertexData {
    fn from(values: &[T]) -> Self {
        values.iter().map(|&v| v.into() as f32).collect()
    }
}

impl<T: Copy + Into<f64>> From<&Vec<T>> for VertexData {
    fn from(values: &Vec<T>) -> Self {
        Self::from(values.as_slice())
    }
}

impl<T: Copy + Into<f64>, const N: usize> From<[T; N]> for VertexData {
    fn from(values: [T; N]) -> Self {
        Self::from(values.as_slice())
    }
}

impl FromIterator<f32> for VertexData {
    fn from_iter<I: IntoIterator<Item = f32>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
