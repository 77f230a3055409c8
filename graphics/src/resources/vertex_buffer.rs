//! GPU vertex buffer.

use crate::backend::{GpuBuffer, RenderingContext};
use crate::error::VertexBufferError;
use crate::resources::{DrawRange, VertexData, clamp_element_range};
use crate::shader::ShaderProgram;
use crate::types::{
    BufferUsage, DEFAULT_COMPONENTS_PER_VERTEX, DrawMode, VertexAttribLayout,
    VertexBufferDescriptor,
};

/// GPU-side state of a [`VertexBuffer`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BufferState {
    /// No GPU buffer exists.
    #[default]
    Empty,
    /// A GPU buffer holding the last built payload.
    Built(GpuBuffer),
}

fn coerce_components(components_per_vertex: i32) -> usize {
    match usize::try_from(components_per_vertex) {
        Ok(components) if components > 0 => components,
        _ => DEFAULT_COMPONENTS_PER_VERTEX,
    }
}

/// A flat float payload uploaded to a single GPU buffer and drawn in ranges.
///
/// The buffer borrows its rendering context and shader; both must outlive
/// it. All calls mutate the context's binding state and must happen on the
/// thread that owns the context.
///
/// # Lifecycle
///
/// - [`build`](Self::build) uploads the payload, replacing any previous GPU
///   buffer. An empty payload destroys the GPU buffer and reports failure.
/// - [`bind`](Self::bind) wires the buffer to a named shader attribute.
/// - [`render`](Self::render) draws a sub-range of the payload.
/// - [`destroy`](Self::destroy) releases the GPU buffer; it is idempotent.
///
/// A buffer still built when dropped is released then.
///
/// # Example
///
/// ```ignore
/// let backend = DummyBackend::new();
/// let shader = Shader::new(backend.create_program(&["aVertexPosition"]));
/// let mut quad = VertexBuffer::new(&backend, &shader, 2, [0.0f32, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0]);
///
/// if quad.build() && quad.bind("aVertexPosition") {
///     quad.render(Some(0), Some(8), Some(DrawMode::TriangleFan));
/// }
/// quad.destroy();
/// ```
pub struct VertexBuffer<'a> {
    context: &'a dyn RenderingContext,
    shader: &'a dyn ShaderProgram,
    label: Option<String>,
    usage: BufferUsage,
    data: Vec<f32>,
    configured_components: usize,
    components: usize,
    cursor: usize,
    state: BufferState,
}

impl<'a> VertexBuffer<'a> {
    /// Create a vertex buffer. Does not touch the GPU.
    ///
    /// `components_per_vertex` below 1 falls back to 2.
    pub fn new(
        context: &'a dyn RenderingContext,
        shader: &'a dyn ShaderProgram,
        components_per_vertex: i32,
        data: impl Into<VertexData>,
    ) -> Self {
        Self::with_descriptor(
            context,
            shader,
            &VertexBufferDescriptor::new(components_per_vertex),
            data,
        )
    }

    /// Create a vertex buffer from a descriptor. Does not touch the GPU.
    pub fn with_descriptor(
        context: &'a dyn RenderingContext,
        shader: &'a dyn ShaderProgram,
        descriptor: &VertexBufferDescriptor,
        data: impl Into<VertexData>,
    ) -> Self {
        let components = coerce_components(descriptor.components_per_vertex);
        Self {
            context,
            shader,
            label: descriptor.label.clone(),
            usage: descriptor.usage,
            data: data.into().into_inner(),
            configured_components: components,
            components,
            cursor: 0,
            state: BufferState::Empty,
        }
    }

    /// Get the label, if set.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Get the upload hint.
    pub fn usage(&self) -> BufferUsage {
        self.usage
    }

    /// The CPU-side payload.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Number of floats in the payload.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the payload holds no floats.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of whole vertices in the payload.
    pub fn vertex_count(&self) -> usize {
        self.data.len() / self.components
    }

    /// Effective floats per vertex.
    pub fn components_per_vertex(&self) -> usize {
        self.components
    }

    /// Floats per vertex restored by [`destroy`](Self::destroy).
    pub fn configured_components_per_vertex(&self) -> usize {
        self.configured_components
    }

    /// Override the floats per vertex until the next [`destroy`](Self::destroy).
    ///
    /// Values below 1 fall back to 2. Takes effect on the next `bind` and
    /// `render`; the uploaded data is unaffected.
    pub fn set_components_per_vertex(&mut self, components_per_vertex: i32) {
        self.components = coerce_components(components_per_vertex);
    }

    /// GPU-side state.
    pub fn state(&self) -> &BufferState {
        &self.state
    }

    /// The GPU buffer, if built.
    pub fn gpu_buffer(&self) -> Option<&GpuBuffer> {
        match &self.state {
            BufferState::Built(buffer) => Some(buffer),
            BufferState::Empty => None,
        }
    }

    /// Whether a GPU buffer exists.
    pub fn is_built(&self) -> bool {
        matches!(self.state, BufferState::Built(_))
    }

    /// Replace the payload.
    ///
    /// Releases the GPU buffer; the new payload is uploaded by the next `build`.
    pub fn set_data(&mut self, data: impl Into<VertexData>) {
        self.release();
        self.data = data.into().into_inner();
        self.cursor = 0;
    }

    /// Replace the payload with `size` zeroes to be filled with [`push`](Self::push).
    ///
    /// Releases the GPU buffer like [`set_data`](Self::set_data).
    pub fn allocate(&mut self, size: usize) {
        self.release();
        self.data = VertexData::zeroed(size).into_inner();
        self.cursor = 0;
    }

    /// Write `values` at the fill cursor and advance it.
    ///
    /// Returns `false` and writes nothing if the values do not fit.
    pub fn push(&mut self, values: &[f32]) -> bool {
        let Some(end) = self
            .cursor
            .checked_add(values.len())
            .filter(|&end| end <= self.data.len())
        else {
            return false;
        };
        self.data[self.cursor..end].copy_from_slice(values);
        self.cursor = end;
        true
    }

    /// Upload the payload to a fresh GPU buffer.
    ///
    /// The new buffer is left bound to the array-buffer target.
    pub fn try_build(&mut self) -> Result<(), VertexBufferError> {
        if self.data.is_empty() {
            self.destroy();
            return Err(VertexBufferError::EmptyPayload);
        }

        self.release();
        let buffer = self.context.create_buffer()?;
        self.context.bind_array_buffer(Some(&buffer));
        self.context.upload_array_buffer(&self.data, self.usage);
        log::debug!(
            "VertexBuffer {}: built {:?} with {} floats on {}",
            self.display_label(),
            buffer,
            self.data.len(),
            self.context.name()
        );
        self.state = BufferState::Built(buffer);
        Ok(())
    }

    /// Upload the payload to a fresh GPU buffer.
    ///
    /// Returns `false` for an empty payload (after destroying any GPU buffer)
    /// or when the context fails to allocate.
    pub fn build(&mut self) -> bool {
        match self.try_build() {
            Ok(()) => true,
            Err(VertexBufferError::Backend(err)) => {
                log::error!("VertexBuffer {}: build failed: {err}", self.display_label());
                false
            }
            Err(err) => {
                log::debug!("VertexBuffer {}: build skipped: {err}", self.display_label());
                false
            }
        }
    }

    /// Bind the buffer to the attribute `name` of the linked program.
    ///
    /// Returns the resolved attribute location.
    pub fn try_bind(&self, name: &str) -> Result<u32, VertexBufferError> {
        let BufferState::Built(buffer) = &self.state else {
            return Err(VertexBufferError::NotBuilt);
        };
        let program = self.shader.program().ok_or(VertexBufferError::NoProgram)?;
        let location = self
            .context
            .attrib_location(&program, name)
            .ok_or_else(|| VertexBufferError::UnknownAttribute(name.to_string()))?;

        self.context.bind_array_buffer(Some(buffer));
        self.context
            .enable_vertex_attrib(location, &VertexAttribLayout::tightly_packed(self.components));
        Ok(location)
    }

    /// Bind the buffer to the attribute `name` of the linked program.
    ///
    /// Returns `false` if the buffer is not built, no program is linked or
    /// the attribute does not exist.
    pub fn bind(&self, name: &str) -> bool {
        self.try_bind(name)
            .inspect_err(|err| {
                log::debug!("VertexBuffer {}: bind skipped: {err}", self.display_label())
            })
            .is_ok()
    }

    /// Draw the element range `from..to` of the payload.
    ///
    /// See [`render`](Self::render) for how the range is clamped.
    pub fn try_render(
        &self,
        from: Option<i64>,
        to: Option<i64>,
        mode: Option<DrawMode>,
    ) -> Result<DrawRange, VertexBufferError> {
        if self.data.is_empty() {
            return Err(VertexBufferError::EmptyPayload);
        }
        let range = DrawRange::from_elements(from, to, self.data.len(), self.components)
            .ok_or_else(|| {
                let (from, to) = clamp_element_range(from, to, self.data.len());
                VertexBufferError::EmptyRange { from, to }
            })?;

        self.context
            .draw_arrays(mode.unwrap_or_default(), range.first_vertex, range.vertex_count)?;
        Ok(range)
    }

    /// Draw the element range `from..to` of the payload.
    ///
    /// `from` and `to` index floats, not vertices. `from` falls back to 0
    /// when absent, zero, negative or past the end; `to` falls back to the
    /// payload length when absent, zero or past the end. The draw starts at
    /// vertex `from / components` and covers `(to - from) / components`
    /// vertices. `mode` defaults to [`DrawMode::Points`].
    ///
    /// Uses whatever attributes are currently bound; call [`bind`](Self::bind)
    /// first. Returns `false` for an empty payload, an empty range or when
    /// the context rejects the draw.
    pub fn render(&self, from: Option<i64>, to: Option<i64>, mode: Option<DrawMode>) -> bool {
        match self.try_render(from, to, mode) {
            Ok(_) => true,
            Err(VertexBufferError::Backend(err)) => {
                log::error!("VertexBuffer {}: draw failed: {err}", self.display_label());
                false
            }
            Err(err) => {
                log::debug!("VertexBuffer {}: render skipped: {err}", self.display_label());
                false
            }
        }
    }

    /// Draw the whole payload.
    pub fn render_all(&self, mode: DrawMode) -> bool {
        self.render(None, None, Some(mode))
    }

    /// Release the GPU buffer and restore the configured floats per vertex.
    ///
    /// Safe to call any number of times. The payload is kept.
    pub fn destroy(&mut self) {
        self.release();
        self.components = self.configured_components;
        self.cursor = 0;
    }

    fn display_label(&self) -> &str {
        self.label().unwrap_or("unlabeled")
    }

    fn release(&mut self) {
        if let BufferState::Built(buffer) = std::mem::take(&mut self.state) {
            log::debug!("VertexBuffer {}: releasing {:?}", self.display_label(), buffer);
            self.context.delete_buffer(buffer);
        }
    }
}

impl Drop for VertexBuffer<'_> {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for VertexBuffer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VertexBuffer")
            .field("label", &self.label)
            .field("len", &self.data.len())
            .field("components", &self.components)
            .field("state", &self.state)
            .field("backend", &self.context.name())
            .finish()
    }
}

// Bound to the thread owning the rendering context.
static_assertions::assert_not_impl_any!(VertexBuffer<'static>: Send, Sync);
