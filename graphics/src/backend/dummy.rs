//! Dummy GPU backend for testing and development.
//!
//! This backend doesn't perform actual GPU operations. It hands out
//! sequential ids and records every call made through [`RenderingContext`],
//! so the graphics API can be exercised and inspected without GPU hardware.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use crate::error::GraphicsError;
use crate::types::{BufferUsage, DrawMode, VertexAttribLayout};

use super::{GpuBuffer, GpuProgram, RenderingContext};

/// A draw call observed by the dummy backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCall {
    /// Topology passed to the draw.
    pub mode: DrawMode,
    /// First vertex.
    pub first: usize,
    /// Number of vertices.
    pub count: usize,
    /// Array buffer bound when the draw was issued.
    pub array_buffer: Option<u32>,
}

/// A call recorded by the dummy backend, in submission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DummyCommand {
    /// A buffer was allocated.
    CreateBuffer { id: u32 },
    /// The array-buffer target was set, or cleared with `None`.
    BindArrayBuffer { id: Option<u32> },
    /// Floats were uploaded to the bound array buffer.
    UploadArrayBuffer {
        /// Buffer bound at upload time.
        id: Option<u32>,
        /// Number of floats uploaded.
        len: usize,
        /// Upload hint.
        usage: BufferUsage,
    },
    /// An attribute slot was enabled and pointed at the bound array buffer.
    EnableVertexAttrib {
        /// Attribute location.
        location: u32,
        /// Layout of the attribute in the buffer.
        layout: VertexAttribLayout,
    },
    /// A draw was issued.
    DrawArrays(DrawCall),
    /// A buffer was released.
    DeleteBuffer { id: u32 },
}

#[derive(Debug, Default)]
struct DummyState {
    next_buffer_id: u32,
    next_program_id: u32,
    live_buffers: HashSet<u32>,
    allocated: usize,
    released: usize,
    bound_array_buffer: Option<u32>,
    uploads: HashMap<u32, Vec<f32>>,
    programs: HashMap<u32, HashMap<String, u32>>,
    vertex_attribs: HashMap<u32, (Option<u32>, VertexAttribLayout)>,
    commands: Vec<DummyCommand>,
    fail_next_allocation: bool,
    fail_next_draw: bool,
}

/// Dummy GPU backend.
#[derive(Debug, Default)]
pub struct DummyBackend {
    state: RefCell<DummyState>,
}

impl DummyBackend {
    /// Create a new dummy backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a linked program exposing `attributes`.
    ///
    /// Attribute locations are assigned in order, starting at 0.
    pub fn create_program(&self, attributes: &[&str]) -> GpuProgram {
        let mut state = self.state.borrow_mut();
        state.next_program_id += 1;
        let id = state.next_program_id;
        let locations = attributes
            .iter()
            .zip(0u32..)
            .map(|(name, location)| ((*name).to_string(), location))
            .collect();
        state.programs.insert(id, locations);
        log::trace!("DummyBackend: created program {id} with attributes {attributes:?}");
        GpuProgram::Dummy { id }
    }

    /// Make the next [`RenderingContext::create_buffer`] call fail.
    pub fn fail_next_allocation(&self) {
        self.state.borrow_mut().fail_next_allocation = true;
    }

    /// Make the next [`RenderingContext::draw_arrays`] call fail without drawing.
    pub fn fail_next_draw(&self) {
        self.state.borrow_mut().fail_next_draw = true;
    }

    /// Number of buffers allocated so far.
    pub fn allocated_count(&self) -> usize {
        self.state.borrow().allocated
    }

    /// Number of buffers released so far.
    pub fn released_count(&self) -> usize {
        self.state.borrow().released
    }

    /// Number of buffers allocated and not yet released.
    pub fn live_buffer_count(&self) -> usize {
        self.state.borrow().live_buffers.len()
    }

    /// Whether the buffer with `id` is allocated and not yet released.
    pub fn is_live(&self, id: u32) -> bool {
        self.state.borrow().live_buffers.contains(&id)
    }

    /// Id of the buffer currently bound to the array-buffer target.
    pub fn bound_array_buffer(&self) -> Option<u32> {
        self.state.borrow().bound_array_buffer
    }

    /// Last payload uploaded into the buffer with `id`.
    pub fn uploaded_data(&self, id: u32) -> Option<Vec<f32>> {
        self.state.borrow().uploads.get(&id).cloned()
    }

    /// Buffer and layout wired to an attribute slot.
    pub fn vertex_attrib(&self, location: u32) -> Option<(Option<u32>, VertexAttribLayout)> {
        self.state.borrow().vertex_attribs.get(&location).copied()
    }

    /// All draw calls issued so far.
    pub fn draw_calls(&self) -> Vec<DrawCall> {
        self.state
            .borrow()
            .commands
            .iter()
            .filter_map(|command| match command {
                DummyCommand::DrawArrays(call) => Some(*call),
                _ => None,
            })
            .collect()
    }

    /// All recorded calls, in submission order.
    pub fn commands(&self) -> Vec<DummyCommand> {
        self.state.borrow().commands.clone()
    }

    /// Forget recorded calls. Buffers, programs and bindings are kept.
    pub fn clear_commands(&self) {
        self.state.borrow_mut().commands.clear();
    }
}

fn dummy_buffer_id(buffer: &GpuBuffer) -> Option<u32> {
    match buffer {
        GpuBuffer::Dummy { id } => Some(*id),
        #[cfg(feature = "glow-backend")]
        other => {
            log::warn!("DummyBackend: ignoring foreign buffer {other:?}");
            None
        }
    }
}

impl RenderingContext for DummyBackend {
    fn name(&self) -> &'static str {
        "Dummy Backend"
    }

    fn create_buffer(&self) -> Result<GpuBuffer, GraphicsError> {
        let mut state = self.state.borrow_mut();
        if std::mem::take(&mut state.fail_next_allocation) {
            return Err(GraphicsError::ResourceCreationFailed(
                "dummy allocation failure".to_string(),
            ));
        }

        state.next_buffer_id += 1;
        let id = state.next_buffer_id;
        state.live_buffers.insert(id);
        state.allocated += 1;
        state.commands.push(DummyCommand::CreateBuffer { id });
        log::trace!("DummyBackend: creating buffer {id}");
        Ok(GpuBuffer::Dummy { id })
    }

    fn bind_array_buffer(&self, buffer: Option<&GpuBuffer>) {
        let id = buffer.and_then(dummy_buffer_id);
        let mut state = self.state.borrow_mut();
        state.bound_array_buffer = id;
        state.commands.push(DummyCommand::BindArrayBuffer { id });
        log::trace!("DummyBackend: bind_array_buffer {id:?}");
    }

    fn upload_array_buffer(&self, data: &[f32], usage: BufferUsage) {
        let mut state = self.state.borrow_mut();
        let id = state.bound_array_buffer;
        state.commands.push(DummyCommand::UploadArrayBuffer {
            id,
            len: data.len(),
            usage,
        });
        match id {
            Some(id) => {
                log::trace!(
                    "DummyBackend: upload_array_buffer buffer={id} len={} usage={usage:?}",
                    data.len()
                );
                state.uploads.insert(id, data.to_vec());
            }
            None => log::warn!("DummyBackend: upload with no array buffer bound"),
        }
    }

    fn attrib_location(&self, program: &GpuProgram, name: &str) -> Option<u32> {
        let id = match program {
            GpuProgram::Dummy { id } => *id,
            #[cfg(feature = "glow-backend")]
            other => {
                log::warn!("DummyBackend: ignoring foreign program {other:?}");
                return None;
            }
        };
        self.state
            .borrow()
            .programs
            .get(&id)
            .and_then(|attributes| attributes.get(name))
            .copied()
    }

    fn enable_vertex_attrib(&self, location: u32, layout: &VertexAttribLayout) {
        let mut state = self.state.borrow_mut();
        let buffer = state.bound_array_buffer;
        state.vertex_attribs.insert(location, (buffer, *layout));
        state.commands.push(DummyCommand::EnableVertexAttrib {
            location,
            layout: *layout,
        });
        log::trace!("DummyBackend: enable_vertex_attrib location={location} buffer={buffer:?}");
    }

    fn draw_arrays(
        &self,
        mode: DrawMode,
        first: usize,
        count: usize,
    ) -> Result<(), GraphicsError> {
        let mut state = self.state.borrow_mut();
        if std::mem::take(&mut state.fail_next_draw) {
            return Err(GraphicsError::InvalidParameter("dummy draw failure".to_string()));
        }
        let call = DrawCall {
            mode,
            first,
            count,
            array_buffer: state.bound_array_buffer,
        };
        state.commands.push(DummyCommand::DrawArrays(call));
        log::trace!("DummyBackend: draw_arrays {mode} first={first} count={count}");
        Ok(())
    }

    fn delete_buffer(&self, buffer: GpuBuffer) {
        let Some(id) = dummy_buffer_id(&buffer) else {
            return;
        };
        let mut state = self.state.borrow_mut();
        if !state.live_buffers.remove(&id) {
            log::warn!("DummyBackend: deleting unknown buffer {id}");
            return;
        }
        state.released += 1;
        state.uploads.remove(&id);
        if state.bound_array_buffer == Some(id) {
            state.bound_array_buffer = None;
        }
        state.commands.push(DummyCommand::DeleteBuffer { id });
        log::trace!("DummyBackend: delete_buffer {id}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dummy_backend_name() {
        let backend = DummyBackend::new();
        assert_eq!(backend.name(), "Dummy Backend");
    }

    #[test]
    fn test_buffer_ids_are_sequential() {
        let backend = DummyBackend::new();
        let a = backend.create_buffer().unwrap();
        let b = backend.create_buffer().unwrap();
        assert_eq!(a, GpuBuffer::Dummy { id: 1 });
        assert_eq!(b, GpuBuffer::Dummy { id: 2 });
        assert_eq!(backend.allocated_count(), 2);
        assert_eq!(backend.live_buffer_count(), 2);
    }

    #[test]
    fn test_upload_goes_to_bound_buffer() {
        let backend = DummyBackend::new();
        let buffer = backend.create_buffer().unwrap();
        backend.bind_array_buffer(Some(&buffer));
        backend.upload_array_buffer(&[1.0, 2.0], BufferUsage::StaticDraw);
        assert_eq!(backend.uploaded_data(1), Some(vec![1.0, 2.0]));
    }

    #[test]
    fn test_upload_without_binding_is_dropped() {
        let backend = DummyBackend::new();
        backend.create_buffer().unwrap();
        backend.upload_array_buffer(&[1.0], BufferUsage::StaticDraw);
        assert_eq!(backend.uploaded_data(1), None);
    }

    #[test]
    fn test_delete_unbinds_bound_buffer() {
        let backend = DummyBackend::new();
        let buffer = backend.create_buffer().unwrap();
        backend.bind_array_buffer(Some(&buffer));
        backend.delete_buffer(buffer);
        assert_eq!(backend.bound_array_buffer(), None);
        assert_eq!(backend.released_count(), 1);
        assert!(!backend.is_live(1));
    }

    #[test]
    fn test_double_delete_counts_once() {
        let backend = DummyBackend::new();
        let buffer = backend.create_buffer().unwrap();
        backend.delete_buffer(buffer.clone());
        backend.delete_buffer(buffer);
        assert_eq!(backend.released_count(), 1);
    }

    #[test]
    fn test_attrib_locations() {
        let backend = DummyBackend::new();
        let program = backend.create_program(&["aVertexPosition", "aColor"]);
        assert_eq!(backend.attrib_location(&program, "aVertexPosition"), Some(0));
        assert_eq!(backend.attrib_location(&program, "aColor"), Some(1));
        assert_eq!(backend.attrib_location(&program, "aMissing"), None);
        assert_eq!(backend.attrib_location(&GpuProgram::Dummy { id: 99 }, "aColor"), None);
    }

    #[test]
    fn test_injected_allocation_failure_is_one_shot() {
        let backend = DummyBackend::new();
        backend.fail_next_allocation();
        assert!(backend.create_buffer().is_err());
        assert!(backend.create_buffer().is_ok());
        assert_eq!(backend.allocated_count(), 1);
    }

    #[test]
    fn test_injected_draw_failure_is_one_shot() {
        let backend = DummyBackend::new();
        backend.fail_next_draw();
        assert!(backend.draw_arrays(DrawMode::Points, 0, 1).is_err());
        assert!(backend.draw_calls().is_empty());
        assert!(backend.draw_arrays(DrawMode::Points, 0, 1).is_ok());
        assert_eq!(backend.draw_calls().len(), 1);
    }

    #[test]
    fn test_draw_records_bound_buffer() {
        let backend = DummyBackend::new();
        let buffer = backend.create_buffer().unwrap();
        backend.bind_array_buffer(Some(&buffer));
        backend.draw_arrays(DrawMode::Lines, 2, 6).unwrap();
        assert_eq!(
            backend.draw_calls(),
            vec![DrawCall {
                mode: DrawMode::Lines,
                first: 2,
                count: 6,
                array_buffer: Some(1),
            }]
        );
    }
}
