//! Shader capability consumed by vertex buffers.
//!
//! Compiling and linking shaders is left to the caller. A vertex buffer only
//! needs to know which program is currently linked, so it can resolve
//! attribute locations by name at bind time.

use std::cell::Cell;

use crate::backend::GpuProgram;

/// Source of the currently linked program.
pub trait ShaderProgram {
    /// The linked program, or `None` if nothing is linked.
    fn program(&self) -> Option<GpuProgram>;
}

impl ShaderProgram for GpuProgram {
    fn program(&self) -> Option<GpuProgram> {
        Some(*self)
    }
}

impl ShaderProgram for Option<GpuProgram> {
    fn program(&self) -> Option<GpuProgram> {
        *self
    }
}

/// A relinkable program slot.
///
/// Vertex buffers borrow the shader for their whole lifetime, so the slot
/// uses interior mutability: the program can be swapped (e.g. after a
/// context restore) while buffers still reference it.
///
/// # Example
///
/// ```ignore
/// let shader = Shader::unlinked().with_label("scatter");
/// let buffer = VertexBuffer::new(&backend, &shader, 2, positions);
/// shader.set_program(Some(backend.create_program(&["aVertexPosition"])));
/// ```
#[derive(Debug, Default)]
pub struct Shader {
    program: Cell<Option<GpuProgram>>,
    label: Option<String>,
}

impl Shader {
    /// Create a shader slot holding a linked program.
    pub fn new(program: GpuProgram) -> Self {
        Self {
            program: Cell::new(Some(program)),
            label: None,
        }
    }

    /// Create a shader slot with no program.
    pub fn unlinked() -> Self {
        Self::default()
    }

    /// Set the debug label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Get the label, if set.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Replace the linked program.
    pub fn set_program(&self, program: Option<GpuProgram>) {
        self.program.set(program);
    }

    /// Remove and return the linked program.
    pub fn take_program(&self) -> Option<GpuProgram> {
        self.program.take()
    }

    /// Whether a program is linked.
    pub fn is_linked(&self) -> bool {
        self.program.get().is_some()
    }
}

impl ShaderProgram for Shader {
    fn program(&self) -> Option<GpuProgram> {
        self.program.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlinked_shader() {
        let shader = Shader::unlinked();
        assert!(!shader.is_linked());
        assert_eq!(shader.program(), None);
    }

    #[test]
    fn test_relink_through_shared_reference() {
        let shader = Shader::new(GpuProgram::Dummy { id: 1 }).with_label("points");
        let borrowed: &dyn ShaderProgram = &shader;
        shader.set_program(Some(GpuProgram::Dummy { id: 2 }));
        assert_eq!(borrowed.program(), Some(GpuProgram::Dummy { id: 2 }));
        assert_eq!(shader.take_program(), Some(GpuProgram::Dummy { id: 2 }));
        assert!(!shader.is_linked());
        assert_eq!(shader.label(), Some("points"));
    }

    #[test]
    fn test_option_program() {
        let none: Option<GpuProgram> = None;
        assert_eq!(none.program(), None);
        assert_eq!(GpuProgram::Dummy { id: 3 }.program(), Some(GpuProgram::Dummy { id: 3 }));
    }
}
