//! Common utilities for vertex buffer integration tests.
//!
//! The dummy backend stands in for a GL context and records every call,
//! so tests can assert on allocations, bindings and draw parameters.

#![allow(dead_code)]

use plotgl_graphics::{DummyBackend, Shader};

/// Attribute holding vertex positions in the test program.
pub const POSITION: &str = "aVertexPosition";

/// Attribute holding vertex colors in the test program.
pub const COLOR: &str = "aColor";

/// Install a test logger once per process.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Dummy backend plus a shader slot.
pub struct TestContext {
    pub backend: DummyBackend,
    pub shader: Shader,
}

impl TestContext {
    /// Context with a program exposing [`POSITION`] (location 0) and [`COLOR`] (location 1).
    pub fn new() -> Self {
        init_logging();
        let backend = DummyBackend::new();
        let shader = Shader::new(backend.create_program(&[POSITION, COLOR])).with_label("test");
        Self { backend, shader }
    }

    /// Context whose shader has no linked program.
    pub fn unlinked() -> Self {
        init_logging();
        Self {
            backend: DummyBackend::new(),
            shader: Shader::unlinked(),
        }
    }
}

/// Unit square as four 2D vertices.
pub fn quad() -> Vec<f32> {
    vec![0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0]
}

/// A payload of `vertices` vertices with `components` floats each.
pub fn generate_payload(vertices: usize, components: usize) -> Vec<f32> {
    (0..vertices * components).map(|i| i as f32 * 0.5).collect()
}
