//! glow GPU backend implementation.
//!
//! This backend drives an OpenGL 3.3+, OpenGL ES 3.0 or WebGL2 context
//! through `glow`. The caller creates the `glow::Context` (from a window
//! loader or a canvas) and hands ownership to [`GlowBackend`].

use glow::HasContext;

use crate::error::GraphicsError;
use crate::types::{BufferUsage, DrawMode, VertexAttribLayout};

use super::{GpuBuffer, GpuProgram, RenderingContext};

/// glow-based GPU backend.
pub struct GlowBackend {
    gl: glow::Context,
}

impl std::fmt::Debug for GlowBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlowBackend").finish_non_exhaustive()
    }
}

impl GlowBackend {
    /// Wrap an existing GL context.
    pub fn new(gl: glow::Context) -> Self {
        Self { gl }
    }

    /// Access the underlying GL context, e.g. to compile shaders.
    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }

    /// Wrap a program linked through [`GlowBackend::gl`].
    pub fn program(program: <glow::Context as HasContext>::Program) -> GpuProgram {
        GpuProgram::Glow(program)
    }
}

fn convert_draw_mode(mode: DrawMode) -> u32 {
    match mode {
        DrawMode::Points => glow::POINTS,
        DrawMode::Lines => glow::LINES,
        DrawMode::LineLoop => glow::LINE_LOOP,
        DrawMode::LineStrip => glow::LINE_STRIP,
        DrawMode::Triangles => glow::TRIANGLES,
        DrawMode::TriangleStrip => glow::TRIANGLE_STRIP,
        DrawMode::TriangleFan => glow::TRIANGLE_FAN,
    }
}

fn convert_usage(usage: BufferUsage) -> u32 {
    match usage {
        BufferUsage::StaticDraw => glow::STATIC_DRAW,
        BufferUsage::DynamicDraw => glow::DYNAMIC_DRAW,
        BufferUsage::StreamDraw => glow::STREAM_DRAW,
    }
}

fn glow_buffer(buffer: &GpuBuffer) -> Option<<glow::Context as HasContext>::Buffer> {
    match buffer {
        GpuBuffer::Glow(buffer) => Some(*buffer),
        other => {
            log::warn!("GlowBackend: ignoring foreign buffer {other:?}");
            None
        }
    }
}

impl RenderingContext for GlowBackend {
    fn name(&self) -> &'static str {
        "glow"
    }

    fn create_buffer(&self) -> Result<GpuBuffer, GraphicsError> {
        let buffer = unsafe { self.gl.create_buffer() }.map_err(|e| {
            GraphicsError::ResourceCreationFailed(format!("glCreateBuffer failed: {e}"))
        })?;
        Ok(GpuBuffer::Glow(buffer))
    }

    fn bind_array_buffer(&self, buffer: Option<&GpuBuffer>) {
        let buffer = buffer.and_then(glow_buffer);
        unsafe {
            self.gl.bind_buffer(glow::ARRAY_BUFFER, buffer);
        }
    }

    fn upload_array_buffer(&self, data: &[f32], usage: BufferUsage) {
        let bytes: &[u8] = bytemuck::cast_slice(data);
        unsafe {
            self.gl
                .buffer_data_u8_slice(glow::ARRAY_BUFFER, bytes, convert_usage(usage));
        }
    }

    fn attrib_location(&self, program: &GpuProgram, name: &str) -> Option<u32> {
        match program {
            GpuProgram::Glow(program) => unsafe { self.gl.get_attrib_location(*program, name) },
            other => {
                log::warn!("GlowBackend: ignoring foreign program {other:?}");
                None
            }
        }
    }

    fn enable_vertex_attrib(&self, location: u32, layout: &VertexAttribLayout) {
        let (Ok(size), Ok(stride), Ok(offset)) = (
            i32::try_from(layout.components),
            i32::try_from(layout.stride),
            i32::try_from(layout.offset),
        ) else {
            log::error!("GlowBackend: attribute layout {layout:?} out of GL range");
            return;
        };
        unsafe {
            self.gl.enable_vertex_attrib_array(location);
            self.gl.vertex_attrib_pointer_f32(
                location,
                size,
                glow::FLOAT,
                layout.normalized,
                stride,
                offset,
            );
        }
    }

    fn draw_arrays(
        &self,
        mode: DrawMode,
        first: usize,
        count: usize,
    ) -> Result<(), GraphicsError> {
        let (Ok(gl_first), Ok(gl_count)) = (i32::try_from(first), i32::try_from(count)) else {
            return Err(GraphicsError::InvalidParameter(format!(
                "draw range {first}+{count} exceeds the GL integer range"
            )));
        };
        unsafe {
            self.gl.draw_arrays(convert_draw_mode(mode), gl_first, gl_count);
        }
        Ok(())
    }

    fn delete_buffer(&self, buffer: GpuBuffer) {
        if let Some(buffer) = glow_buffer(&buffer) {
            unsafe {
                self.gl.delete_buffer(buffer);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_mode_conversion() {
        assert_eq!(convert_draw_mode(DrawMode::Points), glow::POINTS);
        assert_eq!(convert_draw_mode(DrawMode::TriangleFan), glow::TRIANGLE_FAN);
        assert_eq!(convert_draw_mode(DrawMode::LineStrip), glow::LINE_STRIP);
    }

    #[test]
    fn test_usage_conversion() {
        assert_eq!(convert_usage(BufferUsage::StaticDraw), glow::STATIC_DRAW);
        assert_eq!(convert_usage(BufferUsage::StreamDraw), glow::STREAM_DRAW);
    }

    #[test]
    fn test_foreign_buffer_is_ignored() {
        assert_eq!(glow_buffer(&GpuBuffer::Dummy { id: 1 }), None);
    }
}
