use criterion::{Criterion, black_box, criterion_group, criterion_main};

use plotgl_graphics::{DrawMode, DrawRange, DummyBackend, Shader, VertexBuffer};

const POSITION: &str = "aVertexPosition";

fn payload(floats: usize) -> Vec<f32> {
    (0..floats).map(|i| i as f32).collect()
}

// ---------------------------------------------------------------------------
// Range normalization
// ---------------------------------------------------------------------------

fn bench_draw_range(c: &mut Criterion) {
    c.bench_function("draw_range_from_elements", |b| {
        b.iter(|| {
            black_box(DrawRange::from_elements(
                black_box(Some(-5)),
                black_box(Some(1_000_100)),
                black_box(1_000_000),
                black_box(4),
            ))
        });
    });
}

// ---------------------------------------------------------------------------
// Build and render through the dummy backend
// ---------------------------------------------------------------------------

fn bench_build_1m_floats(c: &mut Criterion) {
    let backend = DummyBackend::new();
    let shader = Shader::new(backend.create_program(&[POSITION]));
    let mut buffer = VertexBuffer::new(&backend, &shader, 2, payload(1_000_000));

    c.bench_function("vertex_buffer_build_1m_floats", |b| {
        b.iter(|| {
            black_box(buffer.build());
            backend.clear_commands();
        });
    });
    buffer.destroy();
}

fn bench_bind_and_render(c: &mut Criterion) {
    let backend = DummyBackend::new();
    let shader = Shader::new(backend.create_program(&[POSITION]));
    let mut buffer = VertexBuffer::new(&backend, &shader, 2, payload(4096));
    buffer.build();

    c.bench_function("vertex_buffer_bind_render_64_ranges", |b| {
        b.iter(|| {
            for i in 0..64 {
                buffer.bind(POSITION);
                black_box(buffer.render(Some(i * 64), Some(i * 64 + 64), Some(DrawMode::LineStrip)));
            }
            backend.clear_commands();
        });
    });
    buffer.destroy();
}

criterion_group!(
    benches,
    bench_draw_range,
    bench_build_1m_floats,
    bench_bind_and_render
);
criterion_main!(benches);
