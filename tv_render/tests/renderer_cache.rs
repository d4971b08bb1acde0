//! Render cache behaviour: reuse, invalidation and painting.

use tv_render::{DrawCommand, Hsla, LayoutSource, RecordingSurface, RenderConfig, TensorRenderer};
use tv_tensor::prelude::*;

fn draw(renderer: &mut TensorRenderer, t: &Tensor, x: f32, y: f32) -> (LayoutSource, Vec<DrawCommand>) {
    let mut surface = RecordingSurface::new();
    let source = renderer.draw(&mut surface, t, x, y);
    (source, surface.take())
}

#[test]
fn test_unchanged_tensor_reuses_layout() {
    let mut ids = TensorIds::new();
    let t = Tensor::new(&mut ids, Shape::new(vec![2, 3]), vec![1.0, -20.0, 300.0, 4.0, 5.5, -6.0]);
    let mut renderer = TensorRenderer::new(RenderConfig::default());

    let (first, first_cmds) = draw(&mut renderer, &t, 20.0, 20.0);
    let (second, second_cmds) = draw(&mut renderer, &t, 20.0, 20.0);

    assert_eq!(first, LayoutSource::Fresh);
    assert_eq!(second, LayoutSource::Cached);
    assert_eq!(first_cmds, second_cmds);
    assert_eq!(renderer.stats().hits, 1);
    assert_eq!(renderer.stats().misses, 1);
    assert_eq!(renderer.len(), 1);
}

#[test]
fn test_fingerprint_change_forces_recompute() {
    let mut ids = TensorIds::new();
    let mut renderer: TensorRenderer<usize> = TensorRenderer::keyed(RenderConfig::default());
    let mut surface = RecordingSurface::new();
    const SLOT: usize = 0;

    let t = Tensor::new(&mut ids, Shape::new(vec![3]), vec![123.4, 55.0, -7.0]);
    assert_eq!(renderer.draw_keyed(&mut surface, SLOT, &t, 0.0, 0.0), LayoutSource::Fresh);

    // Values moved but every leading digit held.
    let nudged = Tensor::new(&mut ids, Shape::new(vec![3]), vec![129.9, 59.0, -7.9]);
    assert_eq!(renderer.draw_keyed(&mut surface, SLOT, &nudged, 0.0, 0.0), LayoutSource::Cached);

    // Every leading digit changes.
    let shifted = Tensor::new(&mut ids, Shape::new(vec![3]), vec![223.4, 65.0, -8.0]);
    assert_eq!(renderer.draw_keyed(&mut surface, SLOT, &shifted, 0.0, 0.0), LayoutSource::Fresh);
    assert_eq!(renderer.cached(SLOT).unwrap().fingerprint, shifted.fingerprint());

    // A reshape with identical values is stale too.
    let reshaped = Tensor::new(&mut ids, Shape::new(vec![3, 1]), vec![223.4, 65.0, -8.0]);
    assert_eq!(renderer.draw_keyed(&mut surface, SLOT, &reshaped, 0.0, 0.0), LayoutSource::Fresh);
    assert_eq!(renderer.len(), 1);
}

#[test]
fn test_default_renderer_keys_on_tensor_id() {
    let mut ids = TensorIds::new();
    let t = Tensor::new(&mut ids, Shape::new(vec![2]), vec![1.0, 2.0]);
    let mut renderer = TensorRenderer::new(RenderConfig::default());
    draw(&mut renderer, &t, 0.0, 0.0);

    // A clone keeps the id, arithmetic results get new ones.
    let same_id = t.clone();
    assert_eq!(draw(&mut renderer, &same_id, 0.0, 0.0).0, LayoutSource::Cached);

    let scaled = t.mult_scalar(3.0, &mut ids);
    assert_eq!(draw(&mut renderer, &scaled, 0.0, 0.0).0, LayoutSource::Fresh);
    assert_eq!(renderer.len(), 2);
}

#[test]
fn test_reset_forces_recompute() {
    let mut ids = TensorIds::new();
    let t = Tensor::new(&mut ids, Shape::new(vec![2, 2]), vec![1.0, 2.0, 3.0, 4.0]);
    let mut renderer = TensorRenderer::new(RenderConfig::default());

    assert_eq!(draw(&mut renderer, &t, 0.0, 0.0).0, LayoutSource::Fresh);
    assert_eq!(draw(&mut renderer, &t, 0.0, 0.0).0, LayoutSource::Cached);
    renderer.reset();
    assert!(renderer.is_empty());
    assert_eq!(draw(&mut renderer, &t, 0.0, 0.0).0, LayoutSource::Fresh);
}

#[test]
fn test_cache_hit_keeps_original_anchor() {
    let mut ids = TensorIds::new();
    let t = Tensor::new(&mut ids, Shape::new(vec![2]), vec![1.0, 2.0]);
    let mut renderer = TensorRenderer::new(RenderConfig::default());

    draw(&mut renderer, &t, 20.0, 20.0);
    let (source, cmds) = draw(&mut renderer, &t, 300.0, 300.0);

    assert_eq!(source, LayoutSource::Cached);
    assert!(cmds.contains(&DrawCommand::Rect { x: 20.0, y: 20.0, width: 200.0, height: 200.0 }));

    renderer.invalidate_all();
    let (_, cmds) = draw(&mut renderer, &t, 300.0, 300.0);
    assert!(cmds.contains(&DrawCommand::Rect { x: 300.0, y: 300.0, width: 200.0, height: 200.0 }));
}

#[test]
fn test_unit_matrix_paints_one_path() {
    let mut ids = TensorIds::new();
    let t = Tensor::new(&mut ids, Shape::new(vec![1, 1]), vec![5.0]);
    let mut renderer = TensorRenderer::new(RenderConfig::default());
    let mut surface = RecordingSurface::new();
    renderer.draw(&mut surface, &t, 0.0, 0.0);

    // two axes plus the single connecting segment
    assert_eq!(surface.lines(), 3);
    // two ticks, leading marker on each axis, trailing marker on the second
    assert_eq!(surface.circles(), 5);
    assert!(surface
        .commands()
        .contains(&DrawCommand::Line { x1: 50.0, y1: 100.0, x2: 150.0, y2: 100.0 }));
    assert!(surface
        .commands()
        .contains(&DrawCommand::Fill(Hsla::new(0.0, 100.0, 50.0, 100.0))));
}

#[test]
fn test_color_and_weight_follow_magnitude() {
    let mut ids = TensorIds::new();
    let t = Tensor::new(&mut ids, Shape::new(vec![2]), vec![-4.0, 2.0]);
    let mut renderer = TensorRenderer::new(RenderConfig::default());
    let mut surface = RecordingSurface::new();
    renderer.draw(&mut surface, &t, 0.0, 0.0);

    let cmds = surface.commands();
    // smaller element (index 1) painted first: hue 120, half saturation, half weight
    let small = cmds
        .iter()
        .position(|c| *c == DrawCommand::Stroke(Hsla::new(120.0, 50.0, 50.0, 100.0)))
        .unwrap();
    let large = cmds
        .iter()
        .position(|c| *c == DrawCommand::Stroke(Hsla::new(0.0, 100.0, 50.0, 100.0)))
        .unwrap();
    assert!(small < large);
    assert_eq!(cmds[small - 1], DrawCommand::StrokeWeight(3.5));
    assert_eq!(cmds[large - 1], DrawCommand::StrokeWeight(7.0));
}

#[test]
fn test_rendering_is_deterministic() {
    let mut ids = TensorIds::new();
    let t = Tensor::new(
        &mut ids,
        Shape::new(vec![2, 3, 2]),
        (0..12).map(|i| (i as f32 - 5.5) * 17.0).collect(),
    );
    let (_, a) = draw(&mut TensorRenderer::new(RenderConfig::default()), &t, 20.0, 276.0);
    let (_, b) = draw(&mut TensorRenderer::new(RenderConfig::default()), &t, 20.0, 276.0);
    assert_eq!(a, b);
}
