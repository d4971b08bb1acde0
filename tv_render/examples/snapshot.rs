//! Render a fixed 3-dimensional tensor and print the SVG to stdout.
//!
//! Run with `cargo run -p tv_render --example snapshot > snapshot.svg`.

use tv_render::{DrawingSurface, Hsla, RenderConfig, SvgSurface, TensorRenderer};
use tv_tensor::prelude::*;

fn main() {
    let mut ids = TensorIds::new();

    // A 2x3x2 tensor whose magnitudes grow along the flat index.
    let data: Vec<f32> = (0..12)
        .map(|i| {
            let v = (i as f32 + 1.0) * 70.0;
            if i % 2 == 0 {
                v
            } else {
                -v
            }
        })
        .collect();
    let tensor = Tensor::new(&mut ids, Shape::new(vec![2, 3, 2]), data);
    eprintln!("{}", tensor.pretty());

    let mut surface = SvgSurface::new(240.0, 240.0);
    surface.background(Hsla::TEAL);

    let mut renderer = TensorRenderer::new(RenderConfig::default());
    renderer.draw(&mut surface, &tensor, 20.0, 20.0);

    print!("{}", surface.finish());
}
