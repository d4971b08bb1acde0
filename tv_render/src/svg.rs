//! SVG output surface.
//!
//! SVG understands `hsla()` colors directly, so no color-space conversion is
//! needed; channels are only rescaled from the current [`ColorMode`].

use std::fmt::Write;

use crate::surface::{ColorMode, DrawingSurface, Hsla};

/// Accumulates draw calls into an SVG document of a fixed size.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: f32,
    height: f32,
    mode: ColorMode,
    fill: Hsla,
    stroke: Hsla,
    stroke_weight: f32,
    body: String,
}

impl SvgSurface {
    pub fn new(width: f32, height: f32) -> Self {
        SvgSurface {
            width,
            height,
            mode: ColorMode::HSL,
            fill: Hsla::WHITE,
            stroke: Hsla::BLACK,
            stroke_weight: 1.0,
            body: String::new(),
        }
    }

    /// Complete SVG document.
    pub fn finish(&self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n",
            w = self.width,
            h = self.height,
            body = self.body
        )
    }

    fn css(&self, c: Hsla) -> String {
        let m = self.mode;
        format!(
            "hsla({:.1}, {:.1}%, {:.1}%, {:.3})",
            c.h * 360.0 / m.hue_max,
            c.s * 100.0 / m.saturation_max,
            c.l * 100.0 / m.lightness_max,
            c.a / m.alpha_max
        )
    }

    fn paint_attrs(&self, filled: bool) -> String {
        let fill = if filled {
            self.css(self.fill)
        } else {
            "none".to_string()
        };
        format!(
            "fill=\"{}\" stroke=\"{}\" stroke-width=\"{:.2}\"",
            fill,
            self.css(self.stroke),
            self.stroke_weight
        )
    }
}

impl DrawingSurface for SvgSurface {
    fn color_mode(&mut self, mode: ColorMode) {
        self.mode = mode;
    }

    fn background(&mut self, color: Hsla) {
        self.body.clear();
        let _ = writeln!(
            self.body,
            "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
            self.width,
            self.height,
            self.css(color)
        );
    }

    fn fill(&mut self, color: Hsla) {
        self.fill = color;
    }

    fn stroke(&mut self, color: Hsla) {
        self.stroke = color;
    }

    fn stroke_weight(&mut self, weight: f32) {
        self.stroke_weight = weight;
    }

    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let attrs = self.paint_attrs(true);
        let _ = writeln!(
            self.body,
            "<rect x=\"{x:.2}\" y=\"{y:.2}\" width=\"{width:.2}\" height=\"{height:.2}\" {attrs}/>"
        );
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        let attrs = self.paint_attrs(false);
        let _ = writeln!(
            self.body,
            "<line x1=\"{x1:.2}\" y1=\"{y1:.2}\" x2=\"{x2:.2}\" y2=\"{y2:.2}\" {attrs}/>"
        );
    }

    fn circle(&mut self, x: f32, y: f32, diameter: f32) {
        let attrs = self.paint_attrs(true);
        let r = diameter / 2.0;
        let _ = writeln!(
            self.body,
            "<circle cx=\"{x:.2}\" cy=\"{y:.2}\" r=\"{r:.2}\" {attrs}/>"
        );
    }
}
