//! DrawingSurface trait - the seam between the renderer and whatever host paints pixels.

/// Ranges the color channels are expressed in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMode {
    pub hue_max: f32,
    pub saturation_max: f32,
    pub lightness_max: f32,
    pub alpha_max: f32,
}

impl ColorMode {
    /// Hue in degrees `[0, 360)`, saturation/lightness/alpha in `[0, 100]`.
    pub const HSL: ColorMode = ColorMode {
        hue_max: 360.0,
        saturation_max: 100.0,
        lightness_max: 100.0,
        alpha_max: 100.0,
    };
}

impl Default for ColorMode {
    fn default() -> Self {
        ColorMode::HSL
    }
}

/// A hue/saturation/lightness/alpha color, interpreted in the surface's current [`ColorMode`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsla {
    pub h: f32,
    pub s: f32,
    pub l: f32,
    pub a: f32,
}

impl Hsla {
    pub const fn new(h: f32, s: f32, l: f32, a: f32) -> Self {
        Hsla { h, s, l, a }
    }

    /// Opaque color (alpha 100).
    pub const fn opaque(h: f32, s: f32, l: f32) -> Self {
        Hsla::new(h, s, l, 100.0)
    }

    pub const BLACK: Hsla = Hsla::opaque(0.0, 0.0, 0.0);
    pub const WHITE: Hsla = Hsla::opaque(0.0, 0.0, 100.0);
    pub const TEAL: Hsla = Hsla::opaque(180.0, 100.0, 25.1);
}

/// Primitive drawing calls a host must provide.
///
/// Coordinates are device independent; `fill`, `stroke` and `stroke_weight`
/// set state used by the shape calls that follow.
pub trait DrawingSurface {
    fn color_mode(&mut self, mode: ColorMode);

    /// Clear the whole surface to `color`.
    fn background(&mut self, color: Hsla);

    fn fill(&mut self, color: Hsla);

    fn stroke(&mut self, color: Hsla);

    fn stroke_weight(&mut self, weight: f32);

    /// Axis-aligned rectangle with its top-left corner at `(x, y)`.
    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32);

    /// Circle centered at `(x, y)`.
    fn circle(&mut self, x: f32, y: f32, diameter: f32);
}
