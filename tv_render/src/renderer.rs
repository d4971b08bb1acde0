//! Parallel-coordinates renderer with a per-tensor layout cache.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use tracing::{debug, trace};
use tv_tensor::{Tensor, TensorId};

use crate::layout::{axis_separation, tick_y, TensorLayout};
use crate::surface::{ColorMode, DrawingSurface, Hsla};

const PANEL_STROKE_WEIGHT: f32 = 3.0;
const TICK_DIAMETER: f32 = 18.0;
const MARKER_DIAMETER: f32 = 6.0;
const ELEMENT_STROKE_SCALE: f32 = 7.0;
const HUE_SPAN: f32 = 240.0;
const LIGHTNESS: f32 = 50.0;
const ALPHA: f32 = 100.0;

/// Size of the panel each tensor is drawn in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            width: 200.0,
            height: 200.0,
        }
    }
}

/// Where the geometry painted by [`TensorRenderer::draw`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutSource {
    /// Stored layout reused; the tensor's fingerprint was unchanged.
    Cached,
    /// Layout computed from scratch and stored.
    Fresh,
}

/// Cache counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub hits: u64,
    pub misses: u64,
}

/// Draws tensors as parallel-coordinates diagrams, reusing geometry while a
/// tensor's fingerprint stays the same.
///
/// Layouts are cached under a key `K`. The default keys on [`TensorId`];
/// hosts that replace tensors in fixed slots can key on the slot instead so
/// that the fingerprint alone decides when geometry is recomputed.
#[derive(Debug)]
pub struct TensorRenderer<K = TensorId> {
    config: RenderConfig,
    cache: HashMap<K, TensorLayout>,
    stats: RenderStats,
}

impl TensorRenderer<TensorId> {
    pub fn new(config: RenderConfig) -> Self {
        Self::keyed(config)
    }

    /// Paint `tensor`, caching its layout under the tensor's id.
    pub fn draw<S>(&mut self, surface: &mut S, tensor: &Tensor, x: f32, y: f32) -> LayoutSource
    where
        S: DrawingSurface + ?Sized,
    {
        self.draw_keyed(surface, tensor.id(), tensor, x, y)
    }
}

impl Default for TensorRenderer<TensorId> {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

impl<K> TensorRenderer<K>
where
    K: Copy + Eq + Hash + fmt::Debug,
{
    /// Renderer caching under a caller-chosen key type.
    pub fn keyed(config: RenderConfig) -> Self {
        TensorRenderer {
            config,
            cache: HashMap::new(),
            stats: RenderStats::default(),
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn stats(&self) -> RenderStats {
        self.stats
    }

    /// Number of cached layouts.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Cached layout for `key`, if any.
    pub fn cached(&self, key: K) -> Option<&TensorLayout> {
        self.cache.get(&key)
    }

    /// Drop every cached layout.
    pub fn invalidate_all(&mut self) {
        debug!(entries = self.cache.len(), "render cache cleared");
        self.cache.clear();
    }

    /// Alias of [`TensorRenderer::invalidate_all`], used when the tensor set changes.
    pub fn reset(&mut self) {
        self.invalidate_all();
    }

    /// Drop the cached layout stored under `key`.
    pub fn evict(&mut self, key: K) -> Option<TensorLayout> {
        self.cache.remove(&key)
    }

    /// Paint `tensor` with its panel's top-left corner at `(x, y)`.
    ///
    /// On a cache hit the stored layout is painted at the anchor it was
    /// computed for; `(x, y)` only takes effect when the layout is recomputed.
    pub fn draw_keyed<S>(
        &mut self,
        surface: &mut S,
        key: K,
        tensor: &Tensor,
        x: f32,
        y: f32,
    ) -> LayoutSource
    where
        S: DrawingSurface + ?Sized,
    {
        let fingerprint = tensor.fingerprint();

        if let Some(layout) = self.cache.get(&key) {
            if layout.fingerprint == fingerprint {
                trace!(?key, "render cache hit");
                self.stats.hits += 1;
                paint(&self.config, surface, layout);
                return LayoutSource::Cached;
            }
            debug!(?key, old = %layout.fingerprint, new = %fingerprint, "render cache stale");
        }

        self.stats.misses += 1;
        let layout = TensorLayout::compute(
            tensor,
            fingerprint,
            x,
            y,
            self.config.width,
            self.config.height,
        );
        paint(&self.config, surface, &layout);
        self.cache.insert(key, layout);
        LayoutSource::Fresh
    }
}

fn paint<S>(config: &RenderConfig, surface: &mut S, layout: &TensorLayout)
where
    S: DrawingSurface + ?Sized,
{
    let RenderConfig { width, height } = *config;

    surface.color_mode(ColorMode::HSL);
    surface.fill(Hsla::BLACK);
    surface.stroke(Hsla::WHITE);
    surface.stroke_weight(PANEL_STROKE_WEIGHT);
    surface.rect(layout.x, layout.y, width, height);

    // axes with one tick per coordinate
    let dims = layout.shape.ndim();
    let sep_x = axis_separation(width, dims);
    let x0 = layout.x + sep_x / 2.0;
    for (d, &size) in layout.shape.dims().iter().enumerate() {
        let ax = x0 + d as f32 * sep_x;
        surface.line(ax, layout.y, ax, layout.y + height);
        for i in 0..size {
            surface.circle(ax, tick_y(layout.y, height, size, i), TICK_DIAMETER);
        }
    }

    for element in &layout.elements {
        let ratio = layout.ratio(element);
        let hue = HUE_SPAN * element.index as f32 / layout.num_elements as f32;
        let color = Hsla::new(hue, 100.0 * ratio, LIGHTNESS, ALPHA);

        surface.stroke_weight(ELEMENT_STROKE_SCALE * ratio);
        surface.stroke(color);
        surface.fill(color);

        for segment in &element.segments {
            surface.circle(segment.x_start, segment.y_start, MARKER_DIAMETER * ratio);
            if let Some((x_end, y_end)) = segment.end {
                surface.line(segment.x_start, segment.y_start, x_end, y_end);
                surface.circle(x_end, y_end, MARKER_DIAMETER);
            }
        }
    }
}
