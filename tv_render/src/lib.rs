//! # tv_render - Parallel-Coordinates Tensor Renderer
//!
//! Paints a [`tv_tensor::Tensor`] as a parallel-coordinates diagram: every
//! dimension is a vertical axis with one tick per coordinate, and every
//! element is a path through its coordinate on each axis, colored by its flat
//! index and weighted by its magnitude.
//!
//! Layouts are cached per tensor id and reused for as long as the tensor's
//! [`tv_tensor::Fingerprint`] does not change.
//!
//! ## Overview
//!
//! - [`DrawingSurface`] - trait a host implements to receive draw calls
//! - [`TensorRenderer`] - layout cache plus paint routine
//! - [`TensorLayout`] - one cache entry
//! - [`RecordingSurface`], [`SvgSurface`] - in-crate surfaces
//!
//! ## Example
//!
//! ```
//! use tv_render::{LayoutSource, RecordingSurface, RenderConfig, TensorRenderer};
//! use tv_tensor::prelude::*;
//!
//! let mut ids = TensorIds::new();
//! let t = Tensor::new(&mut ids, Shape::new(vec![2, 2]), vec![1.0, -2.0, 3.0, 4.0]);
//!
//! let mut renderer = TensorRenderer::new(RenderConfig::default());
//! let mut surface = RecordingSurface::new();
//! assert_eq!(renderer.draw(&mut surface, &t, 20.0, 20.0), LayoutSource::Fresh);
//! assert_eq!(renderer.draw(&mut surface, &t, 20.0, 20.0), LayoutSource::Cached);
//! ```

pub mod layout;
pub mod recording;
pub mod renderer;
pub mod surface;
pub mod svg;

pub use layout::{ElementLayout, Segment, TensorLayout};
pub use recording::{DrawCommand, RecordingSurface};
pub use renderer::{LayoutSource, RenderConfig, RenderStats, TensorRenderer};
pub use surface::{ColorMode, DrawingSurface, Hsla};
pub use svg::SvgSurface;
