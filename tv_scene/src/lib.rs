//! # tv_scene - Tensor Visualization Scene
//!
//! Drives the visualizer: a small arena of random tensors, one text panel per
//! tensor, and a randomize action that moves every element along a random
//! velocity for a fixed number of seconds while the host calls
//! [`Scene::frame`] at its frame rate.
//!
//! ```
//! use tv_render::RecordingSurface;
//! use tv_scene::{Scene, SceneConfig};
//!
//! let mut scene = Scene::new(SceneConfig::seeded(1)).unwrap();
//! scene.generate();
//! scene.randomize();
//!
//! let mut surface = RecordingSurface::new();
//! let report = scene.frame(0.05, &mut surface).unwrap();
//! assert!(report.animated);
//! assert_eq!(report.fresh + report.cached, 4);
//! ```

pub mod config;
pub mod error;
pub mod scene;

pub use config::SceneConfig;
pub use error::{SceneError, SceneResult};
pub use scene::{Animation, FrameReport, Scene, TensorHandle};
