//! Scene configuration.

use std::ops::RangeInclusive;

use tv_render::RenderConfig;

use crate::error::{SceneError, SceneResult};

/// Everything that shapes a scene: what gets generated, how the randomize
/// animation behaves, and where panels are placed.
#[derive(Debug, Clone)]
pub struct SceneConfig {
    /// Tensors created by each generate.
    pub tensor_count: usize,
    /// Rank of generated tensors.
    pub rank_range: RangeInclusive<usize>,
    /// Size of every dimension of generated tensors.
    pub dim_range: RangeInclusive<usize>,
    /// Generated values are uniform in `[-value_limit, value_limit)`.
    pub value_limit: f32,
    /// Randomize velocities are uniform in `[-speed, speed)` per second.
    pub randomize_speed: f32,
    /// Seconds the randomize animation runs for.
    pub randomize_duration: f32,
    /// Top-left corner of the first panel.
    pub origin: (f32, f32),
    /// Distance between panel anchors.
    pub spacing: f32,
    /// Panels per row.
    pub columns: usize,
    /// Target frames per second for hosts that drive the scene.
    pub frame_rate: u32,
    /// Canvas size `(width, height)`.
    pub canvas: (f32, f32),
    pub render: RenderConfig,
    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        SceneConfig {
            tensor_count: 4,
            rank_range: 1..=6,
            dim_range: 1..=5,
            value_limit: 999.0,
            randomize_speed: 600.0,
            randomize_duration: 8.0,
            origin: (20.0, 20.0),
            spacing: 256.0,
            columns: 1,
            frame_rate: 20,
            canvas: (256.0, 1024.0),
            render: RenderConfig::default(),
            seed: None,
        }
    }
}

impl SceneConfig {
    /// Default configuration with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        SceneConfig {
            seed: Some(seed),
            ..SceneConfig::default()
        }
    }

    /// Seconds per frame at the target frame rate.
    pub fn frame_interval(&self) -> f32 {
        1.0 / self.frame_rate as f32
    }

    /// Frames needed to play a full randomize animation at the target rate.
    pub fn animation_frames(&self) -> usize {
        (self.randomize_duration * self.frame_rate as f32).ceil() as usize
    }

    pub fn validate(&self) -> SceneResult<()> {
        let invalid = |msg: &str| Err(SceneError::InvalidConfig(msg.to_string()));

        if self.rank_range.is_empty() {
            return invalid("rank_range is empty");
        }
        if self.dim_range.is_empty() || *self.dim_range.start() == 0 {
            return invalid("dim_range must be non-empty and start at 1 or more");
        }
        if !(self.value_limit > 0.0 && self.value_limit.is_finite()) {
            return invalid("value_limit must be positive and finite");
        }
        if !(self.randomize_speed > 0.0 && self.randomize_speed.is_finite()) {
            return invalid("randomize_speed must be positive and finite");
        }
        if !(self.randomize_duration >= 0.0 && self.randomize_duration.is_finite()) {
            return invalid("randomize_duration must be non-negative and finite");
        }
        if self.columns == 0 {
            return invalid("columns must be at least 1");
        }
        if self.frame_rate == 0 {
            return invalid("frame_rate must be at least 1");
        }
        if self.render.width <= 0.0 || self.render.height <= 0.0 {
            return invalid("render panel must have a positive size");
        }
        Ok(())
    }
}
