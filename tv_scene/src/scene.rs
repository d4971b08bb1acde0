//! The scene driver: owns the active tensors and their text panels, runs the
//! generate and randomize actions, and draws every frame.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};
use tv_render::{DrawingSurface, LayoutSource, TensorRenderer};
use tv_tensor::{Shape, Tensor, TensorIds};

use crate::config::SceneConfig;
use crate::error::{SceneError, SceneResult};

/// Index of a tensor slot in the scene.
///
/// Handles stay valid until the next generate; the renderer caches layouts
/// per handle so a slot keeps its geometry while its tensor is replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TensorHandle(usize);

impl TensorHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug)]
struct Slot {
    tensor: Tensor,
    text: String,
}

impl Slot {
    fn new(tensor: Tensor) -> Self {
        let text = tensor.pretty();
        Slot { tensor, text }
    }
}

/// A running randomize animation.
#[derive(Debug)]
pub struct Animation {
    /// Per-slot velocity, in value units per second.
    velocities: Vec<Tensor>,
    /// Seconds left.
    remaining: f32,
}

impl Animation {
    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn velocities(&self) -> &[Tensor] {
        &self.velocities
    }
}

/// What happened during one [`Scene::frame`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Tensor values were advanced by the animation.
    pub animated: bool,
    /// Panels whose layout was recomputed.
    pub fresh: usize,
    /// Panels painted from the render cache.
    pub cached: usize,
}

pub struct Scene {
    config: SceneConfig,
    ids: TensorIds,
    rng: StdRng,
    slots: Vec<Slot>,
    animation: Option<Animation>,
    renderer: TensorRenderer<TensorHandle>,
}

impl Scene {
    /// Create an empty scene. Call [`Scene::generate`] to populate it.
    pub fn new(config: SceneConfig) -> SceneResult<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let renderer = TensorRenderer::keyed(config.render);
        Ok(Scene {
            config,
            ids: TensorIds::new(),
            rng,
            slots: Vec::new(),
            animation: None,
            renderer,
        })
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn renderer(&self) -> &TensorRenderer<TensorHandle> {
        &self.renderer
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn handles(&self) -> impl Iterator<Item = TensorHandle> {
        (0..self.slots.len()).map(TensorHandle)
    }

    pub fn tensor(&self, handle: TensorHandle) -> SceneResult<&Tensor> {
        self.slot(handle).map(|s| &s.tensor)
    }

    /// Text panel contents for `handle`: the tensor's nested rendering.
    pub fn text(&self, handle: TensorHandle) -> SceneResult<&str> {
        self.slot(handle).map(|s| s.text.as_str())
    }

    /// All text panels, in slot order.
    pub fn text_panels(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(|s| s.text.as_str())
    }

    pub fn animation(&self) -> Option<&Animation> {
        self.animation.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Replace all tensors with `tensor_count` new random ones.
    ///
    /// Cancels a running randomize animation and clears the render cache.
    pub fn generate(&mut self) {
        self.slots.clear();
        self.animation = None;

        for _ in 0..self.config.tensor_count {
            let rank = self.rng.gen_range(self.config.rank_range.clone());
            let dims: Vec<usize> = (0..rank)
                .map(|_| self.rng.gen_range(self.config.dim_range.clone()))
                .collect();
            let shape = Shape::new(dims);
            let limit = self.config.value_limit;
            let data = (0..shape.numel())
                .map(|_| self.rng.gen_range(-limit..limit))
                .collect();

            let tensor = Tensor::new(&mut self.ids, shape, data);
            tensor.print();
            self.slots.push(Slot::new(tensor));
        }

        self.renderer.reset();
        debug!(tensors = self.slots.len(), "scene generated");
    }

    /// Append a tensor built from `shape` and `data` (resized as in [`Tensor::new`]).
    ///
    /// While a randomize is running the new tensor gets its own random
    /// velocity and moves with the others for the rest of the countdown.
    pub fn push(&mut self, shape: impl Into<Shape>, data: Vec<f32>) -> TensorHandle {
        let tensor = Tensor::new(&mut self.ids, shape, data);
        if let Some(animation) = self.animation.as_mut() {
            let velocity = random_velocity(
                &mut self.rng,
                &mut self.ids,
                tensor.shape(),
                self.config.randomize_speed,
            );
            animation.velocities.push(velocity);
        }
        self.slots.push(Slot::new(tensor));
        TensorHandle(self.slots.len() - 1)
    }

    /// Give every tensor a random per-element velocity and (re)start the countdown.
    pub fn randomize(&mut self) {
        let speed = self.config.randomize_speed;
        let velocities = self
            .slots
            .iter()
            .map(|slot| random_velocity(&mut self.rng, &mut self.ids, slot.tensor.shape(), speed))
            .collect();

        self.animation = Some(Animation {
            velocities,
            remaining: self.config.randomize_duration,
        });
        debug!(
            duration = self.config.randomize_duration,
            "randomize started"
        );
    }

    /// Advance the animation by `dt` seconds. Returns whether values changed.
    ///
    /// Each tensor moves by `velocity * dt`; once the countdown is used up the
    /// animation ends and values hold.
    pub fn update(&mut self, dt: f32) -> SceneResult<bool> {
        let Some(animation) = self.animation.as_mut() else {
            return Ok(false);
        };
        if animation.remaining <= 0.0 {
            self.animation = None;
            debug!("randomize finished");
            return Ok(false);
        }

        let dt = dt.max(0.0);
        for (slot, velocity) in self.slots.iter_mut().zip(&animation.velocities) {
            let step = velocity.mult_scalar(dt, &mut self.ids);
            slot.tensor = slot.tensor.add(&step, &mut self.ids)?;
            slot.text = slot.tensor.pretty();
        }
        animation.remaining -= dt;
        trace!(dt, remaining = animation.remaining, "animation step");

        if animation.remaining <= 0.0 {
            self.animation = None;
            debug!("randomize finished");
        }
        Ok(true)
    }

    /// Paint every tensor panel.
    pub fn draw<S>(&mut self, surface: &mut S) -> FrameReport
    where
        S: DrawingSurface + ?Sized,
    {
        let mut report = FrameReport::default();
        for (i, slot) in self.slots.iter().enumerate() {
            let (x, y) = self.anchor(i);
            match self
                .renderer
                .draw_keyed(surface, TensorHandle(i), &slot.tensor, x, y)
            {
                LayoutSource::Fresh => report.fresh += 1,
                LayoutSource::Cached => report.cached += 1,
            }
        }
        report
    }

    /// One host frame: [`Scene::update`] then [`Scene::draw`].
    pub fn frame<S>(&mut self, dt: f32, surface: &mut S) -> SceneResult<FrameReport>
    where
        S: DrawingSurface + ?Sized,
    {
        let animated = self.update(dt)?;
        let report = self.draw(surface);
        Ok(FrameReport { animated, ..report })
    }

    /// Top-left corner of panel `i`.
    pub fn anchor(&self, i: usize) -> (f32, f32) {
        let columns = self.config.columns;
        let (x0, y0) = self.config.origin;
        let spacing = self.config.spacing;
        (
            x0 + (i % columns) as f32 * spacing,
            y0 + (i / columns) as f32 * spacing,
        )
    }

    fn slot(&self, handle: TensorHandle) -> SceneResult<&Slot> {
        self.slots
            .get(handle.0)
            .ok_or(SceneError::UnknownHandle(handle))
    }
}

/// Velocity tensor of `shape` with elements uniform in `[-speed, speed)`.
fn random_velocity(rng: &mut StdRng, ids: &mut TensorIds, shape: &Shape, speed: f32) -> Tensor {
    let data = (0..shape.numel())
        .map(|_| rng.gen_range(-1.0f32..1.0) * speed)
        .collect();
    Tensor::new(ids, shape.clone(), data)
}
