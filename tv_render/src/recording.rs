//! A surface that records draw calls instead of painting them.

use crate::surface::{ColorMode, DrawingSurface, Hsla};

/// One recorded [`DrawingSurface`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    ColorMode(ColorMode),
    Background(Hsla),
    Fill(Hsla),
    Stroke(Hsla),
    StrokeWeight(f32),
    Rect { x: f32, y: f32, width: f32, height: f32 },
    Line { x1: f32, y1: f32, x2: f32, y2: f32 },
    Circle { x: f32, y: f32, diameter: f32 },
}

#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        RecordingSurface::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Recorded commands, leaving the surface empty.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn rects(&self) -> usize {
        self.count(|c| matches!(c, DrawCommand::Rect { .. }))
    }

    pub fn lines(&self) -> usize {
        self.count(|c| matches!(c, DrawCommand::Line { .. }))
    }

    pub fn circles(&self) -> usize {
        self.count(|c| matches!(c, DrawCommand::Circle { .. }))
    }

    /// Replay every recorded command onto another surface.
    pub fn replay<S: DrawingSurface + ?Sized>(&self, target: &mut S) {
        for command in &self.commands {
            match *command {
                DrawCommand::ColorMode(mode) => target.color_mode(mode),
                DrawCommand::Background(color) => target.background(color),
                DrawCommand::Fill(color) => target.fill(color),
                DrawCommand::Stroke(color) => target.stroke(color),
                DrawCommand::StrokeWeight(weight) => target.stroke_weight(weight),
                DrawCommand::Rect { x, y, width, height } => target.rect(x, y, width, height),
                DrawCommand::Line { x1, y1, x2, y2 } => target.line(x1, y1, x2, y2),
                DrawCommand::Circle { x, y, diameter } => target.circle(x, y, diameter),
            }
        }
    }

    fn count(&self, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }
}

impl DrawingSurface for RecordingSurface {
    fn color_mode(&mut self, mode: ColorMode) {
        self.commands.push(DrawCommand::ColorMode(mode));
    }

    fn background(&mut self, color: Hsla) {
        self.commands.push(DrawCommand::Background(color));
    }

    fn fill(&mut self, color: Hsla) {
        self.commands.push(DrawCommand::Fill(color));
    }

    fn stroke(&mut self, color: Hsla) {
        self.commands.push(DrawCommand::Stroke(color));
    }

    fn stroke_weight(&mut self, weight: f32) {
        self.commands.push(DrawCommand::StrokeWeight(weight));
    }

    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.commands.push(DrawCommand::Rect { x, y, width, height });
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.commands.push(DrawCommand::Line { x1, y1, x2, y2 });
    }

    fn circle(&mut self, x: f32, y: f32, diameter: f32) {
        self.commands.push(DrawCommand::Circle { x, y, diameter });
    }
}
