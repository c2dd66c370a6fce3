//! Immediate-mode 2D drawing target.
//!
//! The host implements [`Surface2d`] over its canvas; [`RecordingSurface`]
//! keeps the commands of the current frame for tests and headless runs.

use glam::Vec2;

/// Line stroke style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// RGBA, straight alpha.
    pub color: [f32; 4],
    /// Line width in pixels.
    pub width: f32,
}

/// The three primitives the network background draws with.
pub trait Surface2d {
    /// Wipe the whole canvas.
    fn clear(&mut self, width: f32, height: f32);
    /// Stroke a straight line.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: Stroke);
    /// Fill a circle.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]);
}

/// One recorded drawing call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// [`Surface2d::clear`].
    Clear {
        /// Canvas width.
        width: f32,
        /// Canvas height.
        height: f32,
    },
    /// [`Surface2d::stroke_line`].
    Line {
        /// Start point.
        from: Vec2,
        /// End point.
        to: Vec2,
        /// Stroke style.
        stroke: Stroke,
    },
    /// [`Surface2d::fill_circle`].
    Circle {
        /// Centre.
        center: Vec2,
        /// Radius.
        radius: f32,
        /// Fill RGBA.
        color: [f32; 4],
    },
}

/// Surface that records the commands issued since the last clear.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands of the current frame, starting with its clear.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of lines in the current frame.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count()
    }

    /// Number of circles in the current frame.
    #[must_use]
    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }
}

impl Surface2d for RecordingSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: Stroke) {
        self.commands.push(DrawCommand::Line { from, to, stroke });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }
}
