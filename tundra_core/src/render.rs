//! Rendering abstraction.
//!
//! This crate intentionally does not depend on a graphics backend.
//! Scene objects draw through `Graphics`; a renderer implementation would
//! satisfy it. Colour is global state: set it right before each draw.

use crate::{
    math::{Mat4, Vec3},
    resources::Model,
};

/// The draw API scene objects see.
pub trait Graphics: Send + Sync {
    fn begin_frame(&mut self) {}
    fn set_colour(&mut self, rgb: Vec3);
    fn draw_model(&mut self, model: Model, transform: Mat4);
    fn end_frame(&mut self) {}
}

/// A no-op renderer useful for headless tests.
#[derive(Default)]
pub struct NullGraphics;

impl Graphics for NullGraphics {
    fn set_colour(&mut self, _rgb: Vec3) {}
    fn draw_model(&mut self, _model: Model, _transform: Mat4) {}
}

/// One recorded draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    /// Colour in effect when the model was drawn.
    pub colour: Vec3,
    pub model: Model,
    pub transform: Mat4,
}

/// Records draws instead of rendering them.
#[derive(Debug, Default)]
pub struct RecordingGraphics {
    colour: Vec3,
    pub calls: Vec<DrawCall>,
    pub frames: u64,
}

impl RecordingGraphics {
    pub fn last(&self) -> Option<&DrawCall> {
        self.calls.last()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Graphics for RecordingGraphics {
    fn begin_frame(&mut self) {
        self.frames += 1;
    }

    fn set_colour(&mut self, rgb: Vec3) {
        self.colour = rgb;
    }

    fn draw_model(&mut self, model: Model, transform: Mat4) {
        self.calls.push(DrawCall {
            colour: self.colour,
            model,
            transform,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_captures_colour_at_draw_time() {
        let mut g = RecordingGraphics::default();
        g.begin_frame();
        g.set_colour(Vec3::splat(0.8));
        g.draw_model(Model::CUBE, Mat4::IDENTITY);
        g.set_colour(Vec3::splat(0.2));
        g.draw_model(Model::SPHERE, Mat4::IDENTITY);
        g.end_frame();

        assert_eq!(g.frames, 1);
        assert_eq!(g.calls.len(), 2);
        assert_eq!(g.calls[0].colour, Vec3::splat(0.8));
        assert_eq!(g.last().map(|c| c.model), Some(Model::SPHERE));
    }
}
