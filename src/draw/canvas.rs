// src/draw/canvas.rs
//
// The drawing surface handed to effects: a fixed canvas size plus the
// ordered list of commands painted so far.

use nannou::prelude::{vec2, Vec2};

use super::{DrawCommand, Paint, StrokeCap, Style};

#[derive(Debug, Clone)]
pub struct Canvas {
    size: Vec2,
    commands: Vec<DrawCommand>,
}

impl Canvas {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    pub fn square(side: f32) -> Self {
        Self::new(vec2(side, side))
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.size / 2.0
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn line(&mut self, start: Vec2, end: Vec2, paint: Paint, stroke_width: f32) {
        self.push(DrawCommand::Line {
            start,
            end,
            paint,
            stroke_width,
            cap: StrokeCap::Butt,
        });
    }

    pub fn arc(
        &mut self,
        center: Vec2,
        radius: f32,
        start_angle: f32,
        sweep_angle: f32,
        paint: Paint,
        style: Style,
    ) {
        self.push(DrawCommand::Arc {
            center,
            radius,
            start_angle,
            sweep_angle,
            paint,
            style,
        });
    }

    pub fn circle(&mut self, center: Vec2, radius: f32, paint: Paint, style: Style) {
        self.push(DrawCommand::Circle {
            center,
            radius,
            paint,
            style,
        });
    }

    pub fn rect(&mut self, top_left: Vec2, size: Vec2, paint: Paint, style: Style) {
        self.push(DrawCommand::Rect {
            top_left,
            size,
            paint,
            style,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_dimensions() {
        let canvas = Canvas::new(vec2(900.0, 600.0));
        assert_eq!(canvas.width(), 900.0);
        assert_eq!(canvas.height(), 600.0);
        assert_eq!(canvas.center(), vec2(450.0, 300.0));
    }

    #[test]
    fn test_commands_keep_submission_order() {
        let mut canvas = Canvas::square(100.0);
        canvas.line(vec2(0.0, 0.0), vec2(1.0, 1.0), Paint::solid_white(), 2.0);
        canvas.circle(vec2(5.0, 5.0), 3.0, Paint::solid_white(), Style::Fill);
        canvas.rect(vec2(0.0, 0.0), vec2(4.0, 4.0), Paint::solid_white(), Style::stroke(2.0));

        let commands = canvas.into_commands();
        assert_eq!(commands.len(), 3);
        assert!(matches!(commands[0], DrawCommand::Line { stroke_width, .. } if stroke_width == 2.0));
        assert!(matches!(commands[1], DrawCommand::Circle { style: Style::Fill, .. }));
        assert!(matches!(commands[2], DrawCommand::Rect { .. }));
        assert!(commands.iter().all(DrawCommand::is_finite));
    }
}
