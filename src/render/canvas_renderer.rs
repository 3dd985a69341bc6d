// src/render/canvas_renderer.rs
// Draws a canvas command list with nannou.
// Gradients are approximated with per-vertex colors; arcs become polylines.

use nannou::lyon::tessellation::LineCap;
use nannou::prelude::*;
use std::f32::consts::TAU;

use super::Transform2D;
use crate::config::RenderConfig;
use crate::draw::{DrawCommand, Paint, StrokeCap, Style};

pub struct CanvasRenderer {
    canvas_size: Vec2,
    transform: Transform2D,
    arc_resolution: u32,
    gradient_resolution: u32,
}

impl CanvasRenderer {
    pub fn new(canvas_size: Vec2, transform: Transform2D, config: &RenderConfig) -> Self {
        Self {
            canvas_size,
            transform,
            arc_resolution: config.arc_resolution.max(3),
            gradient_resolution: config.gradient_resolution.max(1),
        }
    }

    pub fn set_transform(&mut self, transform: Transform2D) {
        self.transform = transform;
    }

    pub fn canvas_size(&self) -> Vec2 {
        self.canvas_size
    }

    fn screen(&self, point: Vec2) -> Point2 {
        self.transform.to_screen(point, self.canvas_size)
    }

    fn colored(&self, points: &[Vec2], paint: &Paint) -> Vec<(Point2, Rgba)> {
        points
            .iter()
            .map(|&p| (self.screen(p), paint.color_at(p)))
            .collect()
    }

    /// Paints the canvas area and then every command, in order.
    pub fn draw(&self, draw: &Draw, background: Rgba, commands: &[DrawCommand]) {
        draw.rect()
            .xy(self.screen(self.canvas_size / 2.0))
            .wh(self.canvas_size * self.transform.scale)
            .rotate(self.transform.rotation)
            .color(background);

        for command in commands {
            self.draw_command(draw, command);
        }
    }

    fn draw_command(&self, draw: &Draw, command: &DrawCommand) {
        let scale = self.transform.scale;
        match command {
            DrawCommand::Line {
                start,
                end,
                paint,
                stroke_width,
                cap,
            } => {
                let points = subdivide(*start, *end, self.pieces(paint));
                draw.polyline()
                    .stroke_weight(stroke_width * scale)
                    .caps(line_cap(*cap))
                    .points_colored(self.colored(&points, paint));
            }
            DrawCommand::Arc {
                center,
                radius,
                start_angle,
                sweep_angle,
                paint,
                style,
            } => {
                let points = arc_points(*center, *radius, *start_angle, *sweep_angle, self.arc_resolution);
                self.draw_outline(draw, &points, paint, style, false);
            }
            DrawCommand::Circle {
                center,
                radius,
                paint,
                style,
            } => {
                if let Paint::Solid(color) = paint {
                    let ellipse = draw
                        .ellipse()
                        .xy(self.screen(*center))
                        .radius(radius * scale);
                    match style {
                        Style::Fill => {
                            ellipse.color(*color);
                        }
                        Style::Stroke { width, .. } => {
                            ellipse.no_fill().stroke(*color).stroke_weight(width * scale);
                        }
                    }
                } else {
                    let points = arc_points(*center, *radius, 0.0, TAU, self.arc_resolution);
                    self.draw_outline(draw, &points, paint, style, true);
                }
            }
            DrawCommand::Rect {
                top_left,
                size,
                paint,
                style,
            } => {
                if let Paint::Solid(color) = paint {
                    let rect = draw
                        .rect()
                        .xy(self.screen(*top_left + *size / 2.0))
                        .wh(*size * scale)
                        .rotate(self.transform.rotation);
                    match style {
                        Style::Fill => {
                            rect.color(*color);
                        }
                        Style::Stroke { width, .. } => {
                            rect.no_fill().stroke(*color).stroke_weight(width * scale);
                        }
                    }
                } else {
                    let corners = [
                        *top_left,
                        *top_left + vec2(size.x, 0.0),
                        *top_left + *size,
                        *top_left + vec2(0.0, size.y),
                    ];
                    self.draw_outline(draw, &corners, paint, style, true);
                }
            }
        }
    }

    fn draw_outline(&self, draw: &Draw, points: &[Vec2], paint: &Paint, style: &Style, closed: bool) {
        match style {
            Style::Fill => {
                draw.polygon().points_colored(self.colored(points, paint));
            }
            Style::Stroke { width, cap } => {
                let mut colored = self.colored(points, paint);
                if closed {
                    if let Some(first) = colored.first().copied() {
                        colored.push(first);
                    }
                }
                draw.polyline()
                    .stroke_weight(width * self.transform.scale)
                    .caps(line_cap(*cap))
                    .points_colored(colored);
            }
        }
    }

    fn pieces(&self, paint: &Paint) -> u32 {
        if paint.is_gradient() {
            self.gradient_resolution
        } else {
            1
        }
    }
}

fn line_cap(cap: StrokeCap) -> LineCap {
    match cap {
        StrokeCap::Butt => LineCap::Butt,
        StrokeCap::Round => LineCap::Round,
    }
}

/// `pieces + 1` evenly spaced points from `start` to `end`.
pub fn subdivide(start: Vec2, end: Vec2, pieces: u32) -> Vec<Vec2> {
    let pieces = pieces.max(1);
    (0..=pieces)
        .map(|i| start.lerp(end, i as f32 / pieces as f32))
        .collect()
}

/// Points along an arc in canvas space. `resolution` is the point count for
/// a full turn; shorter arcs get proportionally fewer, never less than two.
pub fn arc_points(center: Vec2, radius: f32, start_angle: f32, sweep_angle: f32, resolution: u32) -> Vec<Vec2> {
    let steps = ((sweep_angle.abs() / TAU) * resolution as f32).ceil().max(1.0) as u32;
    (0..=steps)
        .map(|i| {
            let angle = start_angle + sweep_angle * i as f32 / steps as f32;
            center + vec2(radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_subdivide_includes_both_ends() {
        let points = subdivide(vec2(0.0, 0.0), vec2(10.0, 0.0), 4);
        assert_eq!(points.len(), 5);
        assert_eq!(points[0], vec2(0.0, 0.0));
        assert_eq!(points[2], vec2(5.0, 0.0));
        assert_eq!(points[4], vec2(10.0, 0.0));
        assert_eq!(subdivide(vec2(1.0, 1.0), vec2(2.0, 2.0), 0).len(), 2);
    }

    #[test]
    fn test_arc_points_follow_the_sweep() {
        let center = vec2(100.0, 100.0);
        let points = arc_points(center, 50.0, 0.0, -PI, 360);
        assert_eq!(points.len(), 181);
        assert!((points[0] - vec2(150.0, 100.0)).length() < 1e-3);
        // negative sweep runs through -pi/2, which is up in canvas space
        assert!((points[90] - vec2(100.0, 50.0)).length() < 1e-3);
        assert!((points[180] - vec2(50.0, 100.0)).length() < 1e-3);
        for p in &points {
            assert!(((*p - center).length() - 50.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_zero_sweep_is_a_single_segment() {
        let points = arc_points(vec2(0.0, 0.0), 10.0, 1.0, 0.0, 360);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0], points[1]);
    }
}
