//! Canvas 2D painter

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::shapes::{Shape, scene};
use crate::sim::GameSession;

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasRenderer {
    pub fn new(ctx: CanvasRenderingContext2d, width: f64, height: f64) -> Self {
        Self { ctx, width, height }
    }

    /// Clear and draw the current session
    pub fn render(&self, session: &GameSession) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
        for shape in scene(session) {
            self.draw(&shape);
        }
    }

    fn draw(&self, shape: &Shape) {
        let ctx = &self.ctx;
        match *shape {
            Shape::Rect { pos, size, color } => {
                ctx.set_fill_style_str(color);
                ctx.fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
            }
            Shape::Circle {
                center,
                radius,
                color,
            } => {
                ctx.set_fill_style_str(color);
                ctx.begin_path();
                if let Err(e) = ctx.arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU) {
                    log::warn!("Canvas arc failed: {:?}", e);
                    return;
                }
                ctx.fill();
            }
            Shape::Line {
                from,
                to,
                width,
                color,
            } => {
                ctx.set_stroke_style_str(color);
                ctx.set_line_width(width as f64);
                ctx.begin_path();
                ctx.move_to(from.x as f64, from.y as f64);
                ctx.line_to(to.x as f64, to.y as f64);
                ctx.stroke();
            }
        }
    }
}
