//! Canvas 2D backend
//!
//! Replays a display list onto a `CanvasRenderingContext2d`.

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::commands::{DrawCommand, Paint, Shape};

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }

    /// Draw a full frame
    pub fn render(&self, cmds: &[DrawCommand]) -> Result<(), JsValue> {
        for cmd in cmds {
            match cmd {
                DrawCommand::Fill { shape, paint } => {
                    self.set_fill(paint)?;
                    match shape {
                        Shape::Rect(r) => self.ctx.fill_rect(
                            r.x as f64,
                            r.y as f64,
                            r.w as f64,
                            r.h as f64,
                        ),
                        _ => {
                            self.trace(shape)?;
                            self.ctx.fill();
                        }
                    }
                }
                DrawCommand::Stroke {
                    shape,
                    color,
                    width,
                } => {
                    self.ctx.set_stroke_style_str(&color.to_css());
                    self.ctx.set_line_width(*width as f64);
                    match shape {
                        Shape::Rect(r) => self.ctx.stroke_rect(
                            r.x as f64,
                            r.y as f64,
                            r.w as f64,
                            r.h as f64,
                        ),
                        _ => {
                            self.trace(shape)?;
                            self.ctx.stroke();
                        }
                    }
                }
                DrawCommand::PushTransform { translate, rotate } => {
                    self.ctx.save();
                    self.ctx.translate(translate.x as f64, translate.y as f64)?;
                    self.ctx.rotate(*rotate as f64)?;
                }
                DrawCommand::PopTransform => self.ctx.restore(),
            }
        }
        Ok(())
    }

    fn set_fill(&self, paint: &Paint) -> Result<(), JsValue> {
        match paint {
            Paint::Solid(color) => self.ctx.set_fill_style_str(&color.to_css()),
            Paint::Linear(g) => {
                let gradient = self.ctx.create_linear_gradient(
                    g.from.x as f64,
                    g.from.y as f64,
                    g.to.x as f64,
                    g.to.y as f64,
                );
                for (offset, color) in &g.stops {
                    gradient.add_color_stop(*offset, &color.to_css())?;
                }
                self.ctx.set_fill_style_canvas_gradient(&gradient);
            }
        }
        Ok(())
    }

    fn trace(&self, shape: &Shape) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        ctx.begin_path();
        match shape {
            Shape::Rect(r) => ctx.rect(r.x as f64, r.y as f64, r.w as f64, r.h as f64),
            Shape::Circles(circles) => {
                for c in circles {
                    // Sub-path per circle so the union fills cleanly
                    ctx.move_to((c.center.x + c.radius) as f64, c.center.y as f64);
                    ctx.arc(c.center.x as f64, c.center.y as f64, c.radius as f64, 0.0, TAU)?;
                }
            }
            Shape::Polygon(points) => {
                if let Some((first, rest)) = points.split_first() {
                    ctx.move_to(first.x as f64, first.y as f64);
                    for p in rest {
                        ctx.line_to(p.x as f64, p.y as f64);
                    }
                    ctx.close_path();
                }
            }
            Shape::Ellipse { center, radii } => {
                ctx.ellipse(
                    center.x as f64,
                    center.y as f64,
                    radii.x as f64,
                    radii.y as f64,
                    0.0,
                    0.0,
                    TAU,
                )?;
            }
        }
        Ok(())
    }
}
