//! Display list primitives
//!
//! The compositor emits these; a backend replays them. Keeping them as plain
//! data lets the whole frame be inspected in tests without a canvas.

use glam::Vec2;

use crate::sim::Rect;

/// sRGB colour with straight alpha
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::hex(0x000000);
    pub const WHITE: Color = Color::hex(0xffffff);

    /// Opaque colour from 0xRRGGBB
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
            a: 1.0,
        }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// CSS colour string
    pub fn to_css(&self) -> String {
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

/// Linear gradient between two points
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    pub from: Vec2,
    pub to: Vec2,
    /// (offset in [0, 1], colour)
    pub stops: Vec<(f32, Color)>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    Linear(Gradient),
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Paint::Solid(color)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub const fn new(x: f32, y: f32, radius: f32) -> Self {
        Self {
            center: Vec2::new(x, y),
            radius,
        }
    }
}

/// Geometry of one path
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect(Rect),
    /// Several circles filled as a single path
    Circles(Vec<Circle>),
    /// Closed polygon
    Polygon(Vec<Vec2>),
    Ellipse { center: Vec2, radii: Vec2 },
}

impl Shape {
    pub fn circle(x: f32, y: f32, radius: f32) -> Self {
        Shape::Circles(vec![Circle::new(x, y, radius)])
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Fill { shape: Shape, paint: Paint },
    Stroke { shape: Shape, color: Color, width: f32 },
    /// Save state, then translate and rotate
    PushTransform { translate: Vec2, rotate: f32 },
    /// Restore the state saved by the matching push
    PopTransform,
}

impl DrawCommand {
    pub fn fill(shape: Shape, paint: impl Into<Paint>) -> Self {
        DrawCommand::Fill {
            shape,
            paint: paint.into(),
        }
    }

    pub fn stroke(shape: Shape, color: Color, width: f32) -> Self {
        DrawCommand::Stroke {
            shape,
            color,
            width,
        }
    }
}
