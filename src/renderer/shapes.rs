//! Draw command generation for each scene layer

use glam::Vec2;

use super::commands::{Circle, Color, DrawCommand, Gradient, Paint, Shape};
use crate::consts::{PIPE_CAP_HEIGHT, PIPE_CAP_OVERHANG};
use crate::sim::{Bird, Ground, Pipe, Rect, pipe_segments};
use crate::tuning::Tuning;

const OUTLINE_WIDTH: f32 = 2.0;

const SKY_TOP: Color = Color::hex(0x70c5ce);
const SKY_BOTTOM: Color = Color::hex(0xc2e9eb);
const CLOUD: Color = Color::rgba(255, 255, 255, 0.6);
const SKYLINE: Color = Color::hex(0x86c5da);

const PIPE_DARK: Color = Color::hex(0x558c22);
const PIPE_MID: Color = Color::hex(0x73bf2e);
const PIPE_HIGHLIGHT: Color = Color::hex(0x9ce659);
const PIPE_OUTLINE: Color = Color::hex(0x2d5a0c);
const CAP_LINE: Color = Color::rgba(0, 0, 0, 0.1);

const DIRT: Color = Color::hex(0xded895);
const GRASS_HEIGHT: f32 = 14.0;
const GRASS_FADE: f32 = 10.0;

const BIRD_BODY: Color = Color::hex(0xffd700);
const BIRD_BEAK: Color = Color::hex(0xff4500);
const BIRD_WING: Color = Color::hex(0xf0e68c);
const GLOW: Color = Color::rgba(255, 215, 0, 0.4);
const GLOW_SPREAD: f32 = 5.0;

/// Sky gradient, clouds and a static skyline
pub fn background(tuning: &Tuning) -> Vec<DrawCommand> {
    let floor_y = tuning.floor_y();
    let sky = Paint::Linear(Gradient {
        from: Vec2::ZERO,
        to: Vec2::new(0.0, tuning.height),
        stops: vec![(0.0, SKY_TOP), (1.0, SKY_BOTTOM)],
    });

    let mut cmds = vec![
        DrawCommand::fill(Shape::Rect(Rect::new(0.0, 0.0, tuning.width, tuning.height)), sky),
        DrawCommand::fill(
            Shape::Circles(vec![
                Circle::new(50.0, 100.0, 30.0),
                Circle::new(90.0, 100.0, 40.0),
                Circle::new(130.0, 100.0, 30.0),
            ]),
            CLOUD,
        ),
        DrawCommand::fill(
            Shape::Circles(vec![Circle::new(250.0, 60.0, 25.0), Circle::new(280.0, 70.0, 35.0)]),
            CLOUD,
        ),
    ];

    // (x, width, height) of each building standing on the ground
    let buildings = [(20.0, 40.0, 100.0), (70.0, 30.0, 60.0), (150.0, 50.0, 120.0), (250.0, 40.0, 80.0)];
    cmds.extend(buildings.iter().map(|&(x, w, h)| {
        DrawCommand::fill(Shape::Rect(Rect::new(x, floor_y - h, w, h)), SKYLINE)
    }));

    cmds
}

fn pipe_paint(pipe: &Pipe, tuning: &Tuning) -> Paint {
    Paint::Linear(Gradient {
        from: Vec2::new(pipe.x, 0.0),
        to: Vec2::new(pipe.x + tuning.pipe_width, 0.0),
        stops: vec![
            (0.0, PIPE_DARK),
            (0.2, PIPE_MID),
            (0.5, PIPE_HIGHLIGHT),
            (0.9, PIPE_DARK),
        ],
    })
}

/// Both segments of a pair with caps and outlines
pub fn pipe(pipe: &Pipe, tuning: &Tuning) -> Vec<DrawCommand> {
    let (top, bottom) = pipe_segments(pipe, tuning);
    let paint = pipe_paint(pipe, tuning);

    let cap_w = tuning.pipe_width + PIPE_CAP_OVERHANG * 2.0;
    let cap_x = pipe.x - PIPE_CAP_OVERHANG;
    let top_cap = Rect::new(cap_x, top.bottom() - PIPE_CAP_HEIGHT, cap_w, PIPE_CAP_HEIGHT);
    let bottom_cap = Rect::new(cap_x, bottom.y, cap_w, PIPE_CAP_HEIGHT);

    let mut cmds = Vec::with_capacity(10);
    for rect in [top, bottom, top_cap, bottom_cap] {
        cmds.push(DrawCommand::fill(Shape::Rect(rect), paint.clone()));
        cmds.push(DrawCommand::stroke(Shape::Rect(rect), PIPE_OUTLINE, OUTLINE_WIDTH));
    }

    // Lip shading just inside each cap
    cmds.push(DrawCommand::fill(
        Shape::Rect(Rect::new(pipe.x, top.bottom() - 4.0, tuning.pipe_width, 2.0)),
        CAP_LINE,
    ));
    cmds.push(DrawCommand::fill(
        Shape::Rect(Rect::new(pipe.x, bottom.y + 2.0, tuning.pipe_width, 2.0)),
        CAP_LINE,
    ));

    cmds
}

/// Two tiled copies so the scroll wraps without a seam
pub fn ground(ground: &Ground, tuning: &Tuning) -> Vec<DrawCommand> {
    let floor_y = tuning.floor_y();
    let grass = Paint::Linear(Gradient {
        from: Vec2::new(0.0, floor_y),
        to: Vec2::new(0.0, floor_y + GRASS_FADE),
        stops: vec![(0.0, PIPE_MID), (1.0, PIPE_DARK)],
    });

    let tiles = [ground.offset, ground.offset + tuning.width];
    let mut cmds = Vec::with_capacity(4);
    for x in tiles {
        cmds.push(DrawCommand::fill(
            Shape::Rect(Rect::new(x, floor_y, tuning.width, tuning.ground_height)),
            DIRT,
        ));
    }
    for x in tiles {
        cmds.push(DrawCommand::fill(
            Shape::Rect(Rect::new(x, floor_y, tuning.width, GRASS_HEIGHT)),
            grass.clone(),
        ));
    }
    cmds
}

/// Bird in its own rotated frame
pub fn bird(bird: &Bird, glow: bool) -> Vec<DrawCommand> {
    let r = bird.radius;
    let mut cmds = vec![DrawCommand::PushTransform {
        translate: bird.pos,
        rotate: bird.rotation,
    }];

    if glow {
        cmds.push(DrawCommand::fill(Shape::circle(0.0, 0.0, r + GLOW_SPREAD), GLOW));
    }

    let body = Shape::circle(0.0, 0.0, r);
    let eye = Shape::circle(6.0, -6.0, 5.0);
    let beak = Shape::Polygon(vec![Vec2::new(8.0, 2.0), Vec2::new(18.0, 6.0), Vec2::new(8.0, 10.0)]);
    let wing = Shape::Ellipse {
        center: Vec2::new(-5.0, 5.0),
        radii: Vec2::new(8.0, 5.0),
    };

    cmds.extend([
        DrawCommand::fill(body.clone(), BIRD_BODY),
        DrawCommand::stroke(body, Color::BLACK, OUTLINE_WIDTH),
        DrawCommand::fill(eye.clone(), Color::WHITE),
        DrawCommand::stroke(eye, Color::BLACK, OUTLINE_WIDTH),
        DrawCommand::fill(Shape::circle(8.0, -6.0, 2.0), Color::BLACK),
        DrawCommand::fill(beak.clone(), BIRD_BEAK),
        DrawCommand::stroke(beak, Color::BLACK, OUTLINE_WIDTH),
        DrawCommand::fill(wing.clone(), BIRD_WING),
        DrawCommand::stroke(wing, Color::BLACK, OUTLINE_WIDTH),
        DrawCommand::PopTransform,
    ]);

    cmds
}
