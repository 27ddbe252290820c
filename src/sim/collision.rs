//! Collision detection between the bird and the pipe field
//!
//! The bird's circular hitbox is tested as its enclosing square against each
//! pipe segment's rectangle. Overlap is strict on both axes, so shapes that
//! merely touch do not collide.

use glam::Vec2;

use super::state::{Bird, Pipe, PipeField};
use crate::tuning::Tuning;

/// Axis-aligned rectangle (top-left origin, y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Square enclosing a circle
    pub fn around_circle(center: Vec2, radius: f32) -> Self {
        Self::new(center.x - radius, center.y - radius, radius * 2.0, radius * 2.0)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Strict overlap on both axes
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.right() > other.x
            && self.x < other.right()
            && self.bottom() > other.y
            && self.y < other.bottom()
    }
}

/// Which half of a pair was hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Top,
    Bottom,
}

/// Result of a collision scan
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeHit {
    /// Index into the pipe field (0 = leftmost)
    pub index: usize,
    pub segment: Segment,
}

#[inline]
pub fn bird_bounds(bird: &Bird) -> Rect {
    Rect::around_circle(bird.pos, bird.radius)
}

/// Top and bottom segment rectangles of one pair
pub fn pipe_segments(pipe: &Pipe, tuning: &Tuning) -> (Rect, Rect) {
    let top = Rect::new(pipe.x, pipe.y, tuning.pipe_width, tuning.pipe_height);
    let bottom = Rect::new(
        pipe.x,
        top.bottom() + tuning.pipe_gap,
        tuning.pipe_width,
        tuning.pipe_height,
    );
    (top, bottom)
}

/// Check one pair
pub fn bird_hits_pipe(bird: &Bird, pipe: &Pipe, tuning: &Tuning) -> Option<Segment> {
    let bounds = bird_bounds(bird);
    let (top, bottom) = pipe_segments(pipe, tuning);
    if bounds.overlaps(&top) {
        Some(Segment::Top)
    } else if bounds.overlaps(&bottom) {
        Some(Segment::Bottom)
    } else {
        None
    }
}

/// Scan every pair; returns the leftmost hit
///
/// No spatial partitioning: only a handful of pairs are ever on screen.
pub fn first_collision(bird: &Bird, pipes: &PipeField, tuning: &Tuning) -> Option<PipeHit> {
    pipes.iter().enumerate().find_map(|(index, pipe)| {
        bird_hits_pipe(bird, pipe, tuning).map(|segment| PipeHit { index, segment })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn bird_at(x: f32, y: f32) -> Bird {
        let mut bird = Bird::new(&Tuning::default());
        bird.pos = Vec2::new(x, y);
        bird
    }

    #[test]
    fn test_pipe_segments_layout() {
        let tuning = Tuning::default();
        let (top, bottom) = pipe_segments(&Pipe { x: 100.0, y: -200.0 }, &tuning);
        assert_eq!(top, Rect::new(100.0, -200.0, 52.0, 400.0));
        assert_eq!(bottom, Rect::new(100.0, 300.0, 52.0, 400.0));
    }

    #[test]
    fn test_bird_in_gap_is_safe() {
        let tuning = Tuning::default();
        // Gap spans y 200..300
        let pipe = Pipe { x: 40.0, y: -200.0 };
        assert_eq!(bird_hits_pipe(&bird_at(50.0, 250.0), &pipe, &tuning), None);
    }

    #[test]
    fn test_bird_hits_top_and_bottom() {
        let tuning = Tuning::default();
        let pipe = Pipe { x: 40.0, y: -200.0 };
        assert_eq!(
            bird_hits_pipe(&bird_at(50.0, 205.0), &pipe, &tuning),
            Some(Segment::Top)
        );
        assert_eq!(
            bird_hits_pipe(&bird_at(50.0, 295.0), &pipe, &tuning),
            Some(Segment::Bottom)
        );
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let tuning = Tuning::default();
        let pipe = Pipe { x: 40.0, y: -200.0 };
        // Bird top edge exactly on the top segment's bottom edge
        assert_eq!(bird_hits_pipe(&bird_at(50.0, 212.0), &pipe, &tuning), None);
        // Bird right edge exactly on the pipe's left edge, vertically level with the top segment
        assert_eq!(bird_hits_pipe(&bird_at(28.0, 100.0), &pipe, &tuning), None);
    }

    #[test]
    fn test_first_collision_reports_index() {
        let tuning = Tuning::default();
        let mut field = PipeField::new();
        field.push(Pipe { x: -40.0, y: -200.0 });
        field.push(Pipe { x: 40.0, y: -200.0 });
        let hit = first_collision(&bird_at(50.0, 100.0), &field, &tuning);
        assert_eq!(
            hit,
            Some(PipeHit {
                index: 1,
                segment: Segment::Top
            })
        );
    }

    proptest! {
        #[test]
        fn prop_overlap_on_both_axes_collides(
            x in -100.0f32..100.0,
            y in -100.0f32..100.0,
            dx in 0.5f32..10.0,
            dy in 0.5f32..10.0,
        ) {
            let a = Rect::new(x, y, 20.0, 20.0);
            // Shift b so it pokes dx/dy into a's bottom-right corner
            let b = Rect::new(a.right() - dx, a.bottom() - dy, 30.0, 30.0);
            prop_assert!(a.overlaps(&b));
            prop_assert!(b.overlaps(&a));
        }

        #[test]
        fn prop_one_unit_gap_does_not_collide(
            x in -100.0f32..100.0,
            y in -100.0f32..100.0,
            shift in -30.0f32..30.0,
        ) {
            let a = Rect::new(x, y, 20.0, 20.0);
            let right_of = Rect::new(a.right() + 1.0, a.y + shift, 30.0, 30.0);
            let below = Rect::new(a.x + shift, a.bottom() + 1.0, 30.0, 30.0);
            prop_assert!(!a.overlaps(&right_of));
            prop_assert!(!a.overlaps(&below));
        }
    }
}
