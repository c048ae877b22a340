//! Static overlap tests between boxes and circles.
//!
//! There is no integration step here: bodies carry a shape and an active
//! flag, and `overlaps` answers whether two shapes placed at two centers
//! intersect. Boundaries are exclusive, so touching shapes do not overlap.

use glam::DVec2;

use crate::api::types::Size;

/// Which shape a body should take when it is (re)built from a size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyKind {
    #[default]
    Box,
    Circle,
}

/// Collision shape, measured from its center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Box { half_width: f64, half_height: f64 },
    Circle { radius: f64 },
}

impl Shape {
    /// Build a shape of `kind` that fits a `size` full-width/height footprint.
    /// Circles use half the mean of width and height as radius.
    pub fn from_size(kind: BodyKind, size: Size) -> Self {
        match kind {
            BodyKind::Box => Shape::Box {
                half_width: size.w * 0.5,
                half_height: size.h * 0.5,
            },
            BodyKind::Circle => Shape::Circle {
                radius: (size.w + size.h) * 0.5 * 0.5,
            },
        }
    }

    pub fn kind(&self) -> BodyKind {
        match self {
            Shape::Box { .. } => BodyKind::Box,
            Shape::Circle { .. } => BodyKind::Circle,
        }
    }
}

/// A shape plus the switch that decides whether it takes part in collisions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsBody {
    shape: Shape,
    active: bool,
}

impl PhysicsBody {
    pub fn new(kind: BodyKind, size: Size, active: bool) -> Self {
        Self {
            shape: Shape::from_size(kind, size),
            active,
        }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Replace the shape with a fresh one of `kind`. The body is activated.
    pub fn set_kind(&mut self, kind: BodyKind, size: Size) {
        self.shape = Shape::from_size(kind, size);
        self.active = true;
    }

    /// Resize the current shape, keeping its kind.
    pub fn set_size(&mut self, size: Size) {
        self.shape = Shape::from_size(self.shape.kind(), size);
    }
}

/// Whether `a` centered at `pos_a` overlaps `b` centered at `pos_b`.
pub fn overlaps(a: &Shape, pos_a: DVec2, b: &Shape, pos_b: DVec2) -> bool {
    match (*a, *b) {
        (
            Shape::Box { half_width: aw, half_height: ah },
            Shape::Box { half_width: bw, half_height: bh },
        ) => {
            (pos_a.x - aw) < (pos_b.x + bw)
                && (pos_a.x + aw) > (pos_b.x - bw)
                && (pos_a.y - ah) < (pos_b.y + bh)
                && (pos_a.y + ah) > (pos_b.y - bh)
        }
        (Shape::Box { half_width, half_height }, Shape::Circle { radius }) => {
            box_circle(pos_a, DVec2::new(half_width, half_height), pos_b, radius)
        }
        (Shape::Circle { radius }, Shape::Box { half_width, half_height }) => {
            box_circle(pos_b, DVec2::new(half_width, half_height), pos_a, radius)
        }
        (Shape::Circle { radius: ra }, Shape::Circle { radius: rb }) => {
            pos_a.distance(pos_b) < ra + rb
        }
    }
}

/// Closest point on the box to the circle center, compared against the radius.
fn box_circle(box_center: DVec2, half: DVec2, circle_center: DVec2, radius: f64) -> bool {
    let closest = circle_center.min(box_center + half).max(box_center - half);
    closest.distance(circle_center) < radius
}
