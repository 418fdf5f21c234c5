//! Screen-space geometry shared by the models and the scene.
//!
//! Coordinates follow the canvas convention: `x` grows to the right and
//! `y` grows downwards, in pixels.

use core::ops::{Add, AddAssign, Mul, Neg, Sub};

use crate::Real;

/// 2-D vector / point in canvas pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2d {
    pub x: Real,
    pub y: Real,
}

impl Vec2d {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: Real, y: Real) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> Real {
        self.x.hypot(self.y)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2d {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2d {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2d {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<Real> for Vec2d {
    type Output = Self;

    fn mul(self, rhs: Real) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2d {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl From<(Real, Real)> for Vec2d {
    fn from((x, y): (Real, Real)) -> Self {
        Self::new(x, y)
    }
}

/// Rotate `v` counter-clockwise (in the math sense) by `angle` radians.
pub fn rotate_vector(v: Vec2d, angle: Real) -> Vec2d {
    let (sin, cos) = angle.sin_cos();
    Vec2d::new(cos * v.x - sin * v.y, sin * v.x + cos * v.y)
}

/// Strict containment test against the open rectangle
/// `(x, x + width) × (y, y + height)`. Boundary points are outside.
pub fn point_in_rect(pos: Vec2d, x: Real, y: Real, width: Real, height: Real) -> bool {
    x < pos.x && pos.x < x + width && y < pos.y && pos.y < y + height
}

/// Axis-aligned box anchored at its top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoundingBox {
    pub x: Real,
    pub y: Real,
    pub width: Real,
    pub height: Real,
}

impl BoundingBox {
    pub const fn new(x: Real, y: Real, width: Real, height: Real) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_origin_size(origin: Vec2d, width: Real, height: Real) -> Self {
        Self::new(origin.x, origin.y, width, height)
    }

    pub fn origin(&self) -> Vec2d {
        Vec2d::new(self.x, self.y)
    }

    pub fn right(&self) -> Real {
        self.x + self.width
    }

    pub fn bottom(&self) -> Real {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2d {
        Vec2d::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// See [`point_in_rect`].
    pub fn contains(&self, pos: Vec2d) -> bool {
        point_in_rect(pos, self.x, self.y, self.width, self.height)
    }

    pub fn translate(&mut self, delta: Vec2d) {
        self.x += delta.x;
        self.y += delta.y;
    }

    /// Convert a canvas position into coordinates relative to the box origin.
    pub fn to_local(&self, pos: Vec2d) -> Vec2d {
        pos - self.origin()
    }
}
