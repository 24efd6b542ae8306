use serde::{Deserialize, Serialize};
use std::ops::{Div, Sub};

/// A vector in 3D Euclidean space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn from_array(v: [f64; 3]) -> Self {
        Self {
            x: v[0],
            y: v[1],
            z: v[2],
        }
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: &Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    pub fn length(&self) -> f64 {
        self.x.hypot(self.y).hypot(self.z)
    }

    fn max_abs(&self) -> f64 {
        self.x.abs().max(self.y.abs()).max(self.z.abs())
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Divide by the largest absolute component. Zero and non-finite
    /// vectors are returned unchanged.
    fn rescaled(self) -> Self {
        let m = self.max_abs();
        if m == 0.0 || !m.is_finite() {
            self
        } else {
            self / m
        }
    }

    /// Scale to unit length.
    ///
    /// An exactly zero vector stays zero. Non-finite components are not
    /// special-cased: NaN and infinities flow through the division.
    pub fn normalized_or_zero(&self) -> Self {
        if self.x == 0.0 && self.y == 0.0 && self.z == 0.0 {
            return Self::ZERO;
        }
        let v = self.rescaled();
        v / v.length()
    }

    /// Unit normal of the triangle `a, b, c` by the right-hand rule,
    /// i.e. the normalized `(b - a) × (c - a)`. Zero for degenerate triangles.
    ///
    /// Edges are rescaled before the cross product, so finite triangles of
    /// any magnitude get a unit normal.
    pub fn triangle_normal(a: [f64; 3], b: [f64; 3], c: [f64; 3]) -> Self {
        let a = Self::from_array(a);
        let e1 = Self::edge(a, Self::from_array(b)).rescaled();
        let e2 = Self::edge(a, Self::from_array(c)).rescaled();
        e1.cross(&e2).normalized_or_zero()
    }

    /// `to - from`, halving both first when the difference of two finite
    /// points overflows.
    fn edge(from: Self, to: Self) -> Self {
        let d = to - from;
        if d.is_finite() || !(from.is_finite() && to.is_finite()) {
            d
        } else {
            to / 2.0 - from / 2.0
        }
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Div<f64> for Vec3 {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}
