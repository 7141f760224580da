use core::ops::{Add, AddAssign, Mul, Neg, Sub};

use num_traits::Float;

use super::NativeFloat;

/// A 2D vector, used both for absolute positions and for displacements.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: NativeFloat,
    pub y: NativeFloat,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: NativeFloat, y: NativeFloat) -> Self {
        Vec2 { x, y }
    }

    /// Interprets the Vec2 as a vector and returns its norm (distance from origin)
    pub fn length(&self) -> NativeFloat {
        Float::sqrt(self.squared_length())
    }

    pub fn squared_length(&self) -> NativeFloat {
        (self.x * self.x) + (self.y * self.y)
    }

    /// Returns the vector scaled to length `scale`, or the zero vector
    /// if `self` has no length.
    pub fn normalize(&self, scale: NativeFloat) -> Vec2 {
        let len = self.length();
        if len == 0.0 {
            return Vec2::ZERO;
        }
        *self * (scale / len)
    }

    /// Linear interpolation from `self` to `other`, `r` is not clamped.
    pub fn lerp(self, other: Vec2, r: NativeFloat) -> Vec2 {
        self + (other - self) * r
    }

    /// True if both components differ by at most `margin`.
    pub fn within(&self, other: Vec2, margin: NativeFloat) -> bool {
        Float::abs(self.x - other.x) <= margin && Float::abs(self.y - other.y) <= margin
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, other: Vec2) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Vec2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Mul<NativeFloat> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: NativeFloat) -> Vec2 {
        Vec2 {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        Vec2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl From<(NativeFloat, NativeFloat)> for Vec2 {
    fn from((x, y): (NativeFloat, NativeFloat)) -> Self {
        Vec2 { x, y }
    }
}

impl From<[NativeFloat; 2]> for Vec2 {
    fn from([x, y]: [NativeFloat; 2]) -> Self {
        Vec2 { x, y }
    }
}

/// Pixel coordinates as delivered by input layers
impl From<(i32, i32)> for Vec2 {
    fn from((x, y): (i32, i32)) -> Self {
        Vec2 {
            x: x as NativeFloat,
            y: y as NativeFloat,
        }
    }
}

impl From<Vec2> for (NativeFloat, NativeFloat) {
    fn from(v: Vec2) -> Self {
        (v.x, v.y)
    }
}

/// Component-wise negation.
pub fn negate(v: Vec2) -> Vec2 {
    -v
}

/// Euclidean norm of `v`.
pub fn length(v: Vec2) -> NativeFloat {
    v.length()
}

/// `v` scaled to length `scale`. A zero vector stays zero instead of dividing by zero.
pub fn normalize(v: Vec2, scale: NativeFloat) -> Vec2 {
    v.normalize(scale)
}

/// Scalar linear interpolation `a + (b - a) * r`.
pub fn lerp(a: NativeFloat, b: NativeFloat, r: NativeFloat) -> NativeFloat {
    a + (b - a) * r
}

/// 2D linear interpolation `a + (b - a) * r`.
pub fn lerp2(a: Vec2, b: Vec2, r: NativeFloat) -> Vec2 {
    a.lerp(b, r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EPSILON;
    use num_traits::Float;

    #[test]
    fn lerp2_hits_both_ends() {
        let a = Vec2::new(-3.5, 1.25);
        let b = Vec2::new(4.0, -7.0);

        assert!((lerp2(a, b, 0.0) - a).squared_length() < EPSILON);
        assert!((lerp2(a, b, 1.0) - b).squared_length() < EPSILON);
    }

    #[test]
    fn lerp_is_not_clamped() {
        assert!(Float::abs(lerp(0.0, 10.0, 1.5) - 15.0) < EPSILON);
        assert!(Float::abs(lerp(0.0, 10.0, -0.5) + 5.0) < EPSILON);
        let p = lerp2(Vec2::ZERO, Vec2::new(2.0, 2.0), 2.0);
        assert!((p - Vec2::new(4.0, 4.0)).squared_length() < EPSILON);
    }

    #[test]
    fn normalize_scales_to_length() {
        let v = normalize(Vec2::new(3.0, 4.0), 10.0);
        assert!((v - Vec2::new(6.0, 8.0)).squared_length() < EPSILON);
        assert!(Float::abs(length(v) - 10.0) < EPSILON);
    }

    #[test]
    fn normalize_zero_vector_is_zero() {
        assert_eq!(normalize(Vec2::ZERO, 5.0), Vec2::ZERO);
        assert_eq!(normalize(Vec2::ZERO, 1.0), Vec2::ZERO);
    }

    #[test]
    fn negate_and_length() {
        assert_eq!(negate(Vec2::new(1.0, -2.0)), Vec2::new(-1.0, 2.0));
        // classic pythagorean triple
        assert!(Float::abs(length(Vec2::new(3.0, 4.0)) - 5.0) < EPSILON);
    }

    #[test]
    fn within_margin_is_inclusive() {
        let p = Vec2::new(10.0, 10.0);
        assert!(p.within(Vec2::new(12.0, 8.0), 2.0));
        assert!(!p.within(Vec2::new(12.5, 10.0), 2.0));
        assert!(!p.within(Vec2::new(10.0, 7.0), 2.0));
    }

    #[test]
    fn conversions() {
        assert_eq!(Vec2::from((3i32, -4i32)), Vec2::new(3.0, -4.0));
        assert_eq!(Vec2::from([1.5, 2.5]), Vec2::new(1.5, 2.5));
        let t: (NativeFloat, NativeFloat) = Vec2::new(1.0, 2.0).into();
        assert_eq!(t, (1.0, 2.0));
    }
}
