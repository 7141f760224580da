use super::spline::Spline;
use super::vec2::lerp2;
use super::{NativeFloat, Vec2};

/// A 2d quadratic Bezier segment defined by three points: the starting point,
/// one control point and the ending point.
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)² * start + 2 * (1 - t) * t * ctrl + t² * end```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct QuadraticBezier {
    pub(crate) start: Vec2,
    pub(crate) ctrl: Vec2,
    pub(crate) end: Vec2,
}

impl QuadraticBezier {
    pub fn new(start: Vec2, ctrl: Vec2, end: Vec2) -> Self {
        QuadraticBezier { start, ctrl, end }
    }

    /// Build a segment from the first three points of `points`.
    /// Returns None if the slice is too short.
    pub fn from_slice(points: &[Vec2]) -> Option<Self> {
        match points {
            [start, ctrl, end, ..] => Some(QuadraticBezier::new(*start, *ctrl, *end)),
            _ => None,
        }
    }

    pub fn start(&self) -> Vec2 {
        self.start
    }

    pub fn ctrl(&self) -> Vec2 {
        self.ctrl
    }

    pub fn end(&self) -> Vec2 {
        self.end
    }

    /// Evaluate the segment at t by direct evaluation of the polynomial (not numerically stable)
    pub fn eval(&self, t: NativeFloat) -> Vec2 {
        let t2 = t * t;
        let one_t = 1.0 - t;
        let one_t2 = one_t * one_t;

        self.start * one_t2 + self.ctrl * (2.0 * one_t * t) + self.end * t2
    }

    /// Evaluate the segment at t using the numerically stable De Casteljau algorithm
    pub fn eval_casteljau(&self, t: NativeFloat) -> Vec2 {
        // unrolled de casteljau algorithm
        // _1ab is the first iteration from first (a) to second (b) control point and so on
        let ctrl_1ab = lerp2(self.start, self.ctrl, t);
        let ctrl_1bc = lerp2(self.ctrl, self.end, t);
        // second iteration, final point on the curve
        lerp2(ctrl_1ab, ctrl_1bc, t)
    }
}

impl Spline for QuadraticBezier {
    fn eval(&self, t: NativeFloat) -> Vec2 {
        self.eval_casteljau(t)
    }
}
