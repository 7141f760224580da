use super::spline::Spline;
use super::vec2::lerp2;
use super::{NativeFloat, Vec2};

/// A 2d cubic Bezier segment defined by four points: the starting point, two successive
/// control points and the ending point.
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)³ * start + 3 * (1 - t)² * t * ctrl1 + 3 * t² * (1 - t) * ctrl2 + t³ * end```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubicBezier {
    pub(crate) start: Vec2,
    pub(crate) ctrl1: Vec2,
    pub(crate) ctrl2: Vec2,
    pub(crate) end: Vec2,
}

impl CubicBezier {
    pub fn new(start: Vec2, ctrl1: Vec2, ctrl2: Vec2, end: Vec2) -> Self {
        CubicBezier {
            start,
            ctrl1,
            ctrl2,
            end,
        }
    }

    /// Build a segment from the first four points of `points`.
    /// Returns None if the slice is too short.
    pub fn from_slice(points: &[Vec2]) -> Option<Self> {
        match points {
            [start, ctrl1, ctrl2, end, ..] => Some(CubicBezier::new(*start, *ctrl1, *ctrl2, *end)),
            _ => None,
        }
    }

    pub fn start(&self) -> Vec2 {
        self.start
    }

    pub fn end(&self) -> Vec2 {
        self.end
    }

    /// Evaluate a CubicBezier curve at t by direct evaluation of the polynomial (not numerically stable)
    pub fn eval(&self, t: NativeFloat) -> Vec2 {
        let one_t = 1.0 - t;
        self.start * (one_t * one_t * one_t)
            + self.ctrl1 * (3.0 * t * one_t * one_t)
            + self.ctrl2 * (3.0 * t * t * one_t)
            + self.end * (t * t * t)
    }

    /// Evaluate a CubicBezier curve at t using the numerically stable De Casteljau algorithm
    pub fn eval_casteljau(&self, t: NativeFloat) -> Vec2 {
        // unrolled de casteljau algorithm
        // _1ab is the first iteration from first (a) to second (b) control point and so on
        let ctrl_1ab = lerp2(self.start, self.ctrl1, t);
        let ctrl_1bc = lerp2(self.ctrl1, self.ctrl2, t);
        let ctrl_1cd = lerp2(self.ctrl2, self.end, t);
        // second iteration
        let ctrl_2ab = lerp2(ctrl_1ab, ctrl_1bc, t);
        let ctrl_2bc = lerp2(ctrl_1bc, ctrl_1cd, t);
        // third iteration, final point on the curve
        lerp2(ctrl_2ab, ctrl_2bc, t)
    }
}

impl Spline for CubicBezier {
    fn eval(&self, t: NativeFloat) -> Vec2 {
        self.eval_casteljau(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EPSILON;
    use num_traits::Float;

    #[test]
    fn eval_equivalence_casteljau() {
        let bezier = CubicBezier::new(
            Vec2::new(0.0, 1.77),
            Vec2::new(1.1, -1.0),
            Vec2::new(4.3, 3.0),
            Vec2::new(3.2, -4.0),
        );
        let nsteps: usize = 1000;
        for t in 0..=nsteps {
            let t = t as NativeFloat / nsteps as NativeFloat;
            let err = bezier.eval(t) - bezier.eval_casteljau(t);
            assert!(err.squared_length() < EPSILON);
        }
    }

    #[test]
    fn circle_approximation_error() {
        // quarter circle, control points chosen for minimum radial distance error
        // according to: http://spencermortensen.com/articles/bezier-circle/
        let c = 0.551915024494;
        let max_drift_perc = 0.02; // radial drift percent, rounded up from 0.019608
        let max_error = max_drift_perc * 0.01; // absolute max radial error

        let bezier = CubicBezier::new(
            Vec2::new(0.0, 1.0),
            Vec2::new(c, 1.0),
            Vec2::new(1.0, c),
            Vec2::new(1.0, 0.0),
        );
        let nsteps: usize = 1000;
        for t in 0..=nsteps {
            let t = t as NativeFloat / nsteps as NativeFloat;
            let contour = bezier.eval_casteljau(t).length() - 1.0;
            assert!(Float::abs(contour) <= max_error);
        }
    }

    #[test]
    fn from_slice_takes_leading_four() {
        let pts = [
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 10.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(20.0, 0.0),
        ];
        let bezier = CubicBezier::from_slice(&pts).unwrap();
        assert_eq!(bezier.start(), pts[0]);
        assert_eq!(bezier.end(), pts[3]);
        assert!(CubicBezier::from_slice(&pts[..3]).is_none());
    }
}
