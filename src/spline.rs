//! spline.rs
//! Trait for the single segments a baked curve is sampled from
use super::Vec2;
use super::NativeFloat;

pub trait Spline {
    /// Evaluate the segment at `t`, which should be in the interval [0,1]
    fn eval(&self, t: NativeFloat) -> Vec2;

    /// Push `resolution` evenly spaced samples for t in [0, 1) onto `out`.
    /// The end point (t = 1) is left out so consecutive segments do not
    /// duplicate their shared point.
    fn sample_into(&self, resolution: usize, out: &mut alloc::vec::Vec<Vec2>) {
        let step = 1.0 / resolution as NativeFloat;
        for i in 0..resolution {
            out.push(self.eval(i as NativeFloat * step));
        }
    }
}
