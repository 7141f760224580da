//! Baking of flat control polygons into sampled polylines.
//!
//! Both bakers split the control polygon into consecutive segments that share
//! their boundary point, sample every segment at `resolution` parameter values
//! `0, 1/resolution, ..., (resolution - 1)/resolution` and finally append the
//! last point of the polygon once. The output therefore always holds
//! `segments * resolution + 1` points and ends exactly on the input's last point.

use alloc::vec::Vec;

use super::error::InvalidCurveInput;
use super::spline::Spline;
use super::{CubicBezier, QuadraticBezier, Vec2, MIN_RESOLUTION};

/// Number of quadratic segments in a polygon of `count` points, 0 if fewer than 3.
pub fn quadratic_segment_count(count: usize) -> usize {
    if count < 3 {
        0
    } else {
        (count - 1) / 2
    }
}

/// Number of cubic segments in a polygon of `count` points, 0 if fewer than 4.
///
/// Only the count form exists; for a polygon pass its length:
/// ```rust
/// # use bezedit::{cubic_segment_count, Vec2};
/// let polygon = [Vec2::ZERO; 7];
/// assert_eq!(cubic_segment_count(polygon.len()), 2);
/// ```
pub fn cubic_segment_count(count: usize) -> usize {
    if count < 4 {
        0
    } else {
        (count - 4) / 3 + 1
    }
}

/// Bake a composite quadratic Bezier curve.
///
/// `points` must hold an odd number (at least 3) of points: anchors at even
/// indices, one control point between each pair of anchors. `resolution` is the
/// number of samples per segment and must be at least [`MIN_RESOLUTION`].
pub fn quadratic(points: &[Vec2], resolution: usize) -> Result<Vec<Vec2>, InvalidCurveInput> {
    let count = points.len();
    if count % 2 == 0 {
        return Err(InvalidCurveInput::EvenPointCount { count });
    }
    check_resolution(resolution)?;
    if count < 3 {
        return Err(InvalidCurveInput::TooFewPoints { count, min: 3 });
    }

    let segments = points
        .windows(3)
        .step_by(2)
        .filter_map(QuadraticBezier::from_slice);
    let baked = sample(segments, quadratic_segment_count(count), resolution, points);
    log::trace!(
        "baked quadratic curve: {} points, resolution {} -> {} samples",
        count,
        resolution,
        baked.len()
    );
    Ok(baked)
}

/// Bake a composite cubic Bezier curve.
///
/// `points` must hold `4 + 3 * k` points: segment `i` spans indices
/// `3i..=3i + 3` and shares its last point with the next segment.
/// `resolution` must be at least [`MIN_RESOLUTION`].
pub fn cubic(points: &[Vec2], resolution: usize) -> Result<Vec<Vec2>, InvalidCurveInput> {
    let count = points.len();
    if count < 4 {
        return Err(InvalidCurveInput::TooFewPoints { count, min: 4 });
    }
    if (count - 4) % 3 != 0 {
        return Err(InvalidCurveInput::MisalignedPointCount { count });
    }
    check_resolution(resolution)?;

    let segments = points
        .windows(4)
        .step_by(3)
        .filter_map(CubicBezier::from_slice);
    let baked = sample(segments, cubic_segment_count(count), resolution, points);
    log::trace!(
        "baked cubic curve: {} points, resolution {} -> {} samples",
        count,
        resolution,
        baked.len()
    );
    Ok(baked)
}

fn check_resolution(resolution: usize) -> Result<(), InvalidCurveInput> {
    if resolution < MIN_RESOLUTION {
        return Err(InvalidCurveInput::ResolutionTooLow {
            resolution,
            min: MIN_RESOLUTION,
        });
    }
    Ok(())
}

// Callers have validated `points`, so it is never empty here.
fn sample<S, I>(segments: I, nsegments: usize, resolution: usize, points: &[Vec2]) -> Vec<Vec2>
where
    S: Spline,
    I: Iterator<Item = S>,
{
    let mut baked = Vec::with_capacity(nsegments * resolution + 1);
    for segment in segments {
        segment.sample_into(resolution, &mut baked);
    }
    if let Some(last) = points.last() {
        baked.push(*last);
    }
    baked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NativeFloat, EPSILON};
    use alloc::vec;

    fn zigzag(n: usize) -> Vec<Vec2> {
        (0..n)
            .map(|i| {
                let y = if i % 2 == 0 { 0.0 } else { 7.5 };
                Vec2::new(i as NativeFloat * 3.0, y)
            })
            .collect()
    }

    #[test]
    fn quadratic_scenario() {
        let points = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(5.0, 10.0),
            Vec2::new(10.0, 0.0),
        ];
        let baked = quadratic(&points, 3).unwrap();
        assert_eq!(baked.len(), 4);
        assert_eq!(baked[0], Vec2::new(0.0, 0.0));
        assert_eq!(baked[3], Vec2::new(10.0, 0.0));
        // r = 1/3: lerp((0,0),(5,10)) = (5/3,10/3), lerp((5,10),(10,0)) = (20/3,20/3)
        let expected = Vec2::new(10.0 / 3.0, 40.0 / 9.0);
        assert!((baked[1] - expected).squared_length() < EPSILON);
    }

    #[test]
    fn cubic_scenario() {
        let points = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 10.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(10.0, 0.0),
        ];
        let baked = cubic(&points, 3).unwrap();
        assert_eq!(baked.len(), 4);
        assert_eq!(baked[0], Vec2::new(0.0, 0.0));
        assert_eq!(baked[3], Vec2::new(10.0, 0.0));
    }

    #[test]
    fn quadratic_output_length_and_end() {
        for n in (3..=15).step_by(2) {
            let points = zigzag(n);
            for resolution in [3, 4, 10, 33] {
                let baked = quadratic(&points, resolution).unwrap();
                assert_eq!(baked.len(), (n - 1) / 2 * resolution + 1);
                assert_eq!(baked[baked.len() - 1], points[n - 1]);
                assert_eq!(baked[0], points[0]);
            }
        }
    }

    #[test]
    fn cubic_output_length_and_end() {
        for n in (4..=19).step_by(3) {
            let points = zigzag(n);
            for resolution in [3, 5, 16] {
                let baked = cubic(&points, resolution).unwrap();
                assert_eq!(baked.len(), ((n - 4) / 3 + 1) * resolution + 1);
                assert_eq!(baked[baked.len() - 1], points[n - 1]);
            }
        }
    }

    #[test]
    fn segments_meet_at_shared_anchor() {
        // the first sample of segment k is exactly its start anchor
        let points = zigzag(7);
        let resolution = 6;
        let baked = cubic(&points, resolution).unwrap();
        assert_eq!(baked[resolution], points[3]);

        let points = zigzag(5);
        let baked = quadratic(&points, resolution).unwrap();
        assert_eq!(baked[resolution], points[2]);
    }

    #[test]
    fn quadratic_rejects_bad_input() {
        assert_eq!(
            quadratic(&zigzag(4), 3),
            Err(InvalidCurveInput::EvenPointCount { count: 4 })
        );
        assert_eq!(
            quadratic(&[], 3),
            Err(InvalidCurveInput::EvenPointCount { count: 0 })
        );
        assert_eq!(
            quadratic(&zigzag(1), 3),
            Err(InvalidCurveInput::TooFewPoints { count: 1, min: 3 })
        );
        assert_eq!(
            quadratic(&zigzag(3), 2),
            Err(InvalidCurveInput::ResolutionTooLow {
                resolution: 2,
                min: MIN_RESOLUTION
            })
        );
    }

    #[test]
    fn cubic_rejects_bad_input() {
        assert_eq!(
            cubic(&zigzag(3), 3),
            Err(InvalidCurveInput::TooFewPoints { count: 3, min: 4 })
        );
        assert_eq!(
            cubic(&zigzag(5), 3),
            Err(InvalidCurveInput::MisalignedPointCount { count: 5 })
        );
        assert_eq!(
            cubic(&zigzag(6), 3),
            Err(InvalidCurveInput::MisalignedPointCount { count: 6 })
        );
        assert_eq!(
            cubic(&zigzag(7), 0),
            Err(InvalidCurveInput::ResolutionTooLow {
                resolution: 0,
                min: MIN_RESOLUTION
            })
        );
    }

    #[test]
    fn baking_is_idempotent() {
        let points = zigzag(10);
        assert_eq!(cubic(&points, 12).unwrap(), cubic(&points, 12).unwrap());
        let points = zigzag(9);
        assert_eq!(quadratic(&points, 7).unwrap(), quadratic(&points, 7).unwrap());
    }

    #[test]
    fn segment_counts() {
        assert_eq!(cubic_segment_count(0), 0);
        assert_eq!(cubic_segment_count(3), 0);
        assert_eq!(cubic_segment_count(4), 1);
        assert_eq!(cubic_segment_count(6), 1);
        assert_eq!(cubic_segment_count(7), 2);
        assert_eq!(cubic_segment_count(10), 3);
        assert_eq!(quadratic_segment_count(2), 0);
        assert_eq!(quadratic_segment_count(3), 1);
        assert_eq!(quadratic_segment_count(9), 4);
    }
}
