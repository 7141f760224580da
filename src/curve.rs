//! Editable composite Bezier curve.
//!
//! A [`Curve`] owns an ordered list of [`Point`]s and derives from them the
//! sequences a renderer needs: the control polygon for baking, the active
//! handles, the anchor-to-handle connector lines and the bare anchors.
//!
//! Which handles take part in the curve depends on the mode and on where the
//! point sits in the list:
//!
//! | mode      | first point  | interior points     | last point |
//! |-----------|--------------|---------------------|------------|
//! | cubic     | `handle_out` | `handle_in`, `handle_out` | `handle_in` |
//! | quadratic | `handle_out` | `handle_out`        | none       |

use alloc::vec::Vec;
use core::ops::{Index, IndexMut};
use core::slice;

use tinyvec::ArrayVec;

use super::bake;
use super::error::InvalidCurveInput;
use super::{NativeFloat, Point, PointType, Vec2};
use super::{DEFAULT_HANDLE_DISTANCE, DEFAULT_HIT_MARGIN, DEFAULT_RESOLUTION};

/// Kind of Bezier segments a [`Curve`] is baked into.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum BezierMode {
    #[default]
    Quadratic,
    Cubic,
}

// Parts a quadratic curve lets the editor grab, in hit-testing order.
const QUADRATIC_PARTS: [PointType; 2] = [PointType::Position, PointType::HandleOut];

/// Result of a successful [`Curve::hit_test`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CurveHit {
    /// Index of the hit point in the curve
    pub index: usize,
    pub part: PointType,
    /// Vector from the hit location to the exact part position
    pub offset: Vec2,
}

/// An ordered sequence of [`Point`]s baked as a quadratic or cubic curve.
///
/// Switching the mode never touches the points; a point count that does not
/// fit the new mode only surfaces as an error from [`Curve::bake`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Curve {
    points: Vec<Point>,
    is_cubic: bool,
}

impl Curve {
    pub fn new(mode: BezierMode) -> Self {
        Curve {
            points: Vec::new(),
            is_cubic: mode == BezierMode::Cubic,
        }
    }

    /// Create a curve starting out with `points`, in order.
    pub fn from_points<I>(mode: BezierMode, points: I) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        Curve {
            points: points.into_iter().collect(),
            is_cubic: mode == BezierMode::Cubic,
        }
    }

    pub fn mode(&self) -> BezierMode {
        if self.is_cubic {
            BezierMode::Cubic
        } else {
            BezierMode::Quadratic
        }
    }

    pub fn set_mode(&mut self, mode: BezierMode) {
        if mode != self.mode() {
            log::debug!("curve mode {:?} -> {:?}", self.mode(), mode);
        }
        self.is_cubic = mode == BezierMode::Cubic;
    }

    pub fn is_cubic(&self) -> bool {
        self.is_cubic
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> slice::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Point> {
        self.points.get_mut(index)
    }

    /// Append a new point at `(x, y)` with the default handle distance.
    pub fn add_point(&mut self, x: NativeFloat, y: NativeFloat) {
        self.add_point_with_distance(x, y, DEFAULT_HANDLE_DISTANCE)
    }

    /// Append a new point at `(x, y)` whose handles sit `distance` away on the x axis.
    pub fn add_point_with_distance(&mut self, x: NativeFloat, y: NativeFloat, distance: NativeFloat) {
        self.push(Point::with_distance(x, y, distance));
    }

    pub fn push(&mut self, point: Point) {
        self.points.push(point);
        log::debug!("point {} added at {:?}", self.points.len() - 1, point.position);
    }

    /// Insert `point` before `index`, appending if `index` is past the end.
    pub fn insert_point(&mut self, index: usize, point: Point) {
        let index = index.min(self.points.len());
        self.points.insert(index, point);
        log::debug!("point {} inserted at {:?}", index, point.position);
    }

    /// Remove and return the point at `index`, None if out of range.
    pub fn remove_point(&mut self, index: usize) -> Option<Point> {
        if index >= self.points.len() {
            return None;
        }
        let point = self.points.remove(index);
        log::debug!("point {} removed", index);
        Some(point)
    }

    /// [`hit_test_within`](Self::hit_test_within) using [`DEFAULT_HIT_MARGIN`].
    pub fn hit_test(&self, location: impl Into<Vec2>) -> Option<CurveHit> {
        self.hit_test_within(location, DEFAULT_HIT_MARGIN)
    }

    /// Hit-test every point in order and return the first hit.
    ///
    /// Quadratic curves never use `handle_in`, so it is not tested at all:
    /// a point is only hit on its position or `handle_out`, otherwise the
    /// search goes on with the next point.
    pub fn hit_test_within(&self, location: impl Into<Vec2>, margin: NativeFloat) -> Option<CurveHit> {
        let location = location.into();
        let parts: &[PointType] = if self.is_cubic {
            &PointType::ALL
        } else {
            &QUADRATIC_PARTS
        };
        self.points.iter().enumerate().find_map(|(index, point)| {
            let hit = point.hit_test_parts(location, margin, parts)?;
            Some(CurveHit {
                index,
                part: hit.part,
                offset: hit.offset,
            })
        })
    }

    /// Move `part` of the point at `index` to `location + offset`.
    /// Returns false if there is no such point.
    pub fn move_point(
        &mut self,
        index: usize,
        part: PointType,
        location: impl Into<Vec2>,
        offset: Vec2,
    ) -> bool {
        match self.points.get_mut(index) {
            Some(point) => {
                point.move_with_offset(part, location, offset);
                true
            }
            None => false,
        }
    }

    /// Index of the last point, None for an empty curve.
    pub fn last_index(&self) -> Option<usize> {
        self.points.len().checked_sub(1)
    }

    /// Handles of the point at `index` that take part in the curve, in path order.
    fn active_handles(&self, index: usize) -> ArrayVec<[PointType; 2]> {
        let mut parts = ArrayVec::new();
        let Some(last) = self.last_index() else {
            return parts;
        };
        if self.is_cubic {
            if index == 0 {
                parts.push(PointType::HandleOut);
            } else if index == last {
                parts.push(PointType::HandleIn);
            } else {
                parts.push(PointType::HandleIn);
                parts.push(PointType::HandleOut);
            }
        } else if index != last {
            parts.push(PointType::HandleOut);
        }
        parts
    }

    /// All handle positions that shape the curve.
    pub fn control_handles(&self) -> Vec<Vec2> {
        self.points
            .iter()
            .enumerate()
            .flat_map(|(i, point)| {
                self.active_handles(i)
                    .into_iter()
                    .map(move |part| point.part(part))
            })
            .collect()
    }

    /// `(anchor, handle)` pairs for every handle returned by [`control_handles`](Self::control_handles).
    pub fn control_lines(&self) -> Vec<(Vec2, Vec2)> {
        self.points
            .iter()
            .enumerate()
            .flat_map(|(i, point)| {
                self.active_handles(i)
                    .into_iter()
                    .map(move |part| (point.position, point.part(part)))
            })
            .collect()
    }

    /// The control polygon fed to the baker: every anchor with its active
    /// `handle_in` before it and its active `handle_out` after it.
    pub fn flattened_points(&self) -> Vec<Vec2> {
        let mut flat = Vec::with_capacity(self.points.len() * 3);
        for (i, point) in self.points.iter().enumerate() {
            let handles = self.active_handles(i);
            if handles.contains(&PointType::HandleIn) {
                flat.push(point.handle_in);
            }
            flat.push(point.position);
            if handles.contains(&PointType::HandleOut) {
                flat.push(point.handle_out);
            }
        }
        flat
    }

    /// Anchor positions in curve order.
    pub fn positions(&self) -> Vec<Vec2> {
        self.points.iter().map(|point| point.position).collect()
    }

    /// Number of segments the curve bakes into, 0 if the points do not form a bakeable polygon.
    pub fn segment_count(&self) -> usize {
        let count = self.flattened_points().len();
        if self.is_cubic {
            if count < 4 || (count - 4) % 3 != 0 {
                0
            } else {
                bake::cubic_segment_count(count)
            }
        } else if count % 2 == 0 {
            0
        } else {
            bake::quadratic_segment_count(count)
        }
    }

    /// Bake the curve into a polyline with `resolution` samples per segment.
    pub fn bake(&self, resolution: usize) -> Result<Vec<Vec2>, InvalidCurveInput> {
        let flat = self.flattened_points();
        let baked = if self.is_cubic {
            bake::cubic(&flat, resolution)
        } else {
            bake::quadratic(&flat, resolution)
        };
        baked.inspect_err(|err| log::debug!("{:?} curve not baked: {}", self.mode(), err))
    }

    /// [`bake`](Self::bake) with [`DEFAULT_RESOLUTION`].
    pub fn bake_default(&self) -> Result<Vec<Vec2>, InvalidCurveInput> {
        self.bake(DEFAULT_RESOLUTION)
    }
}

impl Index<usize> for Curve {
    type Output = Point;

    fn index(&self, index: usize) -> &Point {
        &self.points[index]
    }
}

impl IndexMut<usize> for Curve {
    fn index_mut(&mut self, index: usize) -> &mut Point {
        &mut self.points[index]
    }
}

impl<'a> IntoIterator for &'a Curve {
    type Item = &'a Point;
    type IntoIter = slice::Iter<'a, Point>;

    fn into_iter(self) -> slice::Iter<'a, Point> {
        self.points.iter()
    }
}
