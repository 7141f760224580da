//! Editable Bezier anchor with two absolute control handles.

use super::{NativeFloat, Vec2, DEFAULT_HANDLE_DISTANCE, DEFAULT_HIT_MARGIN};

/// Defines how the sibling handle reacts when one handle of a [`Point`] is moved.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum PointMode {
    /// Handles are independent (a corner).
    Cusp,
    /// The sibling handle stays collinear on the opposite side and keeps its own length.
    Smooth,
    /// The sibling handle mirrors the moved one in direction and length.
    #[default]
    Symmetrical,
}

/// Identifies one of the three parts of a [`Point`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum PointType {
    #[default]
    Position,
    HandleIn,
    HandleOut,
}

impl PointType {
    /// Hit-testing order
    pub const ALL: [PointType; 3] = [PointType::Position, PointType::HandleIn, PointType::HandleOut];
}

/// Result of a successful [`Point::hit_test`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointHit {
    /// Which part was hit
    pub part: PointType,
    /// Vector from the hit location to the exact part position. Passing it back
    /// to [`Point::move_with_offset`] keeps the part from jumping under the cursor.
    pub offset: Vec2,
}

/// One anchor of a composite Bezier curve.
///
/// Handles are stored as absolute positions, not as offsets from the anchor.
/// The [`PointMode`] is only consulted while a handle is being moved, so
/// changing it never re-snaps the handles.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point {
    pub position: Vec2,
    /// Control handle shaping the curve before the anchor
    pub handle_in: Vec2,
    /// Control handle shaping the curve after the anchor
    pub handle_out: Vec2,
    pub mode: PointMode,
}

impl Point {
    /// Anchor at `(x, y)` with handles [`DEFAULT_HANDLE_DISTANCE`] away on the x axis.
    pub fn new(x: NativeFloat, y: NativeFloat) -> Self {
        Point::with_distance(x, y, DEFAULT_HANDLE_DISTANCE)
    }

    /// Anchor at `(x, y)` with `handle_in` at `(x - distance, y)` and
    /// `handle_out` at `(x + distance, y)`.
    pub fn with_distance(x: NativeFloat, y: NativeFloat, distance: NativeFloat) -> Self {
        Point {
            position: Vec2::new(x, y),
            handle_in: Vec2::new(x - distance, y),
            handle_out: Vec2::new(x + distance, y),
            mode: PointMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: PointMode) -> Self {
        self.mode = mode;
        self
    }

    /// Absolute position of `part`
    pub fn part(&self, part: PointType) -> Vec2 {
        match part {
            PointType::Position => self.position,
            PointType::HandleIn => self.handle_in,
            PointType::HandleOut => self.handle_out,
        }
    }

    /// [`hit_test_within`](Self::hit_test_within) using [`DEFAULT_HIT_MARGIN`].
    pub fn hit_test(&self, location: impl Into<Vec2>) -> Option<PointHit> {
        self.hit_test_within(location, DEFAULT_HIT_MARGIN)
    }

    /// Test position, handle_in and handle_out in that order and return the
    /// first one within `margin` of `location` on both axes.
    pub fn hit_test_within(&self, location: impl Into<Vec2>, margin: NativeFloat) -> Option<PointHit> {
        self.hit_test_parts(location, margin, &PointType::ALL)
    }

    /// Like [`hit_test_within`](Self::hit_test_within) but only considers
    /// `parts`, tested in the given order.
    pub fn hit_test_parts(
        &self,
        location: impl Into<Vec2>,
        margin: NativeFloat,
        parts: &[PointType],
    ) -> Option<PointHit> {
        let location = location.into();
        parts.iter().find_map(|&part| {
            let at = self.part(part);
            if at.within(location, margin) {
                Some(PointHit {
                    part,
                    offset: at - location,
                })
            } else {
                None
            }
        })
    }

    /// [`move_with_offset`](Self::move_with_offset) without an offset.
    pub fn move_to(&mut self, part: PointType, location: impl Into<Vec2>) {
        self.move_with_offset(part, location, Vec2::ZERO)
    }

    /// Move `part` to `location + offset`.
    ///
    /// Moving the position translates both handles along with it. Moving a
    /// handle updates its sibling according to the point's mode.
    pub fn move_with_offset(&mut self, part: PointType, location: impl Into<Vec2>, offset: Vec2) {
        let target = location.into() + offset;
        match part {
            PointType::Position => {
                let delta = target - self.position;
                self.position += delta;
                self.handle_in += delta;
                self.handle_out += delta;
            }
            PointType::HandleIn => {
                self.handle_out = self.sibling(target, self.handle_out);
                self.handle_in = target;
            }
            PointType::HandleOut => {
                self.handle_in = self.sibling(target, self.handle_in);
                self.handle_out = target;
            }
        }
    }

    // New position of the handle opposite to one being moved to `moved`.
    fn sibling(&self, moved: Vec2, sibling: Vec2) -> Vec2 {
        let displacement = moved - self.position;
        match self.mode {
            PointMode::Cusp => sibling,
            PointMode::Smooth => {
                let distance = (sibling - self.position).length();
                self.position + (-displacement).normalize(distance)
            }
            PointMode::Symmetrical => self.position - displacement,
        }
    }
}

impl Default for Point {
    fn default() -> Self {
        Point::new(0.0, 0.0)
    }
}
