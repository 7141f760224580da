//! Baking and interactive editing of quadratic and cubic Bézier curves.
//!
//! A [`Curve`] owns an ordered list of editable [`Point`]s (an anchor plus two
//! absolute control handles). Its baking views flatten the points into a
//! control polygon which the free functions [`quadratic`] and [`cubic`] turn
//! into a densely sampled polyline using De Casteljau's algorithm.
//!
//! ```rust
//! use bezedit::{BezierMode, Curve, Vec2};
//!
//! let mut curve = Curve::new(BezierMode::Cubic);
//! curve.add_point(0.0, 0.0);
//! curve.add_point(100.0, 0.0);
//!
//! let polyline = curve.bake(8).unwrap();
//! assert_eq!(polyline.len(), 9);
//! assert_eq!(polyline[8], Vec2::new(100.0, 0.0));
//! ```
//!
//! The crate is `#![no_std]` and only needs `alloc` for the point list and the
//! baked output.
#![no_std]

extern crate alloc;

pub mod bake;
pub mod cubic_bezier;
pub mod curve;
pub mod error;
pub mod point;
pub mod quadratic_bezier;
pub mod spline;
pub mod vec2;

pub use bake::{cubic, cubic_segment_count, quadratic, quadratic_segment_count};
pub use cubic_bezier::CubicBezier;
pub use curve::{BezierMode, Curve, CurveHit};
pub use error::InvalidCurveInput;
pub use point::{Point, PointHit, PointMode, PointType};
pub use quadratic_bezier::QuadraticBezier;
pub use spline::Spline;
pub use vec2::{length, lerp, lerp2, negate, normalize, Vec2};

/// Scalar type used for all coordinates.
#[cfg(not(feature = "f32"))]
pub type NativeFloat = f64;
/// Scalar type used for all coordinates.
#[cfg(feature = "f32")]
pub type NativeFloat = f32;

/// Tolerance for floating point comparisons
pub const EPSILON: NativeFloat = 1e-6;

/// Axis aligned distance between a new anchor and each of its handles.
pub const DEFAULT_HANDLE_DISTANCE: NativeFloat = 10.0;

/// Per-axis tolerance used when hit-testing anchors and handles.
pub const DEFAULT_HIT_MARGIN: NativeFloat = 2.0;

/// Smallest number of samples per segment the bakers accept.
pub const MIN_RESOLUTION: usize = 3;

/// Samples per segment used by [`Curve::bake_default`].
pub const DEFAULT_RESOLUTION: usize = MIN_RESOLUTION;
