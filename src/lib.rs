//! Spline curve interpolation through ordered N-dimensional points,
//! parameterized by cumulative chord length.
//!
//! A curve through points `p_0, p_1, ..., p_{n-1}` is represented in
//! parametric form: one scalar interpolant per coordinate axis, all sharing
//! a common knot vector built from the cumulative Euclidean distance along
//! the point sequence. Evaluating at a normalized parameter `u` in `[0, 1]`
//! evaluates every axis at `u * total_length` and reassembles a point, so
//! `u` advances with actual path length rather than sample index.
//!
//! Each axis is either a classic cubic spline (continuous second derivative,
//! natural or clamped endpoints, solved from a tridiagonal system) or a
//! piecewise-linear blend. The scalar interpolants in [`one_dim`] are usable
//! on their own for single-valued data.
//!
//! # Example: curve through 2D waypoints
//! ```rust
//! use curvn::SplineCurve;
//!
//! let points = [[0.0_f64, 0.0], [1.0, 1.0], [2.0, 0.0]];
//! let curve: SplineCurve<f64, [f64; 2]> = SplineCurve::new(&points).unwrap();
//!
//! // Sample the curve at a fixed resolution for display
//! let resolution = 100;
//! let polyline: Vec<[f64; 2]> = (0..resolution)
//!     .map(|i| curve.eval_one(i as f64 / (resolution - 1) as f64))
//!     .collect();
//!
//! assert_eq!(polyline.len(), resolution);
//! // The two chords have equal length, so the middle sample falls on p_1
//! let mid = curve.eval_one(0.5);
//! assert!((mid[0] - 1.0).abs() < 1e-12 && (mid[1] - 1.0).abs() < 1e-12);
//! ```
//!
//! # Example: clamped scalar spline
//! ```rust
//! use curvn::{Boundary, CubicSpline1D, Interp1D};
//!
//! let ts = [0.0_f64, 1.0, 2.0, 3.0];
//! let ys = [0.0_f64, 1.0, 0.0, 1.0];
//!
//! // Pin the tangent flat at both ends
//! let spline = CubicSpline1D::new(
//!     &ts,
//!     &ys,
//!     Boundary::FirstDerivative(0.0),
//!     Boundary::FirstDerivative(0.0),
//!     true, // extrapolate along the boundary tangents
//! )
//! .unwrap();
//!
//! assert!(spline.deriv_one(0.0).abs() < 1e-12);
//! assert!((spline.eval_one(-1.0) - ys[0]).abs() < 1e-12);
//! ```
// These "needless" range loops are a significant speedup
#![allow(clippy::needless_range_loop)]

pub mod one_dim;
pub use one_dim::{cubic::CubicSpline1D, linear::LinearSpline1D, Boundary, Interp1D};

pub mod curve;
pub use curve::{distance, CurveOptions, CurvePoint, SplineCurve};

pub mod utils;

#[cfg(test)]
pub(crate) mod testing;
