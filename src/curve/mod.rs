//! Curves through ordered N-dimensional points, parameterized by
//! cumulative chord length.
//!
//! An N-D curve is represented in parametric form, x1(t), x2(t), x3(t)...,
//! as one scalar interpolant per coordinate axis over a shared knot vector
//! of cumulative Euclidean distances. The curve layer is dimension-agnostic:
//! anything exposing indexed component access via [`CurvePoint`] can be a
//! point, and per-axis solvers are fanned out at construction.
//!
//! ```rust
//! use curvn::{CurveOptions, SplineCurve};
//!
//! // An ascending helix, sampled coarsely
//! let points: Vec<[f64; 3]> = (0..20)
//!     .map(|i| {
//!         let theta = i as f64 * 0.4;
//!         [theta.cos(), theta.sin(), 0.1 * theta]
//!     })
//!     .collect();
//!
//! let curve: SplineCurve<f64, [f64; 3]> =
//!     SplineCurve::with_options(&points, CurveOptions::default()).unwrap();
//!
//! // The curve passes through every input point
//! let u = curve.params()[7] / curve.total_length();
//! let p = curve.eval_one(u);
//! (0..3).for_each(|j| assert!((p[j] - points[7][j]).abs() < 1e-9));
//! ```

use itertools::Itertools;
use num_traits::Float;

use crate::one_dim::{cubic::CubicSpline1D, linear::LinearSpline1D, Boundary, Interp1D};

/// A fixed- or runtime-dimensional point with indexed component access.
///
/// Implemented for `[T; N]` and `Vec<T>`; callers with their own point
/// types implement this to use them directly.
pub trait CurvePoint<T: Float>: Sized {
    /// Number of coordinate components.
    fn dim(&self) -> usize;

    /// Component along axis `i`. May panic if `i >= self.dim()`.
    fn coord(&self, i: usize) -> T;

    /// Assemble a point of dimensionality `dim` from per-axis components.
    fn from_coords(dim: usize, f: impl FnMut(usize) -> T) -> Self;
}

impl<T: Float, const N: usize> CurvePoint<T> for [T; N] {
    #[inline]
    fn dim(&self) -> usize {
        N
    }

    #[inline]
    fn coord(&self, i: usize) -> T {
        self[i]
    }

    #[inline]
    fn from_coords(_dim: usize, f: impl FnMut(usize) -> T) -> Self {
        core::array::from_fn(f)
    }
}

impl<T: Float> CurvePoint<T> for Vec<T> {
    #[inline]
    fn dim(&self) -> usize {
        self.len()
    }

    #[inline]
    fn coord(&self, i: usize) -> T {
        self[i]
    }

    #[inline]
    fn from_coords(dim: usize, f: impl FnMut(usize) -> T) -> Self {
        (0..dim).map(f).collect()
    }
}

/// Euclidean distance between two points of the same dimensionality.
#[inline]
pub fn distance<T: Float, P: CurvePoint<T>>(a: &P, b: &P) -> T {
    let mut acc = T::zero();
    for i in 0..a.dim() {
        let d = a.coord(i) - b.coord(i);
        acc = acc + d * d;
    }

    acc.sqrt()
}

/// Full configuration for a [`SplineCurve`], taken once at construction.
///
/// The default is a natural cubic spline: zero second derivative at both
/// ends, cubic continuation outside `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveOptions<T> {
    /// Endpoint constraint at the start of the curve, applied to every axis.
    pub boundary_low: Boundary<T>,

    /// Endpoint constraint at the end of the curve, applied to every axis.
    pub boundary_high: Boundary<T>,

    /// Extrapolate along the endpoint tangents instead of continuing the
    /// end segments' cubics. No effect in linear mode, where the end
    /// segments are their own tangents.
    pub linear_extrapolation: bool,

    /// Cubic spline per axis when true; piecewise-linear blend when false.
    /// Linear mode ignores the boundary constraints.
    pub cubic: bool,
}

impl<T: Float> Default for CurveOptions<T> {
    fn default() -> Self {
        Self {
            boundary_low: Boundary::natural(),
            boundary_high: Boundary::natural(),
            linear_extrapolation: false,
            cubic: true,
        }
    }
}

/// Per-axis interpolants, uniform in kind across the curve
enum Axes<T> {
    Cubic(Vec<CubicSpline1D<T>>),
    Linear(Vec<LinearSpline1D<T>>),
}

/// A curve through an ordered point sequence, interpolating every input
/// point, parameterized by normalized chord length.
///
/// Evaluation maps a parameter `u` — nominally in `[0, 1]`, with values
/// outside engaging the configured extrapolation policy — to the arc
/// position `u * total_length()`, evaluates each axis's interpolant there,
/// and reassembles a point. Evaluation is read-only; one constructed curve
/// may be shared freely across concurrent readers.
///
/// The input points must already be ordered along the intended traversal;
/// the constructor neither sorts nor detects misordering.
pub struct SplineCurve<T, P> {
    dim: usize,

    /// Chord-length parameter of each input point, starting at zero
    params: Vec<T>,

    /// Sum of consecutive point distances, equal to the last entry of params
    total_length: T,

    axes: Axes<T>,

    point: core::marker::PhantomData<P>,
}

impl<T: Float, P: CurvePoint<T>> SplineCurve<T, P> {
    /// Build a natural cubic spline curve through the points, using
    /// [`CurveOptions::default`].
    ///
    /// # Errors
    /// * If there are fewer than two points
    /// * If any point's dimensionality differs from the first point's
    /// * If any two consecutive points coincide
    pub fn new(points: &[P]) -> Result<Self, &'static str> {
        Self::with_options(points, CurveOptions::default())
    }

    /// Build a curve through the points with explicit boundary and mode
    /// configuration, using O(dim * n) time and storage.
    ///
    /// # Errors
    /// * If there are fewer than two points
    /// * If any point's dimensionality differs from the first point's
    /// * If any two consecutive points coincide, which would collapse the
    ///   chord-length parameterization
    pub fn with_options(points: &[P], options: CurveOptions<T>) -> Result<Self, &'static str> {
        if points.len() < 2 {
            return Err("At least two points are required");
        }

        let dim = points[0].dim();
        if points.iter().any(|p| p.dim() != dim) {
            return Err("Dimension mismatch");
        }

        // Cumulative chord length gives the shared knot vector
        let mut params = Vec::with_capacity(points.len());
        let mut t = T::zero();
        params.push(t);
        for (p, q) in points.iter().tuple_windows() {
            let d = distance(p, q);
            if !(d > T::zero()) {
                return Err("Consecutive points must not coincide");
            }
            t = t + d;
            params.push(t);
        }
        let total_length = t;

        // Fan out one scalar interpolant per axis over the shared knots
        let mut coords = vec![T::zero(); points.len()];
        let axes = if options.cubic {
            let mut splines = Vec::with_capacity(dim);
            for j in 0..dim {
                (0..points.len()).for_each(|i| coords[i] = points[i].coord(j));
                splines.push(CubicSpline1D::new(
                    &params,
                    &coords,
                    options.boundary_low,
                    options.boundary_high,
                    options.linear_extrapolation,
                )?);
            }
            Axes::Cubic(splines)
        } else {
            let mut splines = Vec::with_capacity(dim);
            for j in 0..dim {
                (0..points.len()).for_each(|i| coords[i] = points[i].coord(j));
                splines.push(LinearSpline1D::new(&params, &coords)?);
            }
            Axes::Linear(splines)
        };

        Ok(Self {
            dim,
            params,
            total_length,
            axes,
            point: core::marker::PhantomData,
        })
    }

    /// Evaluate the curve position at normalized parameter `u`.
    ///
    /// `u = 0` is the first input point and `u = 1` the last; values
    /// outside `[0, 1]` extrapolate per the construction options.
    #[inline]
    pub fn eval_one(&self, u: T) -> P {
        let x = u * self.total_length;
        match &self.axes {
            Axes::Cubic(splines) => P::from_coords(self.dim, |j| splines[j].eval_one(x)),
            Axes::Linear(splines) => P::from_coords(self.dim, |j| splines[j].eval_one(x)),
        }
    }

    /// Evaluate the curve at a set of parameters.
    ///
    /// # Errors
    /// * If the parameter and output slices have different lengths
    pub fn eval(&self, us: &[T], out: &mut [P]) -> Result<(), &'static str> {
        if us.len() != out.len() {
            return Err("Length mismatch");
        }

        for i in 0..us.len() {
            out[i] = self.eval_one(us[i]);
        }

        Ok(())
    }

    /// Evaluate the curve at a set of parameters, allocating for the
    /// output points for convenience.
    pub fn eval_alloc(&self, us: &[T]) -> Vec<P> {
        us.iter().map(|&u| self.eval_one(u)).collect()
    }

    /// Dimensionality of the input and output points.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Sum of consecutive input point distances.
    pub fn total_length(&self) -> T {
        self.total_length
    }

    /// Chord-length parameter of each input point: `params()[0]` is zero
    /// and `params()[i] / total_length()` is the normalized parameter at
    /// which the curve reproduces input point `i`.
    pub fn params(&self) -> &[T] {
        &self.params
    }
}
