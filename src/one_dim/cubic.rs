//! Cubic spline interpolation with configurable endpoint conditions.
//!
//! The interpolant has a continuous second derivative across every knot,
//! which is solved for at construction time from the classic tridiagonal
//! continuity system plus the two endpoint constraints. Segment `i` covers
//! `[ts[i], ts[i+1]]` and evaluates as
//! `ys[i] + c[i]*h + b[i]*h^2 + a[i]*h^3` with `h = x - ts[i]`.
//!
//! References
//! * https://en.wikipedia.org/wiki/Spline_interpolation

use num_traits::Float;

use super::{check_knots, segment_index, Boundary, Extrap, Interp1D};

/// A natural or clamped cubic spline over a strictly increasing knot vector.
///
/// Knots and values are copied in, and the per-segment coefficients are
/// solved once at construction in O(n) time and storage. Evaluation locates
/// the containing segment by bisection, O(log n).
///
/// Observation points outside the knot span extrapolate: along the endpoint
/// tangent when built with `linear_extrapolation`, otherwise by continuing
/// the nearest segment's cubic polynomial past its span.
pub struct CubicSpline1D<T> {
    /// Knot locations, strictly increasing
    ts: Vec<T>,

    /// Values at each knot
    ys: Vec<T>,

    /// Per-segment polynomial coefficients, each of size ts.len() - 1
    a: Vec<T>,
    b: Vec<T>,
    c: Vec<T>,

    /// Interpolant tangents at the two endpoints
    slope_low: T,
    slope_high: T,

    linear_extrapolation: bool,
}

impl<T: Float> CubicSpline1D<T> {
    /// Build a new spline, solving for segment coefficients that satisfy
    /// continuity of the second derivative at interior knots and the two
    /// endpoint constraints.
    ///
    /// With exactly two knots the interpolant degenerates to the straight
    /// line through them regardless of the boundary configuration.
    ///
    /// # Errors
    /// * If the knot and value lengths do not match
    /// * If there are fewer than two knots
    /// * If the knots are not strictly increasing
    pub fn new(
        ts: &[T],
        ys: &[T],
        low: Boundary<T>,
        high: Boundary<T>,
        linear_extrapolation: bool,
    ) -> Result<Self, &'static str> {
        check_knots(ts, ys)?;

        let one = T::one();
        let two = one + one;
        let three = two + one;

        let n = ts.len();
        let nseg = n - 1;

        let mut a = vec![T::zero(); nseg];
        let mut b = vec![T::zero(); nseg];
        let mut c = vec![T::zero(); nseg];

        let (slope_low, slope_high);

        if n == 2 {
            // Degenerate straight line; the boundary conditions are moot
            let slope = (ys[1] - ys[0]) / (ts[1] - ts[0]);
            c[0] = slope;
            slope_low = slope;
            slope_high = slope;
        } else {
            // Solve for `sigma[i]`, half the second derivative at knot `i`,
            // from the tridiagonal continuity system. Row 0 and row n-1 are
            // the endpoint constraints; interior rows equate the second
            // derivative of adjacent segments at their shared knot.
            let mut sub = vec![T::zero(); n];
            let mut diag = vec![T::zero(); n];
            let mut sup = vec![T::zero(); n];
            let mut rhs = vec![T::zero(); n];

            for i in 1..n - 1 {
                let h0 = ts[i] - ts[i - 1];
                let h1 = ts[i + 1] - ts[i];
                sub[i] = h0 / three;
                diag[i] = two * (h0 + h1) / three;
                sup[i] = h1 / three;
                rhs[i] = (ys[i + 1] - ys[i]) / h1 - (ys[i] - ys[i - 1]) / h0;
            }

            match low {
                Boundary::SecondDerivative(v) => {
                    diag[0] = two;
                    rhs[0] = v;
                }
                Boundary::FirstDerivative(v) => {
                    let h = ts[1] - ts[0];
                    diag[0] = two * h;
                    sup[0] = h;
                    rhs[0] = three * ((ys[1] - ys[0]) / h - v);
                }
            }

            match high {
                Boundary::SecondDerivative(v) => {
                    diag[n - 1] = two;
                    rhs[n - 1] = v;
                }
                Boundary::FirstDerivative(v) => {
                    let h = ts[n - 1] - ts[n - 2];
                    sub[n - 1] = h;
                    diag[n - 1] = two * h;
                    rhs[n - 1] = three * (v - (ys[n - 1] - ys[n - 2]) / h);
                }
            }

            let sigma = solve_tridiagonal(&sub, &mut diag, &sup, &mut rhs);

            for i in 0..nseg {
                let h = ts[i + 1] - ts[i];
                a[i] = (sigma[i + 1] - sigma[i]) / (three * h);
                b[i] = sigma[i];
                c[i] = (ys[i + 1] - ys[i]) / h - h * (two * sigma[i] + sigma[i + 1]) / three;
            }

            slope_low = c[0];
            let h = ts[n - 1] - ts[n - 2];
            slope_high = c[nseg - 1] + (two * b[nseg - 1] + three * a[nseg - 1] * h) * h;
        }

        Ok(Self {
            ts: ts.to_vec(),
            ys: ys.to_vec(),
            a,
            b,
            c,
            slope_low,
            slope_high,
            linear_extrapolation,
        })
    }

    /// Build a natural spline: zero second derivative at both ends, cubic
    /// continuation outside the knot span.
    pub fn natural(ts: &[T], ys: &[T]) -> Result<Self, &'static str> {
        Self::new(ts, ys, Boundary::natural(), Boundary::natural(), false)
    }

    /// First derivative of the interpolant at an observation point,
    /// consistent with the extrapolation policy.
    pub fn deriv_one(&self, x: T) -> T {
        let one = T::one();
        let two = one + one;
        let three = two + one;

        let (i, extrap) = segment_index(&self.ts, x);

        if self.linear_extrapolation {
            match extrap {
                Extrap::OutsideLow => return self.slope_low,
                Extrap::OutsideHigh => return self.slope_high,
                Extrap::Inside => {}
            }
        }

        let h = x - self.ts[i];
        self.c[i] + (two * self.b[i] + three * self.a[i] * h) * h
    }
}

impl<T: Float> Interp1D<T> for CubicSpline1D<T> {
    #[inline]
    fn eval_one(&self, x: T) -> T {
        let (i, extrap) = segment_index(&self.ts, x);

        if self.linear_extrapolation {
            match extrap {
                Extrap::OutsideLow => {
                    return self.ys[0] + self.slope_low * (x - self.ts[0]);
                }
                Extrap::OutsideHigh => {
                    let n = self.ts.len();
                    return self.ys[n - 1] + self.slope_high * (x - self.ts[n - 1]);
                }
                Extrap::Inside => {}
            }
        }

        // Inside the span, or continuing the end segment's polynomial
        let h = x - self.ts[i];
        self.ys[i] + ((self.a[i] * h + self.b[i]) * h + self.c[i]) * h
    }
}

/// Thomas algorithm for a tridiagonal system with sub/main/super diagonals
/// all stored at row index. The system solved here is diagonally dominant
/// for strictly increasing knots, so no pivoting is needed.
///
/// Consumes `diag` and `rhs` as scratch storage.
fn solve_tridiagonal<T: Float>(sub: &[T], diag: &mut [T], sup: &[T], rhs: &mut [T]) -> Vec<T> {
    let n = diag.len();

    for i in 1..n {
        let w = sub[i] / diag[i - 1];
        diag[i] = diag[i] - w * sup[i - 1];
        rhs[i] = rhs[i] - w * rhs[i - 1];
    }

    let mut out = vec![T::zero(); n];
    out[n - 1] = rhs[n - 1] / diag[n - 1];
    for i in (0..n - 1).rev() {
        out[i] = (rhs[i] - sup[i] * out[i + 1]) / diag[i];
    }

    out
}
