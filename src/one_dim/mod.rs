//! Scalar interpolants over a strictly increasing knot vector.
//!
//! These are the per-axis building blocks for [`crate::SplineCurve`], and
//! are usable on their own for one-dimensional data. Both kinds own their
//! knots and solved coefficients, so evaluation is read-only and cheap to
//! share across threads.

pub mod cubic;
pub mod linear;

use num_traits::Float;

/// Endpoint constraint for a cubic spline.
///
/// Pinning the second derivative to zero at both ends (the default) gives
/// the classic "natural" spline; pinning the first derivative gives a
/// "clamped" spline with an imposed endpoint tangent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Boundary<T> {
    /// Impose the interpolant's first derivative at the endpoint.
    FirstDerivative(T),
    /// Impose the interpolant's second derivative at the endpoint.
    SecondDerivative(T),
}

impl<T: Float> Boundary<T> {
    /// Zero second derivative, i.e. the natural spline endpoint.
    pub fn natural() -> Self {
        Self::SecondDerivative(T::zero())
    }
}

impl<T: Float> Default for Boundary<T> {
    fn default() -> Self {
        Self::natural()
    }
}

/// Extrapolation flag
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Extrap {
    Inside,
    OutsideLow,
    OutsideHigh,
}

/// A one-dimensional interpolator over owned knots.
pub trait Interp1D<T: Float> {
    /// Evaluate the interpolant at an observation point.
    ///
    /// Observation points outside the knot span extrapolate according to
    /// the implementation's policy rather than erroring.
    fn eval_one(&self, x: T) -> T;

    /// Evaluate the interpolant at a set of observation points.
    ///
    /// # Errors
    /// * If the observation and output slices have different lengths
    #[inline]
    fn eval(&self, xs: &[T], out: &mut [T]) -> Result<(), &'static str> {
        if xs.len() != out.len() {
            return Err("Length mismatch");
        }

        for i in 0..xs.len() {
            out[i] = self.eval_one(xs[i]);
        }

        Ok(())
    }

    /// Evaluate the interpolant at a set of observation points, allocating
    /// for the output values for convenience.
    #[inline]
    fn eval_alloc(&self, xs: &[T]) -> Vec<T> {
        xs.iter().map(|&x| self.eval_one(x)).collect()
    }
}

/// Validate a knot/value pair for either interpolant kind.
pub(crate) fn check_knots<T: Float>(ts: &[T], ys: &[T]) -> Result<(), &'static str> {
    if ts.len() != ys.len() {
        return Err("Length mismatch");
    }
    if ts.len() < 2 {
        return Err("At least two knots are required");
    }
    let increasing = ts.windows(2).all(|w| w[1] > w[0]);
    if !increasing {
        return Err("Knots must be strictly increasing");
    }

    Ok(())
}

/// Get the index of the segment whose span is used to evaluate at `x`,
/// via bisection search, clipped to the interior so that observation
/// points outside the knot span resolve to the nearest end segment.
#[inline]
pub(crate) fn segment_index<T: Float>(ts: &[T], x: T) -> (usize, Extrap) {
    let i = ((ts.partition_point(|v| *v < x) as isize - 1).max(0) as usize).min(ts.len() - 2);

    let extrap = match x {
        x if x < ts[0] => Extrap::OutsideLow,
        x if x > ts[ts.len() - 1] => Extrap::OutsideHigh,
        _ => Extrap::Inside,
    };

    (i, extrap)
}

#[cfg(test)]
mod test {
    use super::{check_knots, segment_index, Extrap};

    #[test]
    fn test_segment_index() {
        let ts = [0.0_f64, 1.0, 2.5, 3.0];

        assert_eq!(segment_index(&ts, -1.0), (0, Extrap::OutsideLow));
        assert_eq!(segment_index(&ts, 0.0), (0, Extrap::Inside));
        assert_eq!(segment_index(&ts, 0.5), (0, Extrap::Inside));
        // A knot resolves to the segment on its left
        assert_eq!(segment_index(&ts, 1.0), (0, Extrap::Inside));
        assert_eq!(segment_index(&ts, 2.7), (2, Extrap::Inside));
        assert_eq!(segment_index(&ts, 3.0), (2, Extrap::Inside));
        assert_eq!(segment_index(&ts, 4.0), (2, Extrap::OutsideHigh));
    }

    #[test]
    fn test_check_knots() {
        assert!(check_knots(&[0.0, 1.0], &[1.0, 2.0]).is_ok());
        assert_eq!(
            check_knots(&[0.0, 1.0], &[1.0]),
            Err("Length mismatch")
        );
        assert_eq!(
            check_knots::<f64>(&[0.0], &[1.0]),
            Err("At least two knots are required")
        );
        assert_eq!(
            check_knots(&[0.0, 0.0, 1.0], &[1.0, 2.0, 3.0]),
            Err("Knots must be strictly increasing")
        );
        // A NaN knot can never satisfy the ordering requirement
        assert_eq!(
            check_knots(&[0.0, f64::NAN, 1.0], &[1.0, 2.0, 3.0]),
            Err("Knots must be strictly increasing")
        );
    }
}
