//! Piecewise-linear interpolation over a strictly increasing knot vector.

use num_traits::Float;

use super::{check_knots, segment_index, Interp1D};

/// Simple linear interpolation / extrapolation.
///
/// Observation points outside the knot span continue the end segment's
/// slope; a line's tangent is the line itself, so there is no separate
/// extrapolation policy to configure.
pub struct LinearSpline1D<T> {
    ts: Vec<T>,
    ys: Vec<T>,
}

impl<T: Float> LinearSpline1D<T> {
    /// Build a new interpolant, copying the knots and values.
    ///
    /// # Errors
    /// * If the knot and value lengths do not match
    /// * If there are fewer than two knots
    /// * If the knots are not strictly increasing
    pub fn new(ts: &[T], ys: &[T]) -> Result<Self, &'static str> {
        check_knots(ts, ys)?;

        Ok(Self {
            ts: ts.to_vec(),
            ys: ys.to_vec(),
        })
    }
}

impl<T: Float> Interp1D<T> for LinearSpline1D<T> {
    #[inline]
    fn eval_one(&self, x: T) -> T {
        let (i, _extrap) = segment_index(&self.ts, x);

        let slope = (self.ys[i + 1] - self.ys[i]) / (self.ts[i + 1] - self.ts[i]);
        self.ys[i] + slope * (x - self.ts[i])
    }
}

#[cfg(test)]
mod test {
    use super::LinearSpline1D;
    use crate::one_dim::Interp1D;
    use crate::utils::linspace;

    /// Interpolate on a hat-shaped function to make sure that the segment
    /// indexing is aligned properly; extrapolation on either side continues
    /// the hat's end slopes.
    #[test]
    fn test_interp_hat_func() {
        fn hat_func(x: f64) -> f64 {
            if x <= 1.0 {
                x
            } else {
                2.0 - x
            }
        }

        let ts = (0..3).map(|x| x as f64).collect::<Vec<f64>>();
        let ys = (0..3).map(|x| hat_func(x as f64)).collect::<Vec<f64>>();
        let obs = linspace(-2.0, 4.0, 100);

        let interpolator = LinearSpline1D::new(&ts, &ys).unwrap();

        (0..obs.len()).for_each(|i| {
            assert_eq!(hat_func(obs[i]), interpolator.eval_one(obs[i]));
        })
    }

    /// The blend between two consecutive knots is exactly affine.
    #[test]
    fn test_affine_blend() {
        let ts = [0.0_f64, 1.0, 3.0];
        let ys = [2.0_f64, -1.0, 5.0];
        let interpolator = LinearSpline1D::new(&ts, &ys).unwrap();

        for frac in linspace(0.0, 1.0, 11) {
            let x = ts[1] + frac * (ts[2] - ts[1]);
            let expected = ys[1] + frac * (ys[2] - ys[1]);
            assert!((interpolator.eval_one(x) - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(LinearSpline1D::new(&[0.0, 1.0], &[0.0]).is_err());
        assert!(LinearSpline1D::<f64>::new(&[0.0], &[0.0]).is_err());
        assert!(LinearSpline1D::new(&[0.0, 1.0, 0.5], &[0.0, 1.0, 2.0]).is_err());
    }
}
