/// Ordinary least squares fit `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Mean-centred moments shared by [`fit`] and [`correlation`].
#[derive(Debug)]
struct Moments {
    n: f64,
    mean_x: f64,
    mean_y: f64,
    sxx: f64,
    syy: f64,
    sxy: f64,
    /// Raw Σx² and Σy², the scale the spreads are compared against.
    xx: f64,
    yy: f64,
}

impl Moments {
    fn of(xs: &[f64], ys: &[f64]) -> Self {
        let n = xs.len() as f64;
        let mean_x = xs.iter().sum::<f64>() / n;
        let mean_y = ys.iter().sum::<f64>() / n;
        xs.iter().zip(ys).fold(
            Moments {
                n,
                mean_x,
                mean_y,
                sxx: 0.0,
                syy: 0.0,
                sxy: 0.0,
                xx: 0.0,
                yy: 0.0,
            },
            |m, (&x, &y)| {
                let (dx, dy) = (x - mean_x, y - mean_y);
                Moments {
                    sxx: m.sxx + dx * dx,
                    syy: m.syy + dy * dy,
                    sxy: m.sxy + dx * dy,
                    xx: m.xx + x * x,
                    yy: m.yy + y * y,
                    ..m
                }
            },
        )
    }

    /// Identical values still leave a rounding residue in the centred sum.
    fn flat(spread: f64, scale: f64) -> bool {
        spread.is_nan() || spread <= f64::EPSILON * scale
    }

    fn x_is_flat(&self) -> bool {
        Self::flat(self.sxx, self.xx)
    }

    fn y_is_flat(&self) -> bool {
        Self::flat(self.syy, self.yy)
    }
}

/// Fit a trend line through `(xs[i], ys[i])`.
///
/// `None` means "not drawable": fewer than two points, mismatched lengths,
/// all x identical, or a non-finite result.
pub fn fit(xs: &[f64], ys: &[f64]) -> Option<LinearFit> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }
    let m = Moments::of(xs, ys);
    if m.x_is_flat() {
        return None;
    }
    let slope = m.sxy / m.sxx;
    let intercept = m.mean_y - slope * m.mean_x;

    (slope.is_finite() && intercept.is_finite()).then_some(LinearFit { slope, intercept })
}

/// Pearson correlation coefficient, NaN when undefined.
pub fn correlation(xs: &[f64], ys: &[f64]) -> f64 {
    if xs.len() != ys.len() || xs.len() < 2 {
        return f64::NAN;
    }
    let m = Moments::of(xs, ys);
    if m.x_is_flat() || m.y_is_flat() {
        return f64::NAN;
    }
    let denom = (m.sxx * m.syy).sqrt();
    if !denom.is_finite() {
        return f64::NAN;
    }
    (m.sxy / denom).clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn exact_line() {
        let f = fit(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
        assert!((f.slope - 2.0).abs() < EPS);
        assert!(f.intercept.abs() < EPS);
        assert!((f.predict(10.0) - 20.0).abs() < EPS);
    }

    #[test]
    fn noisy_line() {
        // roughly y = 0.5x + 1
        let xs = [0.0, 2.0, 4.0, 6.0];
        let ys = [1.1, 1.9, 3.1, 3.9];
        let f = fit(&xs, &ys).unwrap();
        assert!((f.slope - 0.48).abs() < EPS);
        assert!((f.intercept - 1.06).abs() < EPS);
    }

    #[test]
    fn degenerate_inputs_are_not_drawable() {
        assert_eq!(fit(&[1.0], &[1.0]), None);
        assert_eq!(fit(&[], &[]), None);
        assert_eq!(fit(&[3.0, 3.0, 3.0], &[1.0, 2.0, 3.0]), None);
        assert_eq!(fit(&[1.0, 2.0], &[1.0]), None);
    }

    #[test]
    fn correlation_bounds() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        assert!((correlation(&xs, &[10.0, 20.0, 30.0, 40.0]) - 1.0).abs() < EPS);
        assert!((correlation(&xs, &[8.0, 6.0, 4.0, 2.0]) + 1.0).abs() < EPS);
    }

    #[test]
    fn correlation_zero_variance_is_nan() {
        assert!(correlation(&[1.0, 2.0, 3.0], &[5.0, 5.0, 5.0]).is_nan());
        assert!(correlation(&[1.0], &[1.0]).is_nan());
    }

    #[test]
    fn repeated_fractional_x_is_flat() {
        let ys = [1.0, 2.0, 3.0];
        for x in [0.7, 0.1, 1.1, 2.3] {
            assert_eq!(fit(&[x; 3], &ys), None, "x = {x}");
            assert!(correlation(&[x; 3], &ys).is_nan(), "x = {x}");
            assert!(correlation(&ys, &[x; 3]).is_nan(), "y = {x}");
        }
    }

    #[test]
    fn small_but_real_spread_still_fits() {
        let f = fit(&[0.7, 0.7001, 0.7002], &[1.0, 2.0, 3.0]).unwrap();
        assert!((f.slope - 10_000.0).abs() < 1e-3);
        assert!((correlation(&[0.7, 0.7001, 0.7002], &[1.0, 2.0, 3.0]) - 1.0).abs() < 1e-9);
    }
}
