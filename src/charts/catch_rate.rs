use crate::data::model::Record;
use crate::stats::aggregate::{max_of, min_of};
use crate::stats::regression::{correlation, fit, LinearFit};

#[derive(Debug, Clone, PartialEq)]
pub struct CatchPoint {
    pub name: String,
    pub type_1: String,
    pub type_2: Option<String>,
    pub generation: u32,
    /// x axis.
    pub total_points: f64,
    /// y axis.
    pub catch_rate: f64,
}

/// Trend line segment spanning the observed x range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendLine {
    pub fit: LinearFit,
    pub from: [f64; 2],
    pub to: [f64; 2],
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatchRateRows {
    pub points: Vec<CatchPoint>,
    /// `None` when there is no drawable trend.
    pub trend: Option<TrendLine>,
    /// NaN when undefined.
    pub correlation: f64,
}

/// Catch rate against `total_points`, with a least-squares trend.
///
/// Points missing either coordinate are still listed but take no part in
/// the trend or the correlation.
pub fn catch_rate_vs_strength(filtered: &[&Record]) -> CatchRateRows {
    let points: Vec<CatchPoint> = filtered
        .iter()
        .map(|r| CatchPoint {
            name: r.name.clone(),
            type_1: r.type_1.clone(),
            type_2: r.type_2.clone(),
            generation: r.generation,
            total_points: r.total_points,
            catch_rate: r.catch_rate,
        })
        .collect();

    let (xs, ys): (Vec<f64>, Vec<f64>) = points
        .iter()
        .filter(|p| p.total_points.is_finite() && p.catch_rate.is_finite())
        .map(|p| (p.total_points, p.catch_rate))
        .unzip();

    if xs.len() < 2 {
        return CatchRateRows {
            points,
            trend: None,
            correlation: f64::NAN,
        };
    }

    let trend = fit(&xs, &ys).and_then(|f| {
        let x1 = min_of(xs.iter().copied())?;
        let x2 = max_of(xs.iter().copied())?;
        Some(TrendLine {
            fit: f,
            from: [x1, f.predict(x1)],
            to: [x2, f.predict(x2)],
        })
    });

    CatchRateRows {
        points,
        trend,
        correlation: correlation(&xs, &ys),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::fixtures::record;

    fn with_catch(total: f64, catch_rate: f64) -> Record {
        let mut r = record("mon", 1, "Normal", 10.0);
        r.total_points = total;
        r.catch_rate = catch_rate;
        r
    }

    #[test]
    fn inverse_relationship() {
        let data = vec![
            with_catch(200.0, 255.0),
            with_catch(400.0, 155.0),
            with_catch(600.0, 55.0),
        ];
        let refs: Vec<&Record> = data.iter().collect();
        let rows = catch_rate_vs_strength(&refs);

        assert_eq!(rows.points.len(), 3);
        let trend = rows.trend.unwrap();
        assert!((trend.fit.slope + 0.5).abs() < 1e-9);
        assert_eq!(trend.from[0], 200.0);
        assert_eq!(trend.to[0], 600.0);
        assert!((trend.to[1] - 55.0).abs() < 1e-9);
        assert!((rows.correlation + 1.0).abs() < 1e-9);
    }

    #[test]
    fn single_point_has_no_trend() {
        let data = vec![with_catch(300.0, 45.0)];
        let refs: Vec<&Record> = data.iter().collect();
        let rows = catch_rate_vs_strength(&refs);
        assert_eq!(rows.points.len(), 1);
        assert!(rows.trend.is_none());
        assert!(rows.correlation.is_nan());
    }

    #[test]
    fn same_strength_everywhere_is_not_drawable() {
        let data = vec![with_catch(300.0, 45.0), with_catch(300.0, 190.0)];
        let refs: Vec<&Record> = data.iter().collect();
        let rows = catch_rate_vs_strength(&refs);
        assert!(rows.trend.is_none());
        assert!(rows.correlation.is_nan());
    }

    #[test]
    fn missing_values_skip_the_trend() {
        let data = vec![
            with_catch(100.0, 10.0),
            with_catch(f64::NAN, 99.0),
            with_catch(200.0, 20.0),
        ];
        let refs: Vec<&Record> = data.iter().collect();
        let rows = catch_rate_vs_strength(&refs);
        assert_eq!(rows.points.len(), 3);
        assert!((rows.trend.unwrap().fit.slope - 0.1).abs() < 1e-9);
    }
}
