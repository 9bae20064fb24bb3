use std::f64::consts::TAU;

/// Points per full turn when approximating arcs.
const ARC_SEGMENTS: usize = 96;

/// Point on a circle of radius `r` at `angle` radians, measured clockwise
/// from twelve o'clock (plot coordinates, y up).
pub fn polar(r: f64, angle: f64) -> [f64; 2] {
    [r * angle.sin(), r * angle.cos()]
}

/// Closed outline of a pie slice spanning `[start, end)` radians.
pub fn pie_slice(radius: f64, start: f64, end: f64) -> Vec<[f64; 2]> {
    let span = (end - start).max(0.0);
    let steps = ((span / TAU) * ARC_SEGMENTS as f64).ceil().max(1.0) as usize;
    let mut points = Vec::with_capacity(steps + 2);
    points.push([0.0, 0.0]);
    for i in 0..=steps {
        points.push(polar(radius, start + span * i as f64 / steps as f64));
    }
    points
}

/// Start/end angles for each share, in order, covering the full turn.
/// Zero shares get an empty span. All-zero input yields all-empty spans.
pub fn pie_angles(shares: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = shares.iter().filter(|s| s.is_finite()).sum();
    let mut start = 0.0;
    shares
        .iter()
        .map(|&s| {
            let span = if total > 0.0 && s.is_finite() { s / total * TAU } else { 0.0 };
            let slice = (start, start + span);
            start += span;
            slice
        })
        .collect()
}

/// Radar polygon vertices: one axis per value, scaled so `max` reaches
/// `radius`.
pub fn radar_points(values: &[f64], max: f64, radius: f64) -> Vec<[f64; 2]> {
    let n = values.len().max(1) as f64;
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let r = if max > 0.0 { v / max * radius } else { 0.0 };
            polar(r, TAU * i as f64 / n)
        })
        .collect()
}
