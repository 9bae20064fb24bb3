use std::cmp::Ordering;

/// Stable sort by `key`, largest first. Ties keep their input order and
/// NaN keys sink to the end.
pub fn rank_descending<T>(mut rows: Vec<T>, key: impl Fn(&T) -> f64) -> Vec<T> {
    rows.sort_by(|a, b| descending(key(a), key(b)));
    rows
}

fn descending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.total_cmp(&a),
    }
}

/// The first `n` rows of an already ranked list.
pub fn top_n<T>(ranked: &[T], n: usize) -> &[T] {
    &ranked[..n.min(ranked.len())]
}

/// The last `n` rows of an already ranked list, rarest first.
pub fn rarest<T: Clone>(ranked: &[T], n: usize) -> Vec<T> {
    let start = ranked.len().saturating_sub(n);
    ranked[start..].iter().rev().cloned().collect()
}
