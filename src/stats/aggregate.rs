use std::collections::HashMap;
use std::hash::Hash;

// ---------------------------------------------------------------------------
// Grouping
// ---------------------------------------------------------------------------

/// Group `items` by `key`, keeping groups in first-seen order and members in
/// input order.
pub fn group_by<'a, T, K, F>(items: impl IntoIterator<Item = &'a T>, key: F) -> Vec<(K, Vec<&'a T>)>
where
    T: 'a,
    K: Eq + Hash + Clone,
    F: Fn(&T) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<&'a T>)> = Vec::new();

    for item in items {
        let k = key(item);
        match index.get(&k) {
            Some(&slot) => groups[slot].1.push(item),
            None => {
                index.insert(k.clone(), groups.len());
                groups.push((k, vec![item]));
            }
        }
    }
    groups
}

/// Two-level grouping: by `outer`, then within each group by `inner`.
pub fn group_by2<'a, T, K1, K2, F1, F2>(
    items: impl IntoIterator<Item = &'a T>,
    outer: F1,
    inner: F2,
) -> Vec<(K1, Vec<(K2, Vec<&'a T>)>)>
where
    T: 'a,
    K1: Eq + Hash + Clone,
    K2: Eq + Hash + Clone,
    F1: Fn(&T) -> K1,
    F2: Fn(&T) -> K2,
{
    group_by(items, outer)
        .into_iter()
        .map(|(k, members)| (k, group_by(members, &inner)))
        .collect()
}

/// Group by `key` and reduce each group with `reduce`.
pub fn rollup<'a, T, K, R, F, G>(items: impl IntoIterator<Item = &'a T>, key: F, reduce: G) -> Vec<(K, R)>
where
    T: 'a,
    K: Eq + Hash + Clone,
    F: Fn(&T) -> K,
    G: Fn(&[&'a T]) -> R,
{
    group_by(items, key)
        .into_iter()
        .map(|(k, members)| {
            let r = reduce(&members);
            (k, r)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Summaries
// ---------------------------------------------------------------------------

/// Arithmetic mean of `field` over the non-missing (non-NaN) values.
///
/// Returns `0.0` when there is nothing to average.
pub fn mean<T>(items: &[&T], field: impl Fn(&T) -> f64) -> f64 {
    let (sum, n) = items
        .iter()
        .map(|it| field(*it))
        .filter(|v| !v.is_nan())
        .fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if n == 0 {
        0.0
    } else {
        sum / n as f64
    }
}

/// Mean of a plain slice of values, same missing-value policy as [`mean`].
pub fn mean_of(values: &[f64]) -> f64 {
    let refs: Vec<&f64> = values.iter().collect();
    mean(&refs, |v| *v)
}

/// Smallest non-NaN value, `None` when there is none.
pub fn min_of(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    values
        .into_iter()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| Some(acc.map_or(v, |m: f64| m.min(v))))
}

/// Largest non-NaN value, `None` when there is none.
pub fn max_of(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    values
        .into_iter()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| Some(acc.map_or(v, |m: f64| m.max(v))))
}
