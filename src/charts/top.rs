use crate::data::model::Record;
use crate::stats::rank::{rank_descending, top_n};
use crate::stats::score::StrengthMode;

pub const TOP_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct TopEntry {
    pub record: Record,
    pub strength: f64,
}

/// The strongest records under `mode`, ties in dataset order.
pub fn top_by_strength(filtered: &[&Record], mode: StrengthMode) -> Vec<TopEntry> {
    let scored: Vec<TopEntry> = filtered
        .iter()
        .map(|r| TopEntry {
            record: (*r).clone(),
            strength: mode.score(r),
        })
        .collect();
    let ranked = rank_descending(scored, |e| e.strength);
    top_n(&ranked, TOP_LIMIT).to_vec()
}
