use std::collections::BTreeSet;

use crate::data::model::Record;
use crate::stats::aggregate::group_by2;

/// Primary-type counts per generation, laid out for a stacked bar chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypesByGeneration {
    /// Ascending.
    pub generations: Vec<u32>,
    /// Alphabetical; one stack layer per type.
    pub types: Vec<String>,
    /// `counts[g][t]` for `generations[g]` and `types[t]`, 0 when absent.
    pub counts: Vec<Vec<usize>>,
}

impl TypesByGeneration {
    pub fn generation_total(&self, g: usize) -> usize {
        self.counts.get(g).map_or(0, |row| row.iter().sum())
    }

    /// Height of the tallest stack.
    pub fn max_total(&self) -> usize {
        (0..self.generations.len())
            .map(|g| self.generation_total(g))
            .max()
            .unwrap_or(0)
    }
}

pub fn types_by_generation(filtered: &[&Record]) -> TypesByGeneration {
    let grouped = group_by2(filtered.iter().copied(), |r| r.generation, |r| r.type_1.clone());

    let generations: Vec<u32> = grouped
        .iter()
        .map(|(g, _)| *g)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let types: Vec<String> = grouped
        .iter()
        .flat_map(|(_, inner)| inner.iter().map(|(t, _)| t.clone()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let mut counts = vec![vec![0usize; types.len()]; generations.len()];
    for (generation, inner) in &grouped {
        let Ok(g) = generations.binary_search(generation) else {
            continue;
        };
        for (ty, members) in inner {
            if let Ok(t) = types.binary_search(ty) {
                counts[g][t] = members.len();
            }
        }
    }

    TypesByGeneration {
        generations,
        types,
        counts,
    }
}
