use crate::data::model::{Record, Stat};
use crate::stats::aggregate::mean;
use crate::stats::score::{categorize, Category};

/// Mean battle stats of one rarity category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryStats {
    pub category: Category,
    /// In [`Stat::ALL`] order; 0 for an empty category.
    pub means: [f64; 6],
    pub count: usize,
}

/// One entry per [`Category::ALL`], in that order, even when empty.
pub fn category_distribution(filtered: &[&Record]) -> Vec<CategoryStats> {
    let categorized: Vec<(Category, &Record)> = filtered.iter().map(|r| (categorize(r), *r)).collect();

    Category::ALL
        .iter()
        .map(|&category| {
            let members: Vec<&Record> = categorized
                .iter()
                .filter(|(c, _)| *c == category)
                .map(|(_, r)| *r)
                .collect();
            CategoryStats {
                category,
                means: Stat::ALL.map(|s| mean(&members, |r| s.of(r))),
                count: members.len(),
            }
        })
        .collect()
}

/// Largest mean across all categories, the radar's outer ring.
pub fn max_mean(stats: &[CategoryStats]) -> f64 {
    stats
        .iter()
        .flat_map(|c| c.means.iter().copied())
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::fixtures::{record, with_status};
    use pretty_assertions::assert_eq;

    #[test]
    fn categories_in_fixed_order_with_empty_fallback() {
        let data = vec![
            record("Rattata", 1, "Normal", 30.0),
            record("Pidgey", 1, "Normal", 40.0),
            with_status(record("Mewtwo", 1, "Psychic", 110.0), "Legendary"),
            with_status(record("Mew", 1, "Psychic", 100.0), "Mythical"),
        ];
        let refs: Vec<&Record> = data.iter().collect();
        let out = category_distribution(&refs);

        let order: Vec<Category> = out.iter().map(|c| c.category).collect();
        assert_eq!(order, Category::ALL.to_vec());

        assert_eq!(out[0].count, 2);
        assert_eq!(out[0].means, [35.0; 6]);
        assert_eq!(out[1].count, 0);
        assert_eq!(out[1].means, [0.0; 6]);
        assert_eq!(out[2].means[0], 110.0);
        assert_eq!(out[3].means[5], 100.0);
        assert_eq!(max_mean(&out), 110.0);
    }

    #[test]
    fn counts_cover_every_record() {
        let data = vec![
            with_status(record("a", 1, "Bug", 1.0), "Sub Legendary"),
            with_status(record("b", 1, "Bug", 1.0), "Ultra Beast"),
        ];
        let refs: Vec<&Record> = data.iter().collect();
        let total: usize = category_distribution(&refs).iter().map(|c| c.count).sum();
        assert_eq!(total, 2);
    }
}
