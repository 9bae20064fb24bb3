use crate::data::filter::FilterState;
use crate::data::model::{Record, Stat};
use crate::stats::aggregate::{group_by2, mean, mean_of, rollup};
use crate::stats::rank::{rank_descending, top_n};

/// Number of bars in the strongest-by-type-and-generation chart.
pub const STRONGEST_LIMIT: usize = 15;

// ---------------------------------------------------------------------------
// Average strength by primary type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct TypeStrength {
    pub type_1: String,
    /// Mean `total_points`.
    pub avg_total: f64,
    /// Means in [`Stat::ALL`] order.
    pub avg_stats: [f64; 6],
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AvgStrengthByType {
    /// Sorted by `avg_total`, largest first.
    pub rows: Vec<TypeStrength>,
    /// Mean of the per-type means, drawn as a reference line.
    pub overall: f64,
}

pub fn avg_strength_by_type(filtered: &[&Record]) -> AvgStrengthByType {
    let per_type = rollup(
        filtered.iter().copied(),
        |r| r.type_1.clone(),
        |members| {
            let avg_stats = Stat::ALL.map(|s| mean(members, |r| s.of(r)));
            (mean(members, |r| r.total_points), avg_stats, members.len())
        },
    );

    let rows: Vec<TypeStrength> = per_type
        .into_iter()
        .map(|(type_1, (avg_total, avg_stats, count))| TypeStrength {
            type_1,
            avg_total,
            avg_stats,
            count,
        })
        .collect();
    let rows = rank_descending(rows, |r| r.avg_total);
    let overall = mean_of(&rows.iter().map(|r| r.avg_total).collect::<Vec<_>>());

    AvgStrengthByType { rows, overall }
}

// ---------------------------------------------------------------------------
// Strongest per (primary type, generation)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct StrongestEntry {
    pub type_1: String,
    pub type_2: Option<String>,
    pub generation: u32,
    pub name: String,
    pub total_points: f64,
}

impl StrongestEntry {
    pub fn label(&self) -> String {
        format!("{} (Gen {})", self.name, self.generation)
    }
}

/// The record with the highest `total_points` in each (primary type,
/// generation) group, ranked and cut to [`STRONGEST_LIMIT`].
///
/// On top of the regular filtering, a selected type keeps only the groups
/// whose *primary* type is that type.
pub fn strongest_by_type_and_generation(
    filtered: &[&Record],
    filters: &FilterState,
) -> Vec<StrongestEntry> {
    let grouped = group_by2(filtered.iter().copied(), |r| r.type_1.clone(), |r| r.generation);

    let entries: Vec<StrongestEntry> = grouped
        .into_iter()
        .flat_map(|(_, by_gen)| by_gen)
        .filter_map(|(_, members)| {
            members
                .into_iter()
                .reduce(|best, cur| if cur.total_points > best.total_points { cur } else { best })
        })
        .filter(|r| filters.generation.admits(&r.generation))
        .filter(|r| filters.type_.admits(&r.type_1))
        .map(|r| StrongestEntry {
            type_1: r.type_1.clone(),
            type_2: r.type_2.clone(),
            generation: r.generation,
            name: r.name.clone(),
            total_points: r.total_points,
        })
        .collect();

    let ranked = rank_descending(entries, |e| e.total_points);
    top_n(&ranked, STRONGEST_LIMIT).to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::Selection;
    use crate::data::model::fixtures::{dual, record};
    use pretty_assertions::assert_eq;

    #[test]
    fn means_per_type_sorted_descending() {
        let data = vec![
            record("Weedle", 1, "Bug", 30.0),
            record("Charmander", 1, "Fire", 40.0),
            record("Caterpie", 1, "Bug", 40.0),
            record("Moltres", 1, "Fire", 100.0),
        ];
        let refs: Vec<&Record> = data.iter().collect();
        let out = avg_strength_by_type(&refs);

        let order: Vec<&str> = out.rows.iter().map(|r| r.type_1.as_str()).collect();
        assert_eq!(order, vec!["Fire", "Bug"]);
        assert_eq!(out.rows[0].avg_total, 420.0);
        assert_eq!(out.rows[0].avg_stats, [70.0; 6]);
        assert_eq!(out.rows[0].count, 2);
        assert_eq!(out.rows[1].avg_total, 210.0);
        assert_eq!(out.overall, 315.0);
    }

    #[test]
    fn empty_input_has_zero_reference() {
        let out = avg_strength_by_type(&[]);
        assert!(out.rows.is_empty());
        assert_eq!(out.overall, 0.0);
    }

    #[test]
    fn strongest_keeps_first_on_ties() {
        let data = vec![
            record("Charmander", 1, "Fire", 50.0),
            record("Vulpix", 1, "Fire", 50.0),
            record("Cyndaquil", 2, "Fire", 40.0),
            record("Squirtle", 1, "Water", 45.0),
        ];
        let refs: Vec<&Record> = data.iter().collect();
        let out = strongest_by_type_and_generation(&refs, &FilterState::default());

        let labels: Vec<String> = out.iter().map(|e| e.label()).collect();
        assert_eq!(
            labels,
            vec!["Charmander (Gen 1)", "Squirtle (Gen 1)", "Cyndaquil (Gen 2)"]
        );
    }

    #[test]
    fn type_filter_restricts_to_primary_type() {
        let data = vec![
            dual("Charizard", 1, "Fire", "Flying"),
            record("Pidgeot", 1, "Flying", 60.0),
        ];
        let refs: Vec<&Record> = data.iter().collect();
        let filters = FilterState {
            type_: Selection::Only("Flying".to_string()),
            ..FilterState::default()
        };
        let out = strongest_by_type_and_generation(&refs, &filters);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Pidgeot");
    }

    #[test]
    fn strongest_is_capped() {
        let data: Vec<Record> = (1..=20)
            .map(|g| record(&format!("mon{g}"), g, "Normal", g as f64))
            .collect();
        let refs: Vec<&Record> = data.iter().collect();
        let out = strongest_by_type_and_generation(&refs, &FilterState::default());
        assert_eq!(out.len(), STRONGEST_LIMIT);
        assert_eq!(out[0].generation, 20);
    }
}
