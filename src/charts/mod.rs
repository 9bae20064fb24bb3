//! Derived rows for the eight dashboard charts.
//!
//! Every builder is a pure function of the filtered records; nothing here
//! draws. [`DashboardRows::compute`] runs the filter once and rebuilds all
//! eight row sets.
//!
//! ```text
//!   &[Record] + FilterState
//!        │ filter_records
//!        ▼
//!   Vec<&Record> ──┬─► types_by_generation            (stacked bar)
//!                  ├─► avg_strength_by_type           (bar + mean line)
//!                  ├─► top_by_strength                (horizontal bar)
//!                  ├─► catch_rate_vs_strength         (scatter + trend)
//!                  ├─► type_combinations              (bar + rarest list)
//!                  ├─► category_distribution          (radar)
//!                  ├─► gender_distribution            (pie)
//!                  └─► strongest_by_type_and_generation (horizontal bar)
//! ```

pub mod catch_rate;
pub mod category;
pub mod combinations;
pub mod gender;
pub mod generation;
pub mod strength;
pub mod top;

use crate::data::filter::{filter_records, FilterState};
use crate::data::model::Record;
use crate::stats::score::StrengthMode;

use catch_rate::CatchRateRows;
use category::CategoryStats;
use combinations::TypeCombinations;
use gender::GenderSlice;
use generation::TypesByGeneration;
use strength::{AvgStrengthByType, StrongestEntry};
use top::TopEntry;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardRows {
    /// Number of records passing the filters.
    pub visible: usize,
    pub types_by_generation: TypesByGeneration,
    pub avg_strength: AvgStrengthByType,
    pub top: Vec<TopEntry>,
    pub catch_rate: CatchRateRows,
    pub combinations: TypeCombinations,
    pub categories: Vec<CategoryStats>,
    pub gender: Vec<GenderSlice>,
    pub strongest: Vec<StrongestEntry>,
}

impl DashboardRows {
    pub fn compute(records: &[Record], filters: &FilterState, mode: StrengthMode) -> Self {
        let filtered = filter_records(records, filters);

        DashboardRows {
            visible: filtered.len(),
            types_by_generation: generation::types_by_generation(&filtered),
            avg_strength: strength::avg_strength_by_type(&filtered),
            top: top::top_by_strength(&filtered, mode),
            catch_rate: catch_rate::catch_rate_vs_strength(&filtered),
            combinations: combinations::type_combinations(&filtered),
            categories: category::category_distribution(&filtered),
            gender: gender::gender_distribution(&filtered),
            strongest: strength::strongest_by_type_and_generation(&filtered, filters),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::Selection;
    use crate::data::model::fixtures::{dual, record, with_status};
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<Record> {
        vec![
            dual("Bulbasaur", 1, "Grass", "Poison"),
            record("Charmander", 1, "Fire", 39.0),
            dual("Charizard", 1, "Fire", "Flying"),
            with_status(record("Mewtwo", 1, "Psychic", 110.0), "Legendary"),
            record("Cyndaquil", 2, "Fire", 40.0),
            dual("Hoothoot", 2, "Normal", "Flying"),
        ]
    }

    #[test]
    fn unfiltered_rows_see_everything() {
        let data = sample();
        let rows = DashboardRows::compute(&data, &FilterState::default(), StrengthMode::Offensive);
        assert_eq!(rows.visible, data.len());
        assert_eq!(rows.catch_rate.points.len(), data.len());
        assert_eq!(rows.top.len(), data.len());
        assert_eq!(rows.top[0].record.name, "Mewtwo");
        assert_eq!(rows.categories.iter().map(|c| c.count).sum::<usize>(), data.len());
    }

    #[test]
    fn filter_flows_into_every_chart() {
        let data = sample();
        let filters = FilterState::default().apply(crate::data::filter::FilterAction::SetType(
            Selection::Only("Flying".to_string()),
        ));
        let rows = DashboardRows::compute(&data, &filters, StrengthMode::Defensive);

        assert_eq!(rows.visible, 2);
        assert_eq!(rows.types_by_generation.generations, vec![1, 2]);
        assert_eq!(rows.combinations.ranked.len(), 2);
        // Neither Flying record has Flying as its primary type.
        assert!(rows.strongest.is_empty());
    }

    #[test]
    fn no_data_yields_empty_rows() {
        let rows = DashboardRows::compute(&[], &FilterState::default(), StrengthMode::Offensive);
        assert_eq!(rows.visible, 0);
        assert!(rows.top.is_empty());
        assert!(rows.catch_rate.trend.is_none());
        assert_eq!(rows.categories.len(), 4);
    }
}
