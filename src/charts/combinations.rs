use crate::data::model::Record;
use crate::stats::aggregate::group_by2;
use crate::stats::rank::{rank_descending, rarest, top_n};

pub const TOP_COMBINATIONS: usize = 15;
pub const RAREST_COMBINATIONS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeCombination {
    pub primary: String,
    pub secondary: String,
    pub count: usize,
}

impl TypeCombination {
    pub fn label(&self) -> String {
        format!("{}/{}", self.primary, self.secondary)
    }
}

/// Every (primary, secondary) pair, most common first. Both the top and the
/// rarest views are slices of this one ranking.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeCombinations {
    pub ranked: Vec<TypeCombination>,
}

impl TypeCombinations {
    pub fn most_common(&self) -> &[TypeCombination] {
        top_n(&self.ranked, TOP_COMBINATIONS)
    }

    /// Rarest first.
    pub fn rarest(&self) -> Vec<TypeCombination> {
        rarest(&self.ranked, RAREST_COMBINATIONS)
    }
}

pub fn type_combinations(filtered: &[&Record]) -> TypeCombinations {
    let dual_typed = filtered.iter().copied().filter(|r| r.type_2.is_some());
    let grouped = group_by2(
        dual_typed,
        |r| r.type_1.clone(),
        |r| r.type_2.clone().unwrap_or_default(),
    );

    let pairs: Vec<TypeCombination> = grouped
        .into_iter()
        .flat_map(|(primary, inner)| {
            inner.into_iter().map(move |(secondary, members)| TypeCombination {
                primary: primary.clone(),
                secondary,
                count: members.len(),
            })
        })
        .collect();

    TypeCombinations {
        ranked: rank_descending(pairs, |c| c.count as f64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::fixtures::{dual, record};
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<Record> {
        vec![
            dual("Charizard", 1, "Fire", "Flying"),
            dual("Bulbasaur", 1, "Grass", "Poison"),
            record("Pikachu", 1, "Electric", 50.0),
            dual("Moltres", 1, "Fire", "Flying"),
            dual("Ivysaur", 1, "Grass", "Poison"),
            dual("Oddish", 1, "Grass", "Poison"),
            dual("Magnemite", 1, "Electric", "Steel"),
        ]
    }

    #[test]
    fn single_typed_records_are_ignored() {
        let data = sample();
        let refs: Vec<&Record> = data.iter().collect();
        let combos = type_combinations(&refs);

        let summary: Vec<(String, usize)> = combos.ranked.iter().map(|c| (c.label(), c.count)).collect();
        assert_eq!(
            summary,
            vec![
                ("Grass/Poison".to_string(), 3),
                ("Fire/Flying".to_string(), 2),
                ("Electric/Steel".to_string(), 1),
            ]
        );
        let total: usize = combos.ranked.iter().map(|c| c.count).sum();
        assert_eq!(total, 6);
    }

    #[test]
    fn rarest_is_the_reversed_tail() {
        let data = sample();
        let refs: Vec<&Record> = data.iter().collect();
        let combos = type_combinations(&refs);

        let rare: Vec<String> = combos.rarest().iter().map(|c| c.label()).collect();
        assert_eq!(rare, vec!["Electric/Steel", "Fire/Flying", "Grass/Poison"]);
        assert_eq!(combos.most_common().len(), 3);
        assert_eq!(combos.most_common()[0], combos.ranked[0]);
    }

    #[test]
    fn views_are_capped() {
        let types = ["A", "B", "C", "D", "E"];
        let data: Vec<Record> = types
            .iter()
            .flat_map(|p| types.iter().map(move |s| dual("x", 1, p, s)))
            .collect();
        let refs: Vec<&Record> = data.iter().collect();
        let combos = type_combinations(&refs);
        assert_eq!(combos.ranked.len(), 25);
        assert_eq!(combos.most_common().len(), TOP_COMBINATIONS);
        assert_eq!(combos.rarest().len(), RAREST_COMBINATIONS);
        assert_eq!(combos.rarest()[0], combos.ranked[24]);
    }
}
