use std::fmt;

use thiserror::Error;

use super::model::Record;

/// Raw value the filter controls use for "no constraint".
pub const ALL: &str = "all";

// ---------------------------------------------------------------------------
// Selection – "all" or one concrete value
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Selection<T> {
    /// Whether `value` passes this selection.
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(selected) => selected == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => write!(f, "{ALL}"),
            Selection::Only(v) => write!(f, "{v}"),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum FilterError {
    #[error("generation filter '{0}' is not a positive integer")]
    InvalidGeneration(String),
}

// ---------------------------------------------------------------------------
// FilterState – the three dropdowns
// ---------------------------------------------------------------------------

/// The active dropdown selections. Replaced as a whole by [`FilterState::apply`],
/// never mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub generation: Selection<u32>,
    /// Matches either the primary or the secondary type.
    pub type_: Selection<String>,
    pub status: Selection<String>,
}

/// One of the three filter controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Generation,
    Type,
    Status,
}

/// A single change coming from the filter controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    SetGeneration(Selection<u32>),
    SetType(Selection<String>),
    SetStatus(Selection<String>),
    Reset,
}

impl FilterAction {
    /// Parse the raw string a control exposes for `field`: `"all"` or a
    /// concrete value.
    pub fn from_raw(field: FilterField, raw: &str) -> Result<Self, FilterError> {
        let raw = raw.trim();
        Ok(match field {
            FilterField::Generation => FilterAction::SetGeneration(match raw {
                ALL => Selection::All,
                g => match g.parse::<u32>() {
                    Ok(n) if n > 0 => Selection::Only(n),
                    _ => return Err(FilterError::InvalidGeneration(g.to_string())),
                },
            }),
            FilterField::Type => FilterAction::SetType(raw_selection(raw)),
            FilterField::Status => FilterAction::SetStatus(raw_selection(raw)),
        })
    }
}

impl FilterState {
    /// The raw string the control for `field` shows.
    pub fn raw(&self, field: FilterField) -> String {
        match field {
            FilterField::Generation => self.generation.to_string(),
            FilterField::Type => self.type_.to_string(),
            FilterField::Status => self.status.to_string(),
        }
    }

    /// Reducer: the state that results from applying `action`.
    pub fn apply(&self, action: FilterAction) -> FilterState {
        match action {
            FilterAction::SetGeneration(generation) => FilterState {
                generation,
                ..self.clone()
            },
            FilterAction::SetType(type_) => FilterState {
                type_,
                ..self.clone()
            },
            FilterAction::SetStatus(status) => FilterState {
                status,
                ..self.clone()
            },
            FilterAction::Reset => FilterState::default(),
        }
    }

    pub fn is_unfiltered(&self) -> bool {
        self.generation.is_all() && self.type_.is_all() && self.status.is_all()
    }

    /// Whether `record` passes all three selections.
    pub fn matches(&self, record: &Record) -> bool {
        let generation_ok = self.generation.admits(&record.generation);
        let type_ok = match &self.type_ {
            Selection::All => true,
            Selection::Only(ty) => record.has_type(ty),
        };
        let status_ok = self.status.admits(&record.status);

        generation_ok && type_ok && status_ok
    }
}

fn raw_selection(raw: &str) -> Selection<String> {
    match raw {
        ALL => Selection::All,
        v => Selection::Only(v.to_string()),
    }
}

/// Records passing `filters`, in their original order.
pub fn filter_records<'a>(records: &'a [Record], filters: &FilterState) -> Vec<&'a Record> {
    records.iter().filter(|r| filters.matches(r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::fixtures::{dual, record, with_status};
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<Record> {
        vec![
            record("Bulbasaur", 1, "Grass", 45.0),
            dual("Charizard", 1, "Fire", "Flying"),
            dual("Hoothoot", 2, "Normal", "Flying"),
            with_status(record("Mew", 1, "Psychic", 100.0), "Mythical"),
            record("Cyndaquil", 2, "Fire", 39.0),
        ]
    }

    /// State built the way the controls build it, one raw string per field.
    fn from_raw(generation: &str, type_: &str, status: &str) -> FilterState {
        [
            (FilterField::Generation, generation),
            (FilterField::Type, type_),
            (FilterField::Status, status),
        ]
        .into_iter()
        .fold(FilterState::default(), |state, (field, raw)| {
            state.apply(FilterAction::from_raw(field, raw).unwrap())
        })
    }

    fn names(rows: &[&Record]) -> Vec<String> {
        rows.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn all_state_returns_everything_in_order() {
        let data = sample();
        let out = filter_records(&data, &FilterState::default());
        assert_eq!(out.len(), data.len());
        assert_eq!(
            names(&out),
            data.iter().map(|r| r.name.clone()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn filtering_is_idempotent() {
        let data = sample();
        let state = from_raw("1", "all", "all");
        let once: Vec<Record> = filter_records(&data, &state).into_iter().cloned().collect();
        let twice = filter_records(&once, &state);
        assert_eq!(names(&twice), once.iter().map(|r| r.name.clone()).collect::<Vec<_>>());
    }

    #[test]
    fn type_matches_secondary_slot() {
        let data = sample();
        let state = from_raw("all", "Flying", "all");
        assert_eq!(names(&filter_records(&data, &state)), vec!["Charizard", "Hoothoot"]);
    }

    #[test]
    fn predicates_combine_with_and() {
        let data = sample();
        let state = from_raw("2", "Fire", "all");
        assert_eq!(names(&filter_records(&data, &state)), vec!["Cyndaquil"]);

        let state = from_raw("1", "all", "Mythical");
        assert_eq!(names(&filter_records(&data, &state)), vec!["Mew"]);
    }

    #[test]
    fn invalid_generation_is_rejected() {
        assert_eq!(
            FilterAction::from_raw(FilterField::Generation, "abc"),
            Err(FilterError::InvalidGeneration("abc".to_string()))
        );
        assert!(FilterAction::from_raw(FilterField::Generation, "0").is_err());
    }

    #[test]
    fn raw_strings_map_to_actions() {
        assert_eq!(
            FilterAction::from_raw(FilterField::Generation, " all "),
            Ok(FilterAction::SetGeneration(Selection::All))
        );
        assert_eq!(
            FilterAction::from_raw(FilterField::Status, "Sub Legendary"),
            Ok(FilterAction::SetStatus(Selection::Only("Sub Legendary".to_string())))
        );

        let state = from_raw("4", "Ice", "all");
        assert_eq!(state.raw(FilterField::Generation), "4");
        assert_eq!(state.raw(FilterField::Type), "Ice");
        assert_eq!(state.raw(FilterField::Status), ALL);
    }

    #[test]
    fn reducer_replaces_one_field_and_resets() {
        let state = FilterState::default()
            .apply(FilterAction::SetGeneration(Selection::Only(3)))
            .apply(FilterAction::SetType(Selection::Only("Water".to_string())));
        assert_eq!(state.generation, Selection::Only(3));
        assert_eq!(state.type_, Selection::Only("Water".to_string()));
        assert!(state.status.is_all());

        assert!(state.apply(FilterAction::Reset).is_unfiltered());
    }
}
