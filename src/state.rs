use std::path::Path;

use crate::charts::DashboardRows;
use crate::data::filter::{FilterAction, FilterField, FilterState};
use crate::data::loader::load_file;
use crate::data::model::Dataset;
use crate::stats::score::StrengthMode;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Loaded dataset (None until a file loads successfully).
    pub dataset: Option<Dataset>,

    /// Current dropdown selections. Only [`AppState::dispatch`] replaces it.
    filters: FilterState,

    /// Score used by the top-10 chart.
    mode: StrengthMode,

    /// Chart rows for the current filters and mode (cached between frames).
    pub rows: DashboardRows,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(mode: StrengthMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn mode(&self) -> StrengthMode {
        self.mode
    }

    /// Load a dataset from disk. On failure the previous state is kept and
    /// the error is shown in the top bar.
    pub fn load(&mut self, path: &Path) {
        match load_file(path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} records from {} ({} generations, {} types, {} statuses)",
                    dataset.len(),
                    path.display(),
                    dataset.generations.len(),
                    dataset.types.len(),
                    dataset.statuses.len()
                );
                if dataset.is_empty() {
                    log::warn!("{} contains no usable records", path.display());
                }
                self.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e:#}", path.display());
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Ingest a newly loaded dataset and reset the filters.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.dataset = Some(dataset);
        self.filters = FilterState::default();
        self.status_message = None;
        self.recompute();
    }

    /// The single update point for filter changes.
    pub fn dispatch(&mut self, action: FilterAction) {
        let next = self.filters.apply(action);
        if next != self.filters {
            log::debug!("Filters changed: {:?} -> {:?}", self.filters, next);
            self.filters = next;
            self.recompute();
        }
    }

    /// Apply the raw string a filter control reports for `field`. A value
    /// that does not parse leaves the filters alone and is shown in the top
    /// bar.
    pub fn select_raw(&mut self, field: FilterField, raw: &str) {
        match FilterAction::from_raw(field, raw) {
            Ok(action) => self.dispatch(action),
            Err(e) => {
                log::warn!("Ignoring filter selection: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    pub fn set_mode(&mut self, mode: StrengthMode) {
        if mode != self.mode {
            self.mode = mode;
            self.recompute();
        }
    }

    /// Rebuild every chart's rows from scratch.
    fn recompute(&mut self) {
        self.rows = match &self.dataset {
            Some(ds) => DashboardRows::compute(&ds.records, &self.filters, self.mode),
            None => DashboardRows::default(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::Selection;
    use crate::data::model::fixtures::record;
    use pretty_assertions::assert_eq;

    fn loaded() -> AppState {
        let mut state = AppState::new(StrengthMode::Offensive);
        state.set_dataset(Dataset::from_records(vec![
            record("Bulbasaur", 1, "Grass", 45.0),
            record("Chikorita", 2, "Grass", 45.0),
            record("Cyndaquil", 2, "Fire", 39.0),
        ]));
        state
    }

    #[test]
    fn dispatch_recomputes_rows() {
        let mut state = loaded();
        assert_eq!(state.rows.visible, 3);

        state.dispatch(FilterAction::SetGeneration(Selection::Only(2)));
        assert_eq!(state.rows.visible, 2);

        state.dispatch(FilterAction::SetType(Selection::Only("Fire".to_string())));
        assert_eq!(state.rows.visible, 1);

        state.dispatch(FilterAction::Reset);
        assert_eq!(state.rows.visible, 3);
        assert!(state.filters().is_unfiltered());
    }

    #[test]
    fn raw_selections_go_through_the_reducer() {
        let mut state = loaded();
        state.select_raw(FilterField::Generation, "2");
        state.select_raw(FilterField::Type, "Grass");
        assert_eq!(state.rows.visible, 1);
        assert_eq!(state.filters().raw(FilterField::Generation), "2");

        state.select_raw(FilterField::Generation, "all");
        assert_eq!(state.rows.visible, 2);
        assert!(state.status_message.is_none());
    }

    #[test]
    fn unparsable_selection_keeps_filters() {
        let mut state = loaded();
        state.select_raw(FilterField::Generation, "1");
        let before = state.filters().clone();

        state.select_raw(FilterField::Generation, "second");
        assert_eq!(state.filters(), &before);
        assert_eq!(state.rows.visible, 1);
        assert!(state
            .status_message
            .as_deref()
            .is_some_and(|m| m.contains("second")));
    }

    #[test]
    fn mode_toggle_reranks() {
        let mut state = loaded();
        state.set_mode(StrengthMode::Defensive);
        assert_eq!(state.mode(), StrengthMode::Defensive);
        assert_eq!(state.rows.top.len(), 3);
    }

    #[test]
    fn failed_load_keeps_no_data_state() {
        let mut state = AppState::default();
        state.load(Path::new("does/not/exist.csv"));
        assert!(state.dataset.is_none());
        assert!(state.status_message.is_some());
        assert_eq!(state.rows, DashboardRows::default());
    }
}
