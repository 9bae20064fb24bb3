//! egui rendering: the filter side panel, the top bar and the chart grid.
//! Reads [`crate::state::AppState`]; all data shaping happens in
//! [`crate::charts`].

pub mod geometry;
pub mod panels;
pub mod plot;
