use std::path::Path;

use eframe::egui;

use crate::state::AppState;
use crate::stats::score::StrengthMode;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PokedexApp {
    pub state: AppState,
}

impl PokedexApp {
    /// Load the startup dataset once. A failure leaves the app in the
    /// "no data" state with the error in the top bar.
    pub fn new(data_path: &Path, mode: StrengthMode) -> Self {
        let mut state = AppState::new(mode);
        state.load(data_path);
        Self { state }
    }
}

impl eframe::App for PokedexApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: chart grid ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::dashboard(ui, &self.state);
        });
    }
}
