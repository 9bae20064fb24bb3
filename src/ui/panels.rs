use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::filter::{FilterAction, FilterField, ALL};
use crate::state::AppState;
use crate::stats::score::StrengthMode;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filtros");
    ui.separator();

    let Some(dataset) = &state.dataset else {
        ui.label("Nenhum dado carregado.");
        return;
    };

    let controls = [
        (
            FilterField::Generation,
            "Geração",
            "generation_filter",
            dataset.generations.iter().map(u32::to_string).collect::<Vec<_>>(),
        ),
        (
            FilterField::Type,
            "Tipo",
            "type_filter",
            dataset.types.iter().cloned().collect(),
        ),
        (
            FilterField::Status,
            "Status",
            "status_filter",
            dataset.statuses.iter().cloned().collect(),
        ),
    ];

    // Collect selections first, apply after the widgets release `state`.
    let mut picked = Vec::new();
    let filters = state.filters();
    for (field, title, id, values) in controls {
        ui.strong(title);
        if let Some(raw) = raw_combo(ui, id, &filters.raw(field), &values) {
            picked.push((field, raw));
        }
        ui.add_space(6.0);
    }

    ui.separator();
    let reset = egui::Button::new("Limpar filtros");
    let reset_clicked = ui.add_enabled(!filters.is_unfiltered(), reset).clicked();

    for (field, raw) in picked {
        state.select_raw(field, &raw);
    }
    if reset_clicked {
        state.dispatch(FilterAction::Reset);
    }
}

/// A combo box over raw control values: [`ALL`] shown as "Todos", then
/// every value. Returns the raw value the user picked when it differs from
/// `current`.
fn raw_combo(ui: &mut Ui, id: &str, current: &str, values: &[String]) -> Option<String> {
    let mut picked = None;
    let shown = if current == ALL { "Todos" } else { current };

    egui::ComboBox::from_id_salt(id)
        .selected_text(shown)
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            let options = values.iter().map(|v| (v.as_str(), v.as_str()));
            for (raw, text) in std::iter::once((ALL, "Todos")).chain(options) {
                let selected = raw == current;
                if ui.selectable_label(selected, text).clicked() && !selected {
                    picked = Some(raw.to_string());
                }
            }
        });

    picked
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("Arquivo", |ui: &mut Ui| {
            if ui.button("Abrir…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} Pokémon carregados, {} visíveis",
                ds.len(),
                state.rows.visible
            ));
        }

        ui.separator();

        let mode = state.mode();
        for candidate in [StrengthMode::Offensive, StrengthMode::Defensive] {
            let text = match candidate {
                StrengthMode::Offensive => "Ofensivos",
                StrengthMode::Defensive => "Defensivos",
            };
            if ui.selectable_label(mode == candidate, text).clicked() {
                state.set_mode(candidate);
            }
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Abrir Pokédex")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.load(&path);
    }
}
