mod app;
mod charts;
mod color;
mod data;
mod state;
mod stats;
mod ui;

use std::path::PathBuf;

use app::PokedexApp;
use clap::Parser;
use eframe::egui;
use stats::score::StrengthMode;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Dataset to load at startup (.csv, .json or .parquet).
    #[arg(long, default_value = "data/pokedex_(Update_05.20).csv")]
    data: PathBuf,

    /// Initial ranking for the top-10 chart.
    #[arg(long, value_enum, default_value_t = StrengthMode::Offensive)]
    mode: StrengthMode,
}

fn main() -> eframe::Result {
    env_logger::init();
    let args = Args::parse();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Pokédex Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(PokedexApp::new(&args.data, args.mode)))),
    )
}
