// src/main.rs
//
// Calculatrice bureau : point d'entrée natif
// ------------------------------------------
// But:
// - eframe::run_native + NativeOptions (Linux/Windows/macOS)
// - journalisation env_logger (RUST_LOG=debug pour suivre les soumissions)
//
// IMPORTANT (structure projet):
// - `impl eframe::App for AppCalc` vit dans src/app.rs
// - Ici: point d'entrée seulement

use eframe::egui;
use env_logger::Env;

mod app;
mod noyau;

use app::AppCalc;

/// Titre de la fenêtre.
const TITRE_APP: &str = "Calculatrice";

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    log::info!("démarrage de {TITRE_APP}");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([460.0, 680.0])
            .with_min_inner_size([380.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|_cc| Ok(Box::<AppCalc>::default())),
    )
}
