use eframe::egui;

use octave3d::config::SceneConfig;

mod app;
mod ui;

use app::OctaveApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = SceneConfig::discover();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0]),
        ..Default::default()
    };

    eframe::run_native(
        "3DCOM Observer-Angle Simulator with Bridge Formula",
        options,
        Box::new(move |_cc| Ok(Box::new(OctaveApp::new(config)))),
    )
}
