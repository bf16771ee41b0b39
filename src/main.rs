// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 floorplan-viewer contributors

mod export;
mod gui;
mod layout;
mod spec;
mod view;

use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Floorplan Viewer",
        options,
        Box::new(|cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(gui::FloorplanViewer::new()))
        }),
    )
}
