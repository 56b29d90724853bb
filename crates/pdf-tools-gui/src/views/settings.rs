use eframe::egui;
use pdf_stamp::OverlayOptions;

use crate::ui_components::{fraction_drag, points_drag};

/// Overlay size and placement settings. Returns true when anything changed.
pub fn show_settings(ui: &mut egui::Ui, options: &mut OverlayOptions) -> bool {
    let mut changed = false;

    ui.heading("Overlays");
    changed |= points_drag(ui, "Stamp width", &mut options.stamp_footprint_pt, 10.0..=1000.0);
    changed |= points_drag(
        ui,
        "Signature width",
        &mut options.signature_footprint_pt,
        10.0..=1000.0,
    );
    changed |= points_drag(
        ui,
        "Signature offset x",
        &mut options.signature_offset_pt.0,
        -1000.0..=1000.0,
    );
    changed |= points_drag(
        ui,
        "Signature offset y",
        &mut options.signature_offset_pt.1,
        -1000.0..=1000.0,
    );

    ui.separator();
    ui.heading("Preview");
    changed |= fraction_drag(ui, "Max width", &mut options.viewport.width_fraction);
    changed |= fraction_drag(ui, "Max height", &mut options.viewport.height_fraction);
    ui.weak("Applies to the next document opened");

    if ui.button("Reset to defaults").clicked() {
        *options = OverlayOptions::default();
        changed = true;
    }

    changed
}
