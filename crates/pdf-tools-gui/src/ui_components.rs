use eframe::egui;
use std::path::Path;

/// Drag value in PDF points with a label in front
pub fn points_drag(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut f32,
    range: std::ops::RangeInclusive<f32>,
) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(
            egui::DragValue::new(value)
                .range(range)
                .suffix(" pt")
                .speed(1.0),
        )
        .changed()
    })
    .inner
}

/// Drag value for a fraction in (0, 1], shown as a percentage
pub fn fraction_drag(ui: &mut egui::Ui, label: &str, value: &mut f32) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        let mut percent = *value * 100.0;
        let changed = ui
            .add(
                egui::DragValue::new(&mut percent)
                    .range(10.0..=100.0)
                    .suffix(" %")
                    .speed(0.5),
            )
            .changed();
        if changed {
            *value = percent / 100.0;
        }
        changed
    })
    .inner
}

/// Picked-file row: the file name (or a placeholder) and a clear button.
/// Returns true when the clear button was clicked.
pub fn file_row(ui: &mut egui::Ui, label: &str, path: Option<&Path>) -> bool {
    ui.horizontal(|ui| {
        ui.label(format!("{}:", label));
        match path.and_then(|p| p.file_name()) {
            Some(name) => {
                ui.monospace(name.to_string_lossy());
                ui.small_button("✕").on_hover_text("Remove").clicked()
            }
            None => {
                ui.weak("none");
                false
            }
        }
    })
    .inner
}

/// Show a picker for PNG files
pub fn pick_png(title: &str) -> Option<std::path::PathBuf> {
    rfd::FileDialog::new()
        .set_title(title)
        .add_filter("PNG image", &["png"])
        .pick_file()
}
