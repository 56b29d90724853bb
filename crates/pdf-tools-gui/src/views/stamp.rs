use eframe::egui;
use pdf_stamp::{CanvasRect, OverlayKind, OverlayOptions, PointerEvent, Session};
use std::path::{Path, PathBuf};

use crate::ui_components::{file_row, pick_png};

/// What the user asked for this frame
pub enum StampAction {
    OpenDocument(PathBuf),
    LoadAsset(OverlayKind, PathBuf),
    RemoveAsset(OverlayKind),
    Click(PointerEvent, CanvasRect),
    Generate(PathBuf),
    Close,
}

/// GPU textures for the rendered page and the two overlay images
#[derive(Default)]
pub struct OverlayTextures {
    pub page: Option<egui::TextureHandle>,
    pub stamp: Option<egui::TextureHandle>,
    pub signature: Option<egui::TextureHandle>,
    pub stamp_path: Option<PathBuf>,
    pub signature_path: Option<PathBuf>,
}

impl OverlayTextures {
    pub fn get(&self, kind: OverlayKind) -> Option<&egui::TextureHandle> {
        match kind {
            OverlayKind::Stamp => self.stamp.as_ref(),
            OverlayKind::Signature => self.signature.as_ref(),
        }
    }

    pub fn path(&self, kind: OverlayKind) -> Option<&Path> {
        match kind {
            OverlayKind::Stamp => self.stamp_path.as_deref(),
            OverlayKind::Signature => self.signature_path.as_deref(),
        }
    }

    pub fn set(&mut self, kind: OverlayKind, texture: Option<egui::TextureHandle>) {
        match kind {
            OverlayKind::Stamp => self.stamp = texture,
            OverlayKind::Signature => self.signature = texture,
        }
    }

    pub fn set_path(&mut self, kind: OverlayKind, path: Option<PathBuf>) {
        match kind {
            OverlayKind::Stamp => self.stamp_path = path,
            OverlayKind::Signature => self.signature_path = path,
        }
    }

    /// Forget everything tied to the previous document
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

pub fn show_toolbar(
    ui: &mut egui::Ui,
    session: Option<&Session>,
    textures: &OverlayTextures,
    default_output: &str,
) -> Option<StampAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        if ui.button("📂 Open PDF...").clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("PDF", &["pdf"])
                .pick_file()
            {
                action = Some(StampAction::OpenDocument(path));
            }
        }

        ui.separator();

        let has_document = session.is_some();
        for kind in [OverlayKind::Stamp, OverlayKind::Signature] {
            if ui
                .add_enabled(has_document, egui::Button::new(format!("{}...", kind.label())))
                .clicked()
            {
                if let Some(path) = pick_png(&format!("Choose {} image", kind.label())) {
                    action = Some(StampAction::LoadAsset(kind, path));
                }
            }
        }

        ui.separator();

        let can_generate = session.is_some_and(|s| {
            let presence = s.presence();
            presence.stamp || presence.signature
        });
        if ui
            .add_enabled(can_generate, egui::Button::new("💾 Generate PDF..."))
            .clicked()
        {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("PDF", &["pdf"])
                .set_file_name(default_output)
                .save_file()
            {
                action = Some(StampAction::Generate(path));
            }
        }

        if ui
            .add_enabled(has_document, egui::Button::new("Close"))
            .clicked()
        {
            action = Some(StampAction::Close);
        }
    });

    if session.is_some() {
        for kind in [OverlayKind::Stamp, OverlayKind::Signature] {
            if file_row(ui, kind.label(), textures.path(kind)) {
                action = Some(StampAction::RemoveAsset(kind));
            }
        }
    }

    action
}

/// Rendered page 1 with the overlay previews on top. Clicking sets the anchor.
pub fn show_canvas(
    ui: &mut egui::Ui,
    session: Option<&Session>,
    textures: &OverlayTextures,
    options: &OverlayOptions,
) -> Option<StampAction> {
    let (Some(session), Some(page)) = (session, &textures.page) else {
        ui.vertical_centered(|ui| {
            ui.add_space(50.0);
            ui.heading("Stamp & Sign");
            ui.add_space(20.0);
            if session.is_some() {
                ui.spinner();
                ui.label("Rendering page...");
            } else {
                ui.label("Drop a PDF file here or click Open PDF...");
            }
        });
        return None;
    };

    let (width, height) = session.viewport().display_size();
    let response = ui.add(
        egui::Image::new((page.id(), egui::vec2(width, height))).sense(egui::Sense::click()),
    );
    let response = if session.anchor().is_none() {
        response.on_hover_text("Click where the stamp should go")
    } else {
        response
    };
    let canvas = response.rect;

    if let Some(layout) = session.preview(options) {
        let painter = ui.painter();
        for (kind, rect) in layout.draw_order() {
            let screen = egui::Rect::from_min_size(
                egui::pos2(canvas.left() + rect.left, canvas.top() + rect.top),
                egui::vec2(rect.width, rect.height),
            );
            match textures.get(kind) {
                Some(texture) => {
                    painter.image(
                        texture.id(),
                        screen,
                        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                        egui::Color32::WHITE,
                    );
                }
                None => {
                    painter.rect_stroke(
                        screen,
                        0.0,
                        egui::Stroke::new(1.0, egui::Color32::GRAY),
                        egui::StrokeKind::Inside,
                    );
                }
            }
        }
    }

    if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            return Some(StampAction::Click(
                PointerEvent { x: pos.x, y: pos.y },
                CanvasRect {
                    left: canvas.left(),
                    top: canvas.top(),
                    width: canvas.width(),
                    height: canvas.height(),
                },
            ));
        }
    }

    None
}
