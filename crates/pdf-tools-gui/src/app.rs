use eframe::egui;
use pdf_async_runtime::{DocumentId, PdfCommand, PdfUpdate};
use pdf_stamp::{OverlayAsset, OverlayOptions, Session, ViewportBounds};
use std::path::PathBuf;
use tokio::sync::mpsc;

use crate::documents::{PendingAssets, stamped_file_name};
use crate::logger::AppLogger;
use crate::views::{OverlayTextures, StampAction, show_canvas, show_settings, show_toolbar};

/// Window size assumed before the first frame reports one
const FALLBACK_WINDOW_SIZE: egui::Vec2 = egui::vec2(1024.0, 768.0);

pub struct PdfStampApp {
    /// Present once page 1 of the current document has been rendered
    session: Option<Session>,
    current_doc: Option<DocumentId>,
    last_doc_id: DocumentId,
    source_path: Option<PathBuf>,
    /// Asset loads in flight for the current document
    pending_assets: PendingAssets,
    textures: OverlayTextures,
    options: OverlayOptions,
    status: String,
    show_settings: bool,
    show_log: bool,
    logger: AppLogger,

    // Async infrastructure
    command_tx: mpsc::UnboundedSender<PdfCommand>,
    update_rx: mpsc::UnboundedReceiver<PdfUpdate>,
    _tokio_handle: tokio::runtime::Handle,
}

impl PdfStampApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        tokio_handle: tokio::runtime::Handle,
        logger: AppLogger,
    ) -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        // Spawn worker task
        tokio_handle.spawn(crate::worker::worker_task(command_rx, update_tx));

        Self {
            session: None,
            current_doc: None,
            last_doc_id: DocumentId(0),
            source_path: None,
            pending_assets: PendingAssets::default(),
            textures: OverlayTextures::default(),
            options: OverlayOptions::default(),
            status: String::new(),
            show_settings: false,
            show_log: false,
            logger,
            command_tx,
            update_rx,
            _tokio_handle: tokio_handle,
        }
    }

    fn send(&mut self, command: PdfCommand) {
        if self.command_tx.send(command).is_err() {
            log::error!("Worker is not running");
            self.status = "Error: background worker stopped".to_string();
        }
    }

    fn viewport_bounds(&self, ctx: &egui::Context) -> ViewportBounds {
        let window = ctx
            .input(|i| i.viewport().inner_rect)
            .map(|rect| rect.size())
            .unwrap_or(FALLBACK_WINDOW_SIZE);
        ViewportBounds::from_window(window.x, window.y, &self.options.viewport)
    }

    /// Start over with a new document. Anchor, assets and scale of the old one are dropped.
    fn open_document(&mut self, ctx: &egui::Context, path: PathBuf) {
        self.close_document();

        let doc_id = self.last_doc_id.next();
        self.last_doc_id = doc_id;
        self.current_doc = Some(doc_id);
        self.pending_assets.reset(Some(doc_id));
        self.source_path = Some(path.clone());

        let bounds = self.viewport_bounds(ctx);
        self.status = format!("Loading {}...", path.display());
        self.send(PdfCommand::LoadDocument {
            doc_id,
            path,
            bounds,
        });
    }

    fn close_document(&mut self) {
        if let Some(doc_id) = self.current_doc.take() {
            self.send(PdfCommand::CloseDocument { doc_id });
        }
        self.session = None;
        self.source_path = None;
        self.pending_assets.reset(None);
        self.textures.reset();
    }

    fn handle_action(&mut self, ctx: &egui::Context, action: StampAction) {
        match action {
            StampAction::OpenDocument(path) => self.open_document(ctx, path),
            StampAction::LoadAsset(kind, path) => {
                let Some(doc_id) = self.current_doc else {
                    return;
                };
                self.pending_assets.request(kind, path.clone());
                self.send(PdfCommand::LoadAsset { doc_id, kind, path });
            }
            StampAction::RemoveAsset(kind) => {
                self.pending_assets.cancel(kind);
                self.session = self.session.take().map(|s| s.without_asset(kind));
                self.textures.set(kind, None);
                self.textures.set_path(kind, None);
            }
            StampAction::Click(event, rect) => {
                self.session = self.session.take().map(|s| s.with_click(event, rect));
                if let Some(click) = self.session.as_ref().and_then(Session::anchor) {
                    log::debug!(
                        "Anchor at ({:.1}, {:.1}) scale {:.3}",
                        click.anchor.x,
                        click.anchor.y,
                        click.scale
                    );
                }
            }
            StampAction::Generate(output_path) => {
                let (Some(session), Some(doc_id)) = (&self.session, self.current_doc) else {
                    return;
                };
                let command = PdfCommand::Generate {
                    doc_id,
                    document: session.document().clone(),
                    request: session.request(),
                    options: self.options.clone(),
                    output_path,
                };
                self.status = "Generating...".to_string();
                self.send(command);
            }
            StampAction::Close => {
                self.close_document();
                self.status = "Closed PDF".to_string();
            }
        }
    }

    fn handle_update(&mut self, ctx: &egui::Context, update: PdfUpdate) {
        if let Some(doc_id) = update.doc_id() {
            if matches!(update, PdfUpdate::DocumentRendered { .. })
                && Some(doc_id) != self.current_doc
            {
                log::debug!("Discarding render of superseded document {:?}", doc_id);
                return;
            }
        }

        match update {
            PdfUpdate::DocumentRendered {
                document,
                viewport,
                width,
                height,
                rgba_data,
                ..
            } => {
                let color_image =
                    egui::ColorImage::from_rgba_unmultiplied([width, height], &rgba_data);
                self.textures.page = Some(ctx.load_texture(
                    "pdf_page",
                    color_image,
                    egui::TextureOptions::default(),
                ));
                self.session = Some(Session::new(document, viewport));
                self.status = "Click on the page to place the stamp".to_string();
            }
            PdfUpdate::AssetLoaded {
                doc_id,
                kind,
                path,
                bytes,
                width,
                height,
                rgba_data,
            } => {
                if !self.pending_assets.accept(doc_id, kind, &path) {
                    log::debug!("Discarding superseded {} image {}", kind.label(), path.display());
                    return;
                }
                let Some(session) = self.session.take() else {
                    return;
                };
                self.session = Some(session.with_asset(OverlayAsset::new(kind, bytes)));

                let color_image =
                    egui::ColorImage::from_rgba_unmultiplied([width, height], &rgba_data);
                self.textures.set(
                    kind,
                    Some(ctx.load_texture(
                        format!("overlay_{}", kind.label()),
                        color_image,
                        egui::TextureOptions::LINEAR,
                    )),
                );
                self.textures.set_path(kind, Some(path));
            }
            PdfUpdate::GenerateComplete {
                path, byte_count, ..
            } => {
                log::info!("Wrote {} bytes to {}", byte_count, path.display());
                self.status = format!("Stamped PDF → {}", path.display());
            }
            PdfUpdate::DocumentClosed { doc_id } => {
                log::debug!("Worker closed document {:?}", doc_id);
            }
            PdfUpdate::OptionsLoaded { options } => {
                self.options = options;
                self.status = "Loaded overlay settings".to_string();
            }
            PdfUpdate::OptionsSaved { path } => {
                self.status = format!("Saved overlay settings → {}", path.display());
            }
            PdfUpdate::Error { message } => {
                log::error!("{}", message);
                self.status = format!("Error: {message}");
            }
        }
    }

    fn show_settings_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("settings").show(ctx, |ui| {
            show_settings(ui, &mut self.options);
            if let Err(e) = self.options.validate() {
                ui.colored_label(egui::Color32::RED, e.to_string());
            }

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Load...").clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("JSON", &["json"])
                        .pick_file()
                    {
                        self.send(PdfCommand::LoadOptions { path });
                    }
                }
                if ui.button("Save...").clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("JSON", &["json"])
                        .set_file_name("overlay.json")
                        .save_file()
                    {
                        let options = self.options.clone();
                        self.send(PdfCommand::SaveOptions { options, path });
                    }
                }
            });
        });
    }

    fn show_log_window(&mut self, ctx: &egui::Context) {
        let mut open = self.show_log;
        egui::Window::new("Log").open(&mut open).show(ctx, |ui| {
            if ui.button("Clear").clicked() {
                self.logger.clear();
            }
            ui.separator();
            egui::ScrollArea::vertical()
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for entry in self.logger.entries() {
                        ui.monospace(entry.status_line());
                    }
                });
        });
        self.show_log = open;
    }
}

impl eframe::App for PdfStampApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Handle drag-and-drop for PDF files
        let dropped = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|file| file.path.clone())
                .find(|path| path.extension().and_then(|s| s.to_str()) == Some("pdf"))
        });
        if let Some(path) = dropped {
            self.open_document(ctx, path);
        }

        // Process all pending updates from worker
        while let Ok(update) = self.update_rx.try_recv() {
            self.handle_update(ctx, update);
            ctx.request_repaint();
        }

        let default_output = self
            .source_path
            .as_deref()
            .map(stamped_file_name)
            .unwrap_or_else(|| "stamped.pdf".to_string());

        let toolbar_action = egui::TopBottomPanel::top("toolbar")
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.toggle_value(&mut self.show_settings, "⚙ Settings");
                    ui.toggle_value(&mut self.show_log, "📜 Log");
                });
                show_toolbar(ui, self.session.as_ref(), &self.textures, &default_output)
            })
            .inner;

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            if !self.status.is_empty() {
                ui.label(&self.status);
            } else if let Some(entry) = self.logger.latest() {
                ui.label(entry.status_line());
            }
        });

        if self.show_settings {
            self.show_settings_panel(ctx);
        }
        if self.show_log {
            self.show_log_window(ctx);
        }

        let canvas_action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                egui::ScrollArea::both()
                    .show(ui, |ui| {
                        show_canvas(ui, self.session.as_ref(), &self.textures, &self.options)
                    })
                    .inner
            })
            .inner;

        for action in [toolbar_action, canvas_action].into_iter().flatten() {
            self.handle_action(ctx, action);
        }

        let waiting = (self.current_doc.is_some() && self.session.is_none())
            || !self.pending_assets.is_empty()
            || self.status.starts_with("Generating");
        if waiting {
            // Worker updates do not wake the UI on their own
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
