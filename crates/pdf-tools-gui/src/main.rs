#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::Context;
use eframe::egui;

mod app;
mod documents;
mod handlers;
mod logger;
mod ui_components;
mod views;
mod worker;

fn main() -> anyhow::Result<()> {
    let logger = logger::AppLogger::new(500);
    logger
        .clone()
        .init()
        .context("Failed to install logger")?;

    #[cfg(feature = "pdf-viewer")]
    pdf_stamp::render::init_renderer(pdf_stamp::render::RendererConfig::vendored());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let tokio_handle = runtime.handle().clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_title("PDF Stamp & Sign"),
        ..Default::default()
    };

    eframe::run_native(
        "PDF Stamp & Sign",
        options,
        Box::new(move |cc| Ok(Box::new(app::PdfStampApp::new(cc, tokio_handle, logger)))),
    )
    .map_err(|e| anyhow::anyhow!("{}", e))?;

    drop(runtime);
    Ok(())
}
