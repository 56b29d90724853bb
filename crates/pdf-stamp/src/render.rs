//! Page 1 rasterization through pdfium
//!
//! The backend location is configured once per process with
//! [`init_renderer`]; every render binds pdfium on the calling thread.

use crate::types::*;
use crate::viewport::fit_scale;
use pdfium_render::prelude::*;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Where to look for the pdfium shared library
#[derive(Debug, Clone, Default)]
pub struct RendererConfig {
    /// Directory holding the platform library; the system library is used as a fallback
    pub library_dir: Option<PathBuf>,
}

impl RendererConfig {
    /// `vendor/pdfium/lib` under the current directory, when it exists
    pub fn vendored() -> Self {
        let library_dir = std::env::current_dir().ok().and_then(|mut p| {
            p.push("vendor/pdfium/lib");
            if p.exists() { Some(p) } else { None }
        });
        Self { library_dir }
    }
}

static RENDERER_CONFIG: OnceLock<RendererConfig> = OnceLock::new();

/// Configure the rendering backend. Only the first call has an effect.
pub fn init_renderer(config: RendererConfig) -> bool {
    RENDERER_CONFIG.set(config).is_ok()
}

fn bind_pdfium() -> std::result::Result<Pdfium, PdfiumError> {
    let config = RENDERER_CONFIG.get_or_init(RendererConfig::vendored);

    if let Some(dir) = &config.library_dir {
        if let Ok(binding) =
            Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(dir))
        {
            return Ok(Pdfium::new(binding));
        }
    }

    Pdfium::bind_to_system_library().map(Pdfium::new)
}

/// Rasterized page 1 with the viewport it was fitted to
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub viewport: ViewportState,
    pub width: usize,
    pub height: usize,
    pub rgba_data: Vec<u8>,
}

/// Render page 1 scaled to fit the bounds.
pub fn render_first_page(bytes: &[u8], bounds: ViewportBounds) -> Result<RenderedPage> {
    let pdfium = bind_pdfium().map_err(render_error)?;
    let document = pdfium
        .load_pdf_from_byte_slice(bytes, None)
        .map_err(render_error)?;

    if document.pages().len() == 0 {
        return Err(StampError::PageNotFound);
    }
    let page = document.pages().get(0).map_err(render_error)?;

    let native = PageSize::new(page.width().value, page.height().value);
    let scale = fit_scale(native, bounds)?;

    let config = PdfRenderConfig::new()
        .set_target_width((native.width_pt * scale).round().max(1.0) as i32)
        .set_target_height((native.height_pt * scale).round().max(1.0) as i32);

    let bitmap = page.render_with_config(&config).map_err(render_error)?;
    let rgba_data = bitmap.as_rgba_bytes().to_vec();

    Ok(RenderedPage {
        viewport: ViewportState {
            page: native,
            scale,
        },
        width: bitmap.width() as usize,
        height: bitmap.height() as usize,
        rgba_data,
    })
}

/// Render page 1 on the blocking pool
pub async fn render_first_page_async(bytes: Vec<u8>, bounds: ViewportBounds) -> Result<RenderedPage> {
    tokio::task::spawn_blocking(move || render_first_page(&bytes, bounds)).await?
}

fn render_error(e: PdfiumError) -> StampError {
    StampError::Render(e.to_string())
}
