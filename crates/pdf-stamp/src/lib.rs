pub mod compositor;
pub mod constants;
pub mod engine;
pub mod interaction;
mod options;
#[cfg(feature = "render")]
pub mod render;
mod session;
mod types;
mod viewport;

pub use compositor::{OverlayPresence, PreviewLayout, preview_layout, preview_rect};
pub use engine::{
    DocumentInfo, document_info, first_page_size, load_asset, overlay_rect, read_document, stamp_pdf,
    stamp_pdf_bytes, to_display_space, to_pdf_space, write_document,
};
pub use interaction::{CanvasRect, InteractionTracker, PointerEvent, anchor_from_pointer};
pub use options::*;
pub use session::Session;
pub use types::*;
pub use viewport::fit_scale;
