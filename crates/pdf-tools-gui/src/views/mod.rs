pub mod settings;
pub mod stamp;

pub use settings::show_settings;
pub use stamp::{OverlayTextures, StampAction, show_canvas, show_toolbar};
