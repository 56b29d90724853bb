pub mod document;
pub mod stamp;
