//! Service layer module
//!
//! Adapters that wrap each remote call in an explicit result

pub mod analysis;
pub mod translation;

pub use analysis::analyze_image;
pub use translation::translate_text;
