//! Azure AI web front-end library
//!
//! Server-rendered pages that forward text to Azure AI Translator and image
//! URLs to Azure AI Vision image analysis

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod providers;
pub mod services;
pub mod utils;
pub mod views;

// Re-export common types
pub use config::Settings;
pub use handlers::{build_router, create_router, AppState};
pub use models::Outcome;
pub use providers::{ImageAnalyzer, Translator};
pub use utils::error::{AppError, AppResult};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get version information
pub fn version_info() -> String {
    format!("{} v{}", NAME, VERSION)
}
