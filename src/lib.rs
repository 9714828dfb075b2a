pub mod config;
pub mod error;
pub mod extract;
pub mod runner;

// Re-export key items for convenience
pub use config::DecantConfig;
pub use error::DecantError;
pub use extract::ExtractedDocument;
pub use runner::{Summary, run};
