//! Lambda-facing entry points

pub mod handler;

// Re-export the main handler for convenience
pub use handler::{handle_event, lambda_handler};
