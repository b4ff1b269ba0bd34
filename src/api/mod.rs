//! Lambda handler and envelope mapping

pub mod envelope;
pub mod handler;

// Re-export the main handler for convenience
pub use handler::{handle_request, handler};
