//! News Flash - a voice-assistant skill that reads current headlines for a topic.
//!
//! The skill runs as a single AWS Lambda behind a voice-assistant skill
//! endpoint:
//! 1. The user names a topic and the skill reads the first three headlines
//! 2. The user asks for a summary of one of them ("summary of article two")
//! 3. The user can ask for more headlines or share the selected article
//!
//! # Architecture
//!
//! - `api` decodes the request envelope and restores session attributes
//! - `dialog` routes intents and drives the conversation state machine
//! - `core::session` pages through results and resolves ordinal references
//! - `speech` renders escaped SSML and companion-app card text
//! - `clients` talks to the article search API and the sharing webhook
//!
//! # Example
//!
//! ```no_run
//! use newsflash::core::config::AppConfig;
//! use newsflash::dialog::{DialogController, IntentRequest, SkillEvent};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     newsflash::setup_logging();
//!
//!     let config = AppConfig::from_env()?;
//!     let controller = DialogController::from_config(&config);
//!
//!     let search = IntentRequest::new("SearchIntent").with_slot("Query", "Brexit");
//!     let turn = controller.handle(SkillEvent::Intent(search), None).await;
//!
//!     let summary = IntentRequest::new("GetSummaryIntent").with_slot("Number", "two");
//!     let turn = controller.handle(SkillEvent::Intent(summary), turn.session).await;
//!     if let Some(response) = turn.response {
//!         println!("{}", response.speech().text());
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod clients;
pub mod core;
pub mod dialog;
pub mod errors;
pub mod speech;

pub use errors::NewsFlashError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. The level comes from `RUST_LOG` and defaults
/// to `info`.
///
/// # Example
///
/// ```
/// newsflash::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
