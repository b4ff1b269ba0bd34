//! Configuration, data model and session state

pub mod config;
pub mod models;
pub mod session;

pub use models::{Article, Card, ResponseIntent, Speech};
pub use session::{PAGE_SIZE, SessionState, start_session};
