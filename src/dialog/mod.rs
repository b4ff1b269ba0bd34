//! Dialog state machine and intent routing

pub mod controller;
pub mod routes;

pub use controller::{DialogController, DialogPhase, Turn};
pub use routes::{IntentKind, IntentRequest, IntentRoutes, SkillEvent};
