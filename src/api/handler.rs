//! Lambda handler - thin adapter between the voice-assistant envelope and
//! the dialog controller.
//!
//! This module handles:
//! - Envelope decoding and session-attribute restore
//! - Feeding lifecycle and request events to the controller
//! - Encoding the reply and the session to persist

use lambda_runtime::{Error, LambdaEvent};
use serde_json::{Value, json};
use tracing::{error, info};

use super::envelope::{RequestBody, RequestEnvelope, ResponseEnvelope};
use crate::core::models::{ResponseIntent, Speech};
use crate::dialog::DialogController;

const UNREADABLE_REQUEST_MESSAGE: &str = "Sorry, I couldn't understand that request. Goodbye.";

pub use self::function_handler as handler;

/// Lambda handler for the skill entrypoint.
///
/// # Errors
///
/// Never fails for a bad request; malformed payloads get a spoken apology.
/// The `Result` is what `lambda_runtime` expects.
#[tracing::instrument(level = "info", skip(controller, event))]
pub async fn function_handler(
    controller: &DialogController,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    info!(lambda_request_id = %event.context.request_id, "Skill request received");
    Ok(handle_request(controller, event.payload).await)
}

/// Decodes one envelope, runs its events through the controller and
/// encodes the reply.
pub async fn handle_request(controller: &DialogController, payload: Value) -> Value {
    let envelope: RequestEnvelope = match serde_json::from_value(payload) {
        Ok(envelope) => envelope,
        Err(e) => {
            error!("Failed to parse skill request: {}", e);
            return encode(&ResponseEnvelope::new(
                Some(ResponseIntent::Tell {
                    speech: Speech::PlainText(UNREADABLE_REQUEST_MESSAGE.to_string()),
                }),
                None,
            ));
        }
    };

    info!(
        version = envelope.version.as_deref().unwrap_or("-"),
        request_id = envelope.request.request_id().unwrap_or("-"),
        session_id = envelope
            .session
            .as_ref()
            .and_then(|s| s.session_id.as_deref())
            .unwrap_or("-"),
        "Dispatching skill request"
    );

    if let RequestBody::SessionEndedRequest { reason, .. } = &envelope.request {
        info!(
            reason = reason.as_deref().unwrap_or("-"),
            "Session ended by the transport"
        );
    }

    let mut session = envelope.restore_session();
    let mut response = None;
    for event in envelope.events() {
        let turn = controller.handle(event, session).await;
        session = turn.session;
        if turn.response.is_some() {
            response = turn.response;
        }
    }

    encode(&ResponseEnvelope::new(response, session.as_ref()))
}

fn encode(envelope: &ResponseEnvelope) -> Value {
    serde_json::to_value(envelope).unwrap_or_else(|e| {
        error!("Failed to serialize skill response: {}", e);
        json!({ "version": envelope.version, "response": {} })
    })
}
