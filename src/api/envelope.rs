//! Voice-assistant request and response envelopes.
//!
//! Only the fields the skill reads or writes are modeled; everything else
//! in the transport payload is ignored.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::warn;

use crate::core::models::{Card, ResponseIntent, Speech};
use crate::core::session::SessionState;
use crate::dialog::{IntentRequest, SkillEvent};

pub const ENVELOPE_VERSION: &str = "1.0";

/// Session attribute key the pagination state is stored under.
pub const SESSION_ATTRIBUTE_KEY: &str = "newsflash";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEnvelope {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub session: Option<SessionInfo>,
    pub request: RequestBody,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    #[serde(default)]
    pub new: bool,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub attributes: Option<Map<String, Value>>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum RequestBody {
    LaunchRequest {
        #[serde(default)]
        request_id: Option<String>,
    },
    IntentRequest {
        #[serde(default)]
        request_id: Option<String>,
        intent: IntentPayload,
    },
    SessionEndedRequest {
        #[serde(default)]
        request_id: Option<String>,
        #[serde(default)]
        reason: Option<String>,
    },
}

#[derive(Debug, Deserialize)]
pub struct IntentPayload {
    pub name: String,
    #[serde(default)]
    pub slots: HashMap<String, SlotPayload>,
}

#[derive(Debug, Deserialize)]
pub struct SlotPayload {
    #[serde(default)]
    pub value: Option<String>,
}

impl RequestBody {
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            RequestBody::LaunchRequest { request_id }
            | RequestBody::IntentRequest { request_id, .. }
            | RequestBody::SessionEndedRequest { request_id, .. } => request_id.as_deref(),
        }
    }

    fn to_event(&self) -> SkillEvent {
        match self {
            RequestBody::LaunchRequest { .. } => SkillEvent::Launch,
            RequestBody::IntentRequest { intent, .. } => {
                let slots = intent
                    .slots
                    .iter()
                    .filter_map(|(name, slot)| {
                        slot.value.as_ref().map(|value| (name.clone(), value.clone()))
                    })
                    .collect();
                SkillEvent::Intent(IntentRequest {
                    name: intent.name.clone(),
                    slots,
                })
            }
            RequestBody::SessionEndedRequest { .. } => SkillEvent::SessionEnded,
        }
    }
}

impl RequestEnvelope {
    /// Events to feed the controller, in order. A new session is announced
    /// before the request itself.
    #[must_use]
    pub fn events(&self) -> Vec<SkillEvent> {
        let mut events = Vec::with_capacity(2);
        if self.session.as_ref().is_some_and(|s| s.new) {
            events.push(SkillEvent::SessionStarted);
        }
        events.push(self.request.to_event());
        events
    }

    /// Restores pagination state from the session attributes.
    ///
    /// Missing state yields `None`. State that fails to decode or breaks
    /// the pagination invariants is logged and discarded.
    #[must_use]
    pub fn restore_session(&self) -> Option<SessionState> {
        let raw = self
            .session
            .as_ref()?
            .attributes
            .as_ref()?
            .get(SESSION_ATTRIBUTE_KEY)?
            .clone();

        match serde_json::from_value::<SessionState>(raw) {
            Ok(state) if state.is_consistent() => Some(state),
            Ok(_) => {
                warn!("Discarding inconsistent session state");
                None
            }
            Err(e) => {
                warn!("Discarding undecodable session state: {}", e);
                None
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum OutputSpeech {
    PlainText { text: String },
    #[serde(rename = "SSML")]
    Ssml { ssml: String },
}

impl From<Speech> for OutputSpeech {
    fn from(speech: Speech) -> Self {
        match speech {
            Speech::PlainText(text) => OutputSpeech::PlainText { text },
            Speech::Ssml(ssml) => OutputSpeech::Ssml { ssml },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardPayload {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub title: String,
    pub content: String,
}

impl From<Card> for CardPayload {
    fn from(card: Card) -> Self {
        Self {
            kind: "Simple",
            title: card.title,
            content: card.content,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<CardPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_end_session: Option<bool>,
}

impl From<ResponseIntent> for ResponseBody {
    fn from(intent: ResponseIntent) -> Self {
        match intent {
            ResponseIntent::Ask {
                speech,
                reprompt,
                card,
            } => Self {
                output_speech: Some(speech.into()),
                card: card.map(Into::into),
                reprompt: Some(Reprompt {
                    output_speech: reprompt.into(),
                }),
                should_end_session: Some(false),
            },
            ResponseIntent::Tell { speech } => Self {
                output_speech: Some(speech.into()),
                card: None,
                reprompt: None,
                should_end_session: Some(true),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: &'static str,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub session_attributes: Map<String, Value>,
    pub response: ResponseBody,
}

impl ResponseEnvelope {
    /// Builds the outbound envelope, persisting `session` when present.
    #[must_use]
    pub fn new(response: Option<ResponseIntent>, session: Option<&SessionState>) -> Self {
        let mut session_attributes = Map::new();
        if let Some(state) = session {
            match serde_json::to_value(state) {
                Ok(value) => {
                    session_attributes.insert(SESSION_ATTRIBUTE_KEY.to_string(), value);
                }
                Err(e) => warn!("Failed to serialize session state: {}", e),
            }
        }

        Self {
            version: ENVELOPE_VERSION,
            session_attributes,
            response: response.map(Into::into).unwrap_or_default(),
        }
    }
}
