use serde::{Deserialize, Serialize};

/// A single search result as presented to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub headline: String,
    pub summary: String,
    pub url: String,
}

/// Spoken output, either plain text or SSML markup wrapped in `<speak>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Speech {
    PlainText(String),
    Ssml(String),
}

impl Speech {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Speech::PlainText(s) | Speech::Ssml(s) => s,
        }
    }
}

/// Simple companion-app card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub content: String,
}

/// The two terminal shapes of an outbound reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseIntent {
    /// Keeps the session open and waits for more input.
    Ask {
        speech: Speech,
        reprompt: Speech,
        card: Option<Card>,
    },
    /// Ends the session.
    Tell { speech: Speech },
}

impl ResponseIntent {
    #[must_use]
    pub fn ends_session(&self) -> bool {
        matches!(self, ResponseIntent::Tell { .. })
    }

    #[must_use]
    pub fn speech(&self) -> &Speech {
        match self {
            ResponseIntent::Ask { speech, .. } | ResponseIntent::Tell { speech } => speech,
        }
    }
}
