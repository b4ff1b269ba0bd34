use std::collections::HashMap;

/// Slot holding the spoken search topic.
pub const QUERY_SLOT: &str = "Query";
/// Slot holding the spoken article reference.
pub const NUMBER_SLOT: &str = "Number";

/// What the controller does with an intent, independent of its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntentKind {
    StartTopicSearch,
    RequestSummary,
    ShareSelected,
    MoreHeadlines,
    EndSession,
    Help,
    Stop,
    Cancel,
}

/// Intent name to handler table, fixed when the controller is built.
#[derive(Debug, Clone)]
pub struct IntentRoutes {
    routes: HashMap<String, IntentKind>,
}

impl IntentRoutes {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    #[must_use]
    pub fn route(mut self, intent_name: &str, kind: IntentKind) -> Self {
        self.routes.insert(intent_name.to_string(), kind);
        self
    }

    #[must_use]
    pub fn resolve(&self, intent_name: &str) -> Option<IntentKind> {
        self.routes.get(intent_name).copied()
    }
}

impl Default for IntentRoutes {
    fn default() -> Self {
        Self::empty()
            .route("SearchIntent", IntentKind::StartTopicSearch)
            .route("GetFirstEventIntent", IntentKind::StartTopicSearch)
            .route("GetSummaryIntent", IntentKind::RequestSummary)
            .route("ShareArticleIntent", IntentKind::ShareSelected)
            .route("GetNextHeadlinesIntent", IntentKind::MoreHeadlines)
            .route("AMAZON.NextIntent", IntentKind::MoreHeadlines)
            .route("EndIntent", IntentKind::EndSession)
            .route("AMAZON.HelpIntent", IntentKind::Help)
            .route("AMAZON.StopIntent", IntentKind::Stop)
            .route("AMAZON.CancelIntent", IntentKind::Cancel)
    }
}

/// A recognised user request with its filled slots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntentRequest {
    pub name: String,
    pub slots: HashMap<String, String>,
}

impl IntentRequest {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            slots: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_slot(mut self, slot: &str, value: &str) -> Self {
        self.slots.insert(slot.to_string(), value.to_string());
        self
    }

    /// Slot value, treating blank values as unfilled.
    #[must_use]
    pub fn slot(&self, slot: &str) -> Option<&str> {
        self.slots
            .get(slot)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }
}

/// Everything the transport can hand to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillEvent {
    SessionStarted,
    Launch,
    Intent(IntentRequest),
    SessionEnded,
}
