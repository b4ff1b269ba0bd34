//! Dialog controller - drives one turn of the conversation.
//!
//! Each turn takes the event and the session restored by the transport,
//! and returns the reply plus the session to persist. Nothing is kept on
//! the controller between turns.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

use super::routes::{IntentKind, IntentRequest, IntentRoutes, NUMBER_SLOT, QUERY_SLOT, SkillEvent};
use crate::clients::{ArticleSource, NytArticleSource, ShareSink, WebhookShareClient};
use crate::core::config::AppConfig;
use crate::core::models::{Article, Card, ResponseIntent, Speech};
use crate::core::session::{SessionState, start_session};
use crate::errors::NewsFlashError;
use crate::speech::formatter::{
    SUMMARY_CARD_TITLE, WELCOME_CARD_TITLE, format_goodbye, format_help, format_invalid_ordinal,
    format_next_page, format_no_more, format_no_results, format_no_selection, format_page,
    format_share_confirmation, format_share_failed, format_source_unavailable, format_summary,
    format_welcome, page_card_title, page_prompt,
};

const SHARE_REPROMPT: &str = "Do you want me to share this article?";

/// Where the conversation stands after a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogPhase {
    Idle,
    AwaitingTopic,
    ResultsShown,
    SummaryShown,
    Ended,
}

impl DialogPhase {
    /// Phase implied by a restored session.
    #[must_use]
    pub fn of(session: Option<&SessionState>) -> Self {
        match session {
            None => DialogPhase::AwaitingTopic,
            Some(state) if state.selected_index().is_some() => DialogPhase::SummaryShown,
            Some(_) => DialogPhase::ResultsShown,
        }
    }
}

/// Result of one turn.
#[derive(Debug, Clone)]
pub struct Turn {
    /// `None` for lifecycle notifications that expect no reply.
    pub response: Option<ResponseIntent>,
    /// State to persist for the next turn; `None` releases it.
    pub session: Option<SessionState>,
    pub phase: DialogPhase,
}

impl Turn {
    fn reply(response: ResponseIntent, session: Option<SessionState>, phase: DialogPhase) -> Self {
        Self {
            response: Some(response),
            session,
            phase,
        }
    }

    fn end(speech: String) -> Self {
        Self::reply(
            ResponseIntent::Tell {
                speech: Speech::PlainText(speech),
            },
            None,
            DialogPhase::Ended,
        )
    }
}

pub struct DialogController {
    source: Arc<dyn ArticleSource>,
    sharer: Arc<dyn ShareSink>,
    routes: IntentRoutes,
    default_topic: String,
    timeout: Duration,
}

impl DialogController {
    #[must_use]
    pub fn new(
        source: Arc<dyn ArticleSource>,
        sharer: Arc<dyn ShareSink>,
        default_topic: &str,
        timeout: Duration,
    ) -> Self {
        Self {
            source,
            sharer,
            routes: IntentRoutes::default(),
            default_topic: default_topic.to_string(),
            timeout,
        }
    }

    /// Builds a controller wired to the production collaborators.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            Arc::new(NytArticleSource::from_config(config)),
            Arc::new(WebhookShareClient::from_config(config)),
            &config.default_topic,
            config.collaborator_timeout,
        )
    }

    #[must_use]
    pub fn with_routes(mut self, routes: IntentRoutes) -> Self {
        self.routes = routes;
        self
    }

    /// Handles one event against the session restored for it.
    pub async fn handle(&self, event: SkillEvent, session: Option<SessionState>) -> Turn {
        let before = DialogPhase::of(session.as_ref());

        let turn = match event {
            SkillEvent::SessionStarted => {
                info!("Session started");
                Turn {
                    response: None,
                    session,
                    phase: DialogPhase::Idle,
                }
            }
            SkillEvent::Launch => self.on_launch(session),
            SkillEvent::Intent(intent) => self.on_intent(&intent, session).await,
            SkillEvent::SessionEnded => {
                info!("Session ended, releasing state");
                Turn {
                    response: None,
                    session: None,
                    phase: DialogPhase::Ended,
                }
            }
        };

        info!(from = ?before, to = ?turn.phase, "Dialog transition");
        turn
    }

    async fn on_intent(&self, intent: &IntentRequest, session: Option<SessionState>) -> Turn {
        let Some(kind) = self.routes.resolve(&intent.name) else {
            warn!(intent = %intent.name, "Unrouted intent, answering with help");
            return self.on_help(session);
        };

        match kind {
            IntentKind::StartTopicSearch => self.on_topic_search(intent).await,
            IntentKind::RequestSummary => Self::on_summary(intent, session),
            IntentKind::ShareSelected => self.on_share(session).await,
            IntentKind::MoreHeadlines => self.on_more(session),
            IntentKind::Help => self.on_help(session),
            IntentKind::EndSession | IntentKind::Stop | IntentKind::Cancel => {
                Turn::end(format_goodbye())
            }
        }
    }

    fn on_launch(&self, session: Option<SessionState>) -> Turn {
        let (ssml, card) = format_welcome();
        let (help, _) = format_help();
        Turn::reply(
            ResponseIntent::Ask {
                speech: Speech::Ssml(ssml),
                reprompt: Speech::PlainText(help),
                card: Some(Card {
                    title: WELCOME_CARD_TITLE.to_string(),
                    content: card,
                }),
            },
            session,
            DialogPhase::AwaitingTopic,
        )
    }

    fn on_help(&self, session: Option<SessionState>) -> Turn {
        let (speech, reprompt) = format_help();
        let phase = DialogPhase::of(session.as_ref());
        Turn::reply(
            ResponseIntent::Ask {
                speech: Speech::PlainText(speech),
                reprompt: Speech::PlainText(reprompt),
                card: None,
            },
            session,
            phase,
        )
    }

    /// Awaits a collaborator call, mapping an elapsed deadline through
    /// `on_timeout`.
    async fn within_deadline<T>(
        &self,
        call: impl Future<Output = Result<T, NewsFlashError>>,
        on_timeout: fn(String) -> NewsFlashError,
    ) -> Result<T, NewsFlashError> {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(on_timeout(format!(
                "no response within {} ms",
                self.timeout.as_millis()
            ))),
        }
    }

    async fn on_topic_search(&self, intent: &IntentRequest) -> Turn {
        let topic = intent
            .slot(QUERY_SLOT)
            .unwrap_or(self.default_topic.as_str())
            .to_string();

        let fetched = self
            .within_deadline(self.source.fetch(&topic), NewsFlashError::SourceUnavailable)
            .await;

        match fetched {
            Ok(articles) if !articles.is_empty() => {
                let (state, page) = start_session(&topic, articles);
                let (ssml, card) = format_page(&topic, &page);
                Turn::reply(
                    ResponseIntent::Ask {
                        speech: Speech::Ssml(ssml),
                        reprompt: Speech::PlainText(page_prompt(page.len())),
                        card: Some(Card {
                            title: page_card_title(&topic),
                            content: card,
                        }),
                    },
                    Some(state),
                    DialogPhase::ResultsShown,
                )
            }
            Ok(_) => {
                warn!(topic = %topic, "Article search returned no results");
                Turn::end(format_no_results(&topic))
            }
            Err(e) => {
                error!(topic = %topic, "Article search failed: {}", e);
                Turn::end(format_source_unavailable())
            }
        }
    }

    fn on_more(&self, session: Option<SessionState>) -> Turn {
        let Some(mut state) = session else {
            return self.on_help(None);
        };

        let topic = state.topic().to_string();

        if !state.has_more() {
            let (ssml, card) = format_no_more(&topic);
            let (_, reprompt) = format_help();
            let phase = DialogPhase::of(Some(&state));
            return Turn::reply(
                ResponseIntent::Ask {
                    speech: Speech::Ssml(ssml),
                    reprompt: Speech::PlainText(reprompt),
                    card: Some(Card {
                        title: page_card_title(&topic),
                        content: card,
                    }),
                },
                Some(state),
                phase,
            );
        }

        let page = state.next_page();
        let (ssml, card) = format_next_page(&topic, &page);
        Turn::reply(
            ResponseIntent::Ask {
                speech: Speech::Ssml(ssml),
                reprompt: Speech::PlainText(page_prompt(page.len())),
                card: Some(Card {
                    title: page_card_title(&topic),
                    content: card,
                }),
            },
            Some(state),
            DialogPhase::ResultsShown,
        )
    }

    fn on_summary(intent: &IntentRequest, session: Option<SessionState>) -> Turn {
        let ordinal = intent.slot(NUMBER_SLOT).unwrap_or_default();

        let Some(mut state) = session else {
            warn!(ordinal = %ordinal, "Summary requested before any search");
            let (_, reprompt) = format_help();
            return Turn::reply(
                ResponseIntent::Ask {
                    speech: Speech::PlainText(format_invalid_ordinal(0)),
                    reprompt: Speech::PlainText(reprompt),
                    card: None,
                },
                None,
                DialogPhase::AwaitingTopic,
            );
        };

        match state.resolve_ordinal(ordinal) {
            Ok(article) => {
                let (ssml, card) = format_summary(&article);
                Turn::reply(
                    ResponseIntent::Ask {
                        speech: Speech::Ssml(ssml),
                        reprompt: Speech::PlainText(SHARE_REPROMPT.to_string()),
                        card: Some(Card {
                            title: SUMMARY_CARD_TITLE.to_string(),
                            content: card,
                        }),
                    },
                    Some(state),
                    DialogPhase::SummaryShown,
                )
            }
            Err(e) => {
                warn!("Could not resolve summary request: {}", e);
                let shown = state.shown_on_page();
                let phase = DialogPhase::of(Some(&state));
                Turn::reply(
                    ResponseIntent::Ask {
                        speech: Speech::PlainText(format_invalid_ordinal(shown)),
                        reprompt: Speech::PlainText(page_prompt(shown)),
                        card: None,
                    },
                    Some(state),
                    phase,
                )
            }
        }
    }

    async fn on_share(&self, session: Option<SessionState>) -> Turn {
        let article = match selected_for_sharing(session.as_ref()) {
            Ok(article) => article,
            Err(e) => {
                warn!("Share requested without a selection: {}", e);
                let phase = DialogPhase::of(session.as_ref());
                return Turn::reply(
                    ResponseIntent::Ask {
                        speech: Speech::PlainText(format_no_selection()),
                        reprompt: Speech::PlainText(format_no_selection()),
                        card: None,
                    },
                    session,
                    phase,
                );
            }
        };

        match self
            .within_deadline(self.sharer.share(&article.url), NewsFlashError::ShareFailed)
            .await
        {
            Ok(()) => Turn::end(format_share_confirmation()),
            Err(e) => {
                error!(url = %article.url, "Share failed: {}", e);
                Turn::end(format_share_failed())
            }
        }
    }
}

fn selected_for_sharing(session: Option<&SessionState>) -> Result<Article, NewsFlashError> {
    session
        .and_then(SessionState::selected_article)
        .cloned()
        .ok_or(NewsFlashError::NoSelection)
}
