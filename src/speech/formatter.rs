//! Speech and card templates for every reply the skill gives.
//!
//! Functions returning a pair give `(ssml, card_text)`. The SSML is a full
//! `<speak>` document; the card text is plain and unescaped.

use super::ssml::{escape_text, paragraph, sanitize_for_speech, speak};
use crate::core::models::Article;

pub const WELCOME_CARD_TITLE: &str = "News Flash Current Events";
pub const SUMMARY_CARD_TITLE: &str = "Here is the summary:";

const HELP_TEXT: &str = "With News Flash, you can get current event headlines for any topic. \
    For example, you could say Brexit, Donald Trump, or NBA Finals. Now, which topic do you want?";
const TOPIC_REPROMPT: &str = "Which topic do you want?";
const SUMMARY_FOLLOW_UP: &str =
    "Want me to share this article? You can also ask for another summary.";

/// Title for the card accompanying a page of headlines.
#[must_use]
pub fn page_card_title(topic: &str) -> String {
    format!("Headlines for {}", sanitize_for_speech(topic))
}

/// "1", "1 or 2", "1, 2, or 3".
fn ordinal_choices(count: usize) -> String {
    match count {
        0 | 1 => "1".to_string(),
        2 => "1 or 2".to_string(),
        n => {
            let head: Vec<String> = (1..n).map(|i| i.to_string()).collect();
            format!("{}, or {}", head.join(", "), n)
        }
    }
}

/// Prompt inviting a summary selection for a page of `count` articles.
#[must_use]
pub fn page_prompt(count: usize) -> String {
    if count <= 1 {
        "Want a summary on article 1?".to_string()
    } else {
        format!("Want a summary on article {}?", ordinal_choices(count))
    }
}

fn render_page(heading: &str, articles: &[Article]) -> (String, String) {
    let mut body = paragraph(heading);
    let mut card = heading.to_string();

    for (i, article) in articles.iter().enumerate() {
        body.push_str(&format!(
            " Article {}: <p>{}</p>",
            i + 1,
            escape_text(&article.headline)
        ));
        card.push_str(&format!(
            "\n{}. {}",
            i + 1,
            sanitize_for_speech(&article.headline)
        ));
    }

    body.push(' ');
    body.push_str(&paragraph(&page_prompt(articles.len())));

    (speak(&body), card)
}

/// Formats the first page of headlines for a topic.
#[must_use]
pub fn format_page(topic: &str, articles: &[Article]) -> (String, String) {
    render_page(&format!("Headlines for {}.", topic), articles)
}

/// Formats a follow-up page of headlines for a topic.
#[must_use]
pub fn format_next_page(topic: &str, articles: &[Article]) -> (String, String) {
    render_page(&format!("More headlines for {}.", topic), articles)
}

/// Formats one article's headline and full summary.
#[must_use]
pub fn format_summary(article: &Article) -> (String, String) {
    let body = format!(
        "{} {} {}",
        paragraph(&format!("Summary for {}.", article.headline)),
        paragraph(&article.summary),
        paragraph(SUMMARY_FOLLOW_UP)
    );
    let card = format!(
        "{}\n\n{}\n\n{}",
        sanitize_for_speech(&article.headline),
        sanitize_for_speech(&article.summary),
        article.url
    );
    (speak(&body), card)
}

#[must_use]
pub fn format_welcome() -> (String, String) {
    (
        speak("<p>News Flash Current Events.</p> <p>What news topic do you want headlines for?</p>"),
        "News Flash. What news topic do you want headlines for?".to_string(),
    )
}

#[must_use]
pub fn format_goodbye() -> String {
    "Goodbye".to_string()
}

/// Returns `(speech, reprompt)`.
#[must_use]
pub fn format_help() -> (String, String) {
    (HELP_TEXT.to_string(), TOPIC_REPROMPT.to_string())
}

#[must_use]
pub fn format_no_more(topic: &str) -> (String, String) {
    let text = format!(
        "That's all the headlines I have for {}. Which other topic do you want?",
        sanitize_for_speech(topic)
    );
    (speak(&paragraph(&text)), text)
}

#[must_use]
pub fn format_invalid_ordinal(shown: usize) -> String {
    if shown == 0 {
        return format!("I haven't read you any headlines yet. {}", TOPIC_REPROMPT);
    }
    format!(
        "Sorry, I didn't catch which article you meant. Please say article {}.",
        ordinal_choices(shown)
    )
}

#[must_use]
pub fn format_no_selection() -> String {
    "Which article do you want to share? Ask for a summary first, for example, say summary of article 1."
        .to_string()
}

#[must_use]
pub fn format_no_results(topic: &str) -> String {
    format!(
        "Sorry, I couldn't find any headlines for {}. Please try again later.",
        sanitize_for_speech(topic)
    )
}

#[must_use]
pub fn format_source_unavailable() -> String {
    "There is a problem connecting to New York Times article search at this time. Please try again later."
        .to_string()
}

#[must_use]
pub fn format_share_confirmation() -> String {
    "Sharing the link. Goodbye!".to_string()
}

#[must_use]
pub fn format_share_failed() -> String {
    "Sorry, I couldn't share that article right now. Goodbye!".to_string()
}
