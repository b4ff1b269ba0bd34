//! SSML building blocks.
//!
//! Every piece of third-party text passes through [`escape_text`] before it
//! is placed inside a tag, so headlines containing `&` or `<` cannot break
//! the document.

use quick_xml::escape::escape;

/// Drops control characters and collapses whitespace runs into one space.
#[must_use]
pub fn sanitize_for_speech(raw: &str) -> String {
    raw.split_whitespace()
        .map(|word| word.chars().filter(|c| !c.is_control()).collect::<String>())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Sanitizes and escapes text for use as SSML character data.
#[must_use]
pub fn escape_text(raw: &str) -> String {
    let clean = sanitize_for_speech(raw);
    escape(clean.as_str()).into_owned()
}

/// Wraps escaped text in a `<p>` element.
#[must_use]
pub fn paragraph(raw: &str) -> String {
    format!("<p>{}</p>", escape_text(raw))
}

/// Wraps an already-built SSML body in the `<speak>` root element.
#[must_use]
pub fn speak(body: &str) -> String {
    format!("<speak>{body}</speak>")
}
