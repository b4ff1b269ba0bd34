use newsflash::core::models::Article;
use newsflash::core::session::{PAGE_SIZE, SessionState, start_session};
use newsflash::errors::NewsFlashError;

fn articles(n: usize) -> Vec<Article> {
    (1..=n)
        .map(|i| Article {
            headline: format!("Headline {i}"),
            summary: format!("Summary {i}"),
            url: format!("https://example.com/{i}"),
        })
        .collect()
}

#[test]
fn test_first_page_is_clamped_to_available_results() {
    for total in 0..=7 {
        let mut state = SessionState::new("topic", articles(total));
        let page = state.next_page();
        let expected = total.min(PAGE_SIZE);
        assert_eq!(page.len(), expected, "total={total}");
        assert_eq!(state.cursor(), expected, "total={total}");

        let (state, first) = start_session("topic", articles(total));
        assert_eq!(first.len(), expected, "total={total}");
        assert_eq!(state.cursor(), expected, "total={total}");
    }
}

#[test]
fn test_pages_start_at_previous_cursor() {
    let (mut state, first) = start_session("Brexit", articles(7));
    assert_eq!(first[0].headline, "Headline 1");

    let second = state.next_page();
    assert_eq!(
        second.iter().map(|a| a.headline.as_str()).collect::<Vec<_>>(),
        vec!["Headline 4", "Headline 5", "Headline 6"]
    );
    assert_eq!(state.cursor(), 6);

    let third = state.next_page();
    assert_eq!(third.len(), 1);
    assert_eq!(third[0].headline, "Headline 7");
    assert_eq!(state.cursor(), 7);
}

#[test]
fn test_exhausted_results_return_empty_page() {
    let (mut state, _) = start_session("Brexit", articles(2));
    assert!(!state.has_more());
    assert!(state.next_page().is_empty());
    assert_eq!(state.cursor(), 2);
    assert_eq!(state.shown_on_page(), 2);
}

#[test]
fn test_resolve_ordinal_accepts_numerals_and_words() {
    let (mut state, _) = start_session("Brexit", articles(5));

    for (text, expected) in [
        ("1", "Headline 1"),
        ("ONE", "Headline 1"),
        ("2", "Headline 2"),
        ("Two", "Headline 2"),
        ("3", "Headline 3"),
        ("three", "Headline 3"),
        ("second", "Headline 2"),
    ] {
        let article = state.resolve_ordinal(text).unwrap();
        assert_eq!(article.headline, expected, "ordinal {text}");
    }
    assert_eq!(state.selected_index(), Some(1));
}

#[test]
fn test_resolve_ordinal_records_selection() {
    let (mut state, _) = start_session("Brexit", articles(5));
    assert_eq!(state.selected_index(), None);

    let article = state.resolve_ordinal("2").unwrap();
    assert_eq!(article.headline, "Headline 2");
    assert_eq!(state.selected_index(), Some(1));
    assert_eq!(state.selected_article(), Some(&article));
}

#[test]
fn test_resolve_ordinal_rejects_unshown_articles() {
    let (mut state, _) = start_session("Brexit", articles(2));

    for text in ["3", "three", "four", "0", "banana", ""] {
        let err = state.resolve_ordinal(text).unwrap_err();
        assert!(
            matches!(err, NewsFlashError::InvalidOrdinal(_)),
            "ordinal {text:?} gave {err:?}"
        );
    }
    assert_eq!(state.selected_index(), None);
}

#[test]
fn test_resolve_ordinal_is_relative_to_latest_page() {
    let (mut state, _) = start_session("Brexit", articles(5));
    state.resolve_ordinal("1").unwrap();

    let page = state.next_page();
    assert_eq!(page.len(), 2);
    assert_eq!(state.selected_index(), None);

    let article = state.resolve_ordinal("2").unwrap();
    assert_eq!(article.headline, "Headline 5");
    assert_eq!(state.selected_index(), Some(4));

    assert!(state.resolve_ordinal("3").is_err());
}

#[test]
fn test_session_state_round_trips_through_attributes() {
    let (mut state, _) = start_session("Brexit", articles(5));
    state.resolve_ordinal("3").unwrap();

    let value = serde_json::to_value(&state).unwrap();
    assert_eq!(value["cursor"], 3);
    assert_eq!(value["articles"].as_array().map(Vec::len), Some(5));

    let restored: SessionState = serde_json::from_value(value).unwrap();
    assert!(restored.is_consistent());
    assert_eq!(restored, state);
}
