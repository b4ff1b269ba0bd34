use newsflash::clients::article_source::parse_search_response;
use newsflash::errors::NewsFlashError;
use serde_json::json;

#[test]
fn test_parses_docs_in_order() {
    let body = json!({
        "status": "OK",
        "response": {
            "docs": [
                {
                    "headline": { "main": "Brexit deal stalls" },
                    "abstract": "Talks break down again.",
                    "lead_paragraph": "LONDON - Talks broke down.",
                    "web_url": "https://www.nytimes.com/2019/01/01/world/brexit.html"
                },
                {
                    "headline": { "main": "Markets react" },
                    "abstract": "Stocks fall.",
                    "web_url": "https://www.nytimes.com/2019/01/01/business/markets.html"
                }
            ]
        }
    })
    .to_string();

    let articles = parse_search_response(&body).unwrap();
    assert_eq!(articles.len(), 2);
    assert_eq!(articles[0].headline, "Brexit deal stalls");
    assert_eq!(articles[0].summary, "Talks break down again.");
    assert_eq!(
        articles[1].url,
        "https://www.nytimes.com/2019/01/01/business/markets.html"
    );
}

#[test]
fn test_summary_falls_back_to_lead_paragraph() {
    let body = json!({
        "response": {
            "docs": [
                {
                    "headline": { "main": "No abstract here" },
                    "abstract": "   ",
                    "lead_paragraph": "The lead paragraph stands in.",
                    "web_url": "https://example.com/a"
                },
                {
                    "headline": { "main": "Only a snippet" },
                    "abstract": null,
                    "snippet": "A snippet.",
                    "web_url": "https://example.com/b"
                }
            ]
        }
    })
    .to_string();

    let articles = parse_search_response(&body).unwrap();
    assert_eq!(articles[0].summary, "The lead paragraph stands in.");
    assert_eq!(articles[1].summary, "A snippet.");
}

#[test]
fn test_unusable_docs_are_skipped() {
    let body = json!({
        "response": {
            "docs": [
                { "headline": { "main": "No summary at all" }, "web_url": "https://example.com/a" },
                { "headline": [], "abstract": "Headless", "web_url": "https://example.com/b" },
                { "headline": { "main": "Bad url" }, "abstract": "x", "web_url": "ftp://example.com/c" },
                { "headline": { "main": "Keeper" }, "abstract": "Fine.", "web_url": "https://example.com/d" }
            ]
        }
    })
    .to_string();

    let articles = parse_search_response(&body).unwrap();
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].headline, "Keeper");
}

#[test]
fn test_fewer_than_a_page_is_not_an_error() {
    let body = json!({ "response": { "docs": [] } }).to_string();
    assert!(parse_search_response(&body).unwrap().is_empty());

    let body = json!({ "response": {} }).to_string();
    assert!(parse_search_response(&body).unwrap().is_empty());
}

#[test]
fn test_malformed_bodies_are_source_unavailable() {
    for body in ["not json", r#"{"fault": {"faultstring": "Invalid ApiKey"}}"#] {
        let err = parse_search_response(body).unwrap_err();
        assert!(
            matches!(err, NewsFlashError::SourceUnavailable(_)),
            "body {body:?} gave {err:?}"
        );
    }
}
