// Integration tests for search functionality

use faq_search::core::search::{score, MAX_RESULTS, NO_MATCHES_SUMMARY};
use faq_search::core::types::SearchResponse;
use faq_search::{Config, DocumentStore, FaqError, Services};

use crate::common::{bundled_services, create_test_services};

/// Queries that exercise the bundled corpus from several angles
const QUERIES: &[&str] = &[
    "trust badges",
    "form",
    "test",
    "funnel",
    "question",
    "page speed",
    "call-to-action",
    "how",
    "a",
    "zzzznonexistentzzzz",
];

#[test]
fn test_search_basic_query() {
    let services = create_test_services();

    let response = services.search.search("funnel").expect("Search failed");

    assert_eq!(response.sources[0], "funnel");
    assert_eq!(response.results[0].snippet, "Add the funnel steps in order.");
    assert_eq!(response.summary, "Found information about: Funnel setup.");
}

#[test]
fn test_search_summary_quotes_metrics() {
    let services = create_test_services();

    let response = services.search.search("trust badges").unwrap();

    assert_eq!(response.sources, vec!["badges"]);
    assert_eq!(
        response.summary,
        "Results highlight: Adding trust badges. Key improvements: 18%."
    );
}

#[test]
fn test_search_snippet_centers_on_phrase() {
    let services = create_test_services();

    let response = services.search.search("Short Forms").unwrap();
    let top = &response.results[0];

    assert_eq!(top.id, "forms");
    // Original casing of the body is kept
    assert!(top.snippet.contains("Short forms raised completion"));
    assert!(top.snippet.starts_with("..."));
}

#[test]
fn test_every_result_has_positive_score() {
    let services = bundled_services();

    for query in QUERIES {
        let response = services.search.search(query).unwrap();
        for result in &response.results {
            let document = services.store.get(&result.id).unwrap();
            assert!(score(query, document) > 0, "{query}: {}", result.id);
        }
    }
}

#[test]
fn test_results_sorted_and_capped() {
    let services = bundled_services();

    for query in QUERIES {
        let response = services.search.search(query).unwrap();
        assert!(response.results.len() <= MAX_RESULTS);
        assert_eq!(response.count, response.results.len());

        let scores: Vec<u64> = response
            .results
            .iter()
            .map(|r| score(query, services.store.get(&r.id).unwrap()))
            .collect();
        assert!(
            scores.windows(2).all(|w| w[0] >= w[1]),
            "{query}: {scores:?}"
        );
    }
}

#[test]
fn test_sources_follow_results() {
    let services = bundled_services();

    for query in QUERIES {
        let response = services.search.search(query).unwrap();
        let ids: Vec<&str> = response.results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(response.sources, ids, "{query}");
    }
}

#[test]
fn test_result_bodies_match_store() {
    let services = bundled_services();

    let response = services.search.search("test").unwrap();
    for result in &response.results {
        let document = services.store.get(&result.id).unwrap();
        assert_eq!(result.title, document.title);
        assert_eq!(result.body, document.body);
    }
}

#[test]
fn test_exact_title_ranks_first() {
    let services = bundled_services();

    for document in services.store.documents() {
        let response = services.search.search(&document.title).unwrap();
        assert_eq!(response.sources[0], document.id, "{}", document.title);
    }
}

#[test]
fn test_snippets_bounded() {
    let services = bundled_services();

    for query in QUERIES {
        let response = services.search.search(query).unwrap();
        for result in &response.results {
            let len = result.snippet.chars().count();
            let bound = 3 + 20 + query.chars().count() + 100 + 3;
            assert!(len <= bound.max(123), "{query}: {len}");
        }
    }
}

#[test]
fn test_no_matches() {
    let services = bundled_services();

    let response = services.search.search("zzzznonexistentzzzz").unwrap();

    assert_eq!(
        response,
        SearchResponse {
            results: vec![],
            count: 0,
            summary: NO_MATCHES_SUMMARY.to_string(),
            sources: vec![],
            query: "zzzznonexistentzzzz".to_string(),
        }
    );
}

#[test]
fn test_blank_query_rejected() {
    let services = bundled_services();

    for query in ["", " ", "\n\t"] {
        let err = services.search.search(query).unwrap_err();
        assert!(matches!(err, FaqError::InvalidQuery(_)));
        assert!(err.is_bad_request());
    }
}

#[test]
fn test_snippet_length_from_config() {
    let mut config = Config::default();
    config.search.snippet_length = 30;
    let services = Services::with_store(config, DocumentStore::bundled().unwrap());

    // Only matches a title, so the snippet is the body's opening
    let response = services.search.search("kinds").unwrap();
    let snippet = &response.results[0].snippet;

    assert_eq!(snippet.chars().count(), 33);
    assert!(snippet.ends_with("..."));
}

#[test]
fn test_search_is_repeatable() {
    let services = bundled_services();

    for query in QUERIES {
        let first = services.search.search(query).unwrap();
        let second = services.search.search(query).unwrap();
        assert_eq!(first, second);
    }
}
