use super::test_helpers::{get, handler, handler_with_broken_visitors, send, state_with};
use crate::conf::{DevExcuseConfig, Environment};
use crate::proxy::handlers::{AVAILABLE_ENDPOINTS, ApiHandler, search_status};
use crate::selection::SearchOutcome;
use crate::visitors::MemoryVisitorStore;
use http::{Method, StatusCode, header};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn excuse_returns_single_record() {
    let h = handler();
    let resp = get(&h, "/excuse").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(
        resp.headers[header::CONTENT_TYPE],
        "application/json; charset=utf-8"
    );
    assert_eq!(
        resp.json_body(),
        Some(json!({"text": "It works on my machine.", "category": "classic"}))
    );
}

#[tokio::test]
async fn excuse_category_is_case_insensitive() {
    let h = handler();
    let resp = get(&h, "/excuse?category=BACKEND").await;

    assert_eq!(
        resp.json_body(),
        Some(json!({"text": "The cache wasn't cleared.", "category": "backend"}))
    );
}

#[tokio::test]
async fn unknown_category_is_404() {
    let h = handler();
    let resp = get(&h, "/excuse?category=quantum").await;

    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert_eq!(
        resp.json_body(),
        Some(json!({"error": "No excuses found for that category."}))
    );
}

#[tokio::test]
async fn empty_category_means_any() {
    let h = handler();
    let resp = get(&h, "/excuse?category=").await;

    assert_eq!(resp.status, StatusCode::OK);
}

#[tokio::test]
async fn count_returns_array() {
    let h = handler();
    let resp = get(&h, "/excuse?count=3&category=devil").await;

    assert_eq!(resp.status, StatusCode::OK);
    let devil = json!({"text": "I deleted production.", "category": "devil"});
    assert_eq!(resp.json_body(), Some(json!([devil, devil, devil])));
}

#[tokio::test]
async fn count_with_unknown_category_is_empty_array() {
    let h = handler();
    let resp = get(&h, "/excuse?count=2&category=quantum").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json_body(), Some(json!([])));
}

#[tokio::test]
async fn count_is_clamped_to_max() {
    let h = handler();
    let resp = get(&h, "/excuse?count=500").await;

    let body = resp.json_body().unwrap();
    assert_eq!(body.as_array().map(Vec::len), Some(10));
}

#[tokio::test]
async fn devil_is_a_literal() {
    let h = handler();
    let resp = get(&h, "/excuse/devil").await;

    assert_eq!(
        resp.json_body(),
        Some(json!({"text": "I deleted production.", "category": "devil"}))
    );
}

#[tokio::test]
async fn categories_are_sorted() {
    let h = handler();
    let resp = get(&h, "/categories").await;

    assert_eq!(
        resp.json_body(),
        Some(json!(["AI", "backend", "classic", "devil"]))
    );
}

#[tokio::test]
async fn search_finds_matches_in_corpus_order() {
    let h = handler();
    let resp = get(&h, "/search?q=CACHE").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(
        resp.json_body(),
        Some(json!({
            "excuses": [
                {"excuse": "Try clearing your cache.", "category": "classic"},
                {"excuse": "The cache wasn't cleared.", "category": "backend"},
            ],
            "count": 2,
            "query": "CACHE",
            "message": "Found 2 excuse(s) containing \"CACHE\"",
        }))
    );
}

#[tokio::test]
async fn search_query_is_percent_decoded() {
    let h = handler();
    let resp = get(&h, "/search?q=my%20machine").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json_body().unwrap()["count"], json!(1));
}

#[tokio::test]
async fn search_without_matches_is_404_with_payload() {
    let h = handler();
    let resp = get(&h, "/search?q=kubernetes").await;

    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert_eq!(
        resp.json_body(),
        Some(json!({
            "results": [],
            "message": "No excuses found containing \"kubernetes\". Try a different search term.",
            "query": "kubernetes",
            "count": 0,
        }))
    );
}

#[tokio::test]
async fn search_without_query_is_400() {
    let h = handler();

    for uri in ["/search", "/search?q="] {
        let resp = get(&h, uri).await;
        assert_eq!(resp.status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(
            resp.json_body(),
            Some(json!({"error": "Missing query parameter ?q="}))
        );
    }
}

#[tokio::test]
async fn health_reports_limits() {
    let h = handler();
    let resp = get(&h, "/health").await;
    let body = resp.json_body().unwrap();

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(body["status"], json!("healthy"));
    assert!(body["uptime"].is_f64());
    assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));
    assert_eq!(
        body["rateLimit"],
        json!({
            "general": "100 requests per 15 minutes",
            "search": "30 requests per 15 minutes",
        })
    );
}

#[tokio::test]
async fn short_windows_are_reported_in_seconds() {
    let mut config = DevExcuseConfig::default();
    config.rate_limit.window_secs = 90;
    let h = ApiHandler::new(state_with(config, Arc::new(MemoryVisitorStore::new())));

    let body = get(&h, "/health").await.json_body().unwrap();
    assert_eq!(
        body["rateLimit"],
        json!({
            "general": "100 requests per 90 seconds",
            "search": "30 requests per 90 seconds",
        })
    );

    let landing = String::from_utf8(get(&h, "/").await.body).unwrap();
    assert!(landing.contains("Search: 30 requests per 90 seconds"));
}

#[tokio::test]
async fn stats_count_served_excuses() {
    let h = handler();

    get(&h, "/excuse").await;
    get(&h, "/excuse?count=2").await;
    get(&h, "/excuse/devil").await;
    get(&h, "/excuse?category=quantum").await;

    let resp = get(&h, "/stats").await;
    assert_eq!(
        resp.json_body(),
        Some(json!({"totalExcuses": 5, "totalServed": 3}))
    );
}

#[tokio::test]
async fn landing_page_is_html() {
    let h = handler();
    let resp = get(&h, "/").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.headers[header::CONTENT_TYPE], "text/html; charset=utf-8");

    let body = String::from_utf8(resp.body).unwrap();
    assert!(body.contains("/excuse/devil"));
    assert!(body.contains("General: 100 requests per 15 minutes"));
}

#[tokio::test]
async fn unknown_route_lists_endpoints() {
    let h = handler();
    let resp = get(&h, "/nope").await;

    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert_eq!(
        resp.json_body(),
        Some(json!({
            "error": "Endpoint not found",
            "availableEndpoints": AVAILABLE_ENDPOINTS,
        }))
    );
}

#[tokio::test]
async fn wrong_method_is_405_with_allow() {
    let h = handler();
    let resp = send(&h, Method::POST, "/excuse").await;

    assert_eq!(resp.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(resp.headers[header::ALLOW], "GET");
}

#[tokio::test]
async fn visitors_count_and_increment() {
    let h = handler();

    assert_eq!(
        get(&h, "/api/visitors").await.json_body(),
        Some(json!({"count": 0}))
    );
    assert_eq!(
        send(&h, Method::POST, "/api/visitors").await.json_body(),
        Some(json!({"count": 1}))
    );
    assert_eq!(
        get(&h, "/api/visitors").await.json_body(),
        Some(json!({"count": 1}))
    );
}

#[tokio::test]
async fn store_failure_hides_details_in_production() {
    let h = handler_with_broken_visitors(Environment::Production);
    let resp = send(&h, Method::POST, "/api/visitors").await;

    assert_eq!(resp.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        resp.json_body(),
        Some(json!({
            "error": "Internal server error",
            "message": "Something went wrong",
        }))
    );
}

#[tokio::test]
async fn store_failure_shows_details_in_development() {
    let h = handler_with_broken_visitors(Environment::Development);
    let resp = get(&h, "/api/visitors").await;
    let body = resp.json_body().unwrap();

    assert_eq!(resp.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(
        body["message"].as_str().unwrap().contains("disk on fire"),
        "{body}"
    );
}

#[test]
fn search_status_follows_outcome() {
    assert_eq!(
        search_status(&SearchOutcome::found("cache", Vec::new())),
        StatusCode::OK
    );
    assert_eq!(
        search_status(&SearchOutcome::no_matches("quantum")),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        search_status(&SearchOutcome::no_query()),
        StatusCode::BAD_REQUEST
    );
}

#[tokio::test]
async fn trailing_slash_search_is_routed() {
    let h = handler();
    let resp = get(&h, "/search/?q=cache").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json_body().unwrap()["count"], json!(2));
}
