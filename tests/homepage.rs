use std::time::Duration;

use serde_json::json;
use songbook::api::{ContentsQuery, Order};
use songbook::{
    HomepageConfig, HomepageRenderer, HtmlDocument, SongbookError, EMPTY_MESSAGE, FAILURE_MESSAGE,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PAGE: &str = r#"<html><body><h1>Songs</h1><div id="main">loading</div></body></html>"#;

fn renderer(server: &MockServer) -> HomepageRenderer {
    HomepageRenderer::new(HomepageConfig::new(server.uri())).unwrap()
}

#[tokio::test]
async fn test_renders_song_list_into_main() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/contents"))
        .and(query_param("type", "Song"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"id": 1, "title": "Hurt", "artist": "Johnny Cash", "rating": 5, "opinion": "Devastating."},
                {"id": 2, "rating": "meh"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut page = HtmlDocument::new(PAGE);
    renderer(&server).load(&mut page).await.unwrap();

    let main = page.inner_html().unwrap();
    assert!(main.contains("<h3>Hurt by Johnny Cash</h3>"));
    assert!(main.contains("<p>rating: 5</p>"));
    assert!(main.contains("<div>Devastating.</div>"));
    assert!(main.contains("<h3>Unknown by Unknown</h3>"));
    assert!(main.contains("<p>rating: meh</p>"));
    assert!(main.contains("<div>none</div>"));
    assert!(!main.contains("loading"));
    assert!(page.as_str().starts_with("<html><body><h1>Songs</h1><div id=\"main\">"));
}

#[tokio::test]
async fn test_empty_listing_renders_admin_hint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/contents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&server)
        .await;

    let mut fragment = String::new();
    renderer(&server).load(&mut fragment).await.unwrap();
    assert_eq!(fragment, EMPTY_MESSAGE);
}

#[tokio::test]
async fn test_error_status_renders_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/contents"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let mut page = HtmlDocument::new(PAGE);
    renderer(&server).load(&mut page).await.unwrap();
    assert_eq!(page.inner_html(), Some(FAILURE_MESSAGE));
}

#[tokio::test]
async fn test_malformed_body_leaves_page_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/contents"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<h1>oops</h1>"))
        .mount(&server)
        .await;

    let mut page = HtmlDocument::new(PAGE);
    let err = renderer(&server).load(&mut page).await.unwrap_err();
    assert!(matches!(err, SongbookError::ParseError(_)));
    assert_eq!(page.as_str(), PAGE);
}

#[tokio::test]
async fn test_timeout_leaves_page_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/contents"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": []}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let config = HomepageConfig::new(server.uri()).with_timeout(Duration::from_millis(100));
    let renderer = HomepageRenderer::new(config).unwrap();

    let mut page = HtmlDocument::new(PAGE);
    let err = renderer.load(&mut page).await.unwrap_err();
    assert!(matches!(err, SongbookError::Timeout(_)));
    assert_eq!(page.as_str(), PAGE);
}

#[tokio::test]
async fn test_unreachable_server_leaves_page_untouched() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let renderer = HomepageRenderer::new(HomepageConfig::new(uri)).unwrap();
    let mut page = HtmlDocument::new(PAGE);
    let err = renderer.load(&mut page).await.unwrap_err();
    assert!(matches!(err, SongbookError::RequestError(_)));
    assert_eq!(page.as_str(), PAGE);
}

#[tokio::test]
async fn test_paging_parameters_are_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/contents"))
        .and(query_param("type", "Song"))
        .and(query_param("count", "-1"))
        .and(query_param("order", "asc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"title": "First", "artist": "Someone", "rating": 1}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let query = ContentsQuery::default()
        .with_count(-1)
        .with_order(Order::Asc);
    let renderer = HomepageRenderer::new(HomepageConfig::new(server.uri()).with_query(query)).unwrap();

    let mut fragment = String::new();
    renderer.load(&mut fragment).await.unwrap();
    assert!(fragment.contains("<h3>First by Someone</h3>"));
}

#[tokio::test]
async fn test_missing_element_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/contents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&server)
        .await;

    let mut page = HtmlDocument::with_target(PAGE, "content");
    let err = renderer(&server).load(&mut page).await.unwrap_err();
    assert!(matches!(err, SongbookError::ElementNotFound(ref id) if id == "content"));
}
