// SPDX-License-Identifier: MPL-2.0
//! HTTP catalog tests against a local mock server.

use mockito::{Matcher, Server};
use video_dashboard::application::port::VideoCatalog;
use video_dashboard::domain::error::FetchError;
use video_dashboard::domain::video::{PageNumber, SortOrder, VideoQuery};
use video_dashboard::infrastructure::{HttpCatalog, MAX_THUMBNAIL_BYTES};

fn items(count: usize) -> String {
    let items: Vec<String> = (0..count)
        .map(|i| format!(r#"{{"id":"v{i}","title":"Video {i}"}}"#))
        .collect();
    format!("[{}]", items.join(","))
}

fn catalog(server: &Server) -> HttpCatalog {
    HttpCatalog::new(&server.url(), None).expect("client should build")
}

#[tokio::test]
async fn sends_all_query_parameters() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/videos")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "3".into()),
            Matcher::UrlEncoded("page_size".into(), "10".into()),
            Matcher::UrlEncoded("search".into(), "cricket world cup".into()),
            Matcher::UrlEncoded("sort".into(), "desc".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"videos":[],"total":0}"#)
        .create_async()
        .await;

    let query = VideoQuery {
        page: PageNumber::new(3),
        search: "cricket world cup".into(),
        sort: SortOrder::Desc,
    };
    let page = catalog(&server).fetch_page(query).await.unwrap();

    mock.assert_async().await;
    assert!(page.is_empty());
}

#[tokio::test]
async fn empty_search_is_still_sent() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/videos")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "1".into()),
            Matcher::UrlEncoded("search".into(), "".into()),
            Matcher::UrlEncoded("sort".into(), "asc".into()),
        ]))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    catalog(&server)
        .fetch_page(VideoQuery::default())
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn wrapped_response_uses_total_field() {
    let mut server = Server::new_async().await;
    let body = format!(r#"{{"videos":{},"total":42}}"#, items(5));
    let _mock = server
        .mock("GET", "/videos")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await;

    let page = catalog(&server)
        .fetch_page(VideoQuery::default())
        .await
        .unwrap();

    assert_eq!(page.videos.len(), 5);
    assert_eq!(page.total, 42);
    assert_eq!(page.total_pages(), 5);
    assert_eq!(page.videos[0].id.as_deref(), Some("v0"));
}

#[tokio::test]
async fn bare_array_uses_its_length() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/videos")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(items(3))
        .create_async()
        .await;

    let page = catalog(&server)
        .fetch_page(VideoQuery::default())
        .await
        .unwrap();

    assert_eq!(page.videos.len(), 3);
    assert_eq!(page.total, 3);
    assert_eq!(page.total_pages(), 1);
}

#[tokio::test]
async fn unrecognized_shape_is_empty_without_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/videos")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let page = catalog(&server)
        .fetch_page(VideoQuery::default())
        .await
        .unwrap();

    assert!(page.videos.is_empty());
    assert_eq!(page.total, 0);
}

#[tokio::test]
async fn server_error_reports_status_and_reason() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/videos")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let err = catalog(&server)
        .fetch_page(VideoQuery::default())
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Http { status: 500, .. }));
    assert_eq!(err.to_string(), "Error: 500 Internal Server Error");
}

#[tokio::test]
async fn invalid_json_is_a_parse_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/videos")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>not json</html>")
        .create_async()
        .await;

    let err = catalog(&server)
        .fetch_page(VideoQuery::default())
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Parse(_)));
    assert!(!err.to_string().is_empty());
}

#[tokio::test]
async fn nested_snippet_records_are_extracted() {
    let mut server = Server::new_async().await;
    let body = r#"[{
        "snippet": {
            "title": "Nested",
            "description": "From snippet",
            "publishedAt": "2024-02-01T10:00:00Z",
            "resourceId": { "videoId": "abc123" }
        }
    }]"#;
    let _mock = server
        .mock("GET", "/videos")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(body)
        .create_async()
        .await;

    let page = catalog(&server)
        .fetch_page(VideoQuery::default())
        .await
        .unwrap();

    let record = &page.videos[0];
    assert_eq!(record.id.as_deref(), Some("abc123"));
    assert_eq!(record.title.as_deref(), Some("Nested"));
    assert_eq!(
        record.watch_url().as_deref(),
        Some("https://www.youtube.com/watch?v=abc123")
    );
}

#[tokio::test]
async fn thumbnail_bytes_are_downloaded() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/thumb.jpg")
        .with_status(200)
        .with_header("content-type", "image/jpeg")
        .with_body(vec![0xFF, 0xD8, 0xFF, 0xE0])
        .create_async()
        .await;

    let url = format!("{}/thumb.jpg", server.url());
    let bytes = catalog(&server).fetch_thumbnail(url).await.unwrap();
    assert_eq!(bytes, vec![0xFF, 0xD8, 0xFF, 0xE0]);
}

#[tokio::test]
async fn oversized_thumbnail_is_rejected() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/huge.jpg")
        .with_status(200)
        .with_body(vec![0u8; MAX_THUMBNAIL_BYTES + 1])
        .create_async()
        .await;

    let url = format!("{}/huge.jpg", server.url());
    let err = catalog(&server).fetch_thumbnail(url).await.unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)));
}

#[tokio::test]
async fn missing_thumbnail_is_an_http_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/gone.jpg")
        .with_status(404)
        .create_async()
        .await;

    let url = format!("{}/gone.jpg", server.url());
    let err = catalog(&server).fetch_thumbnail(url).await.unwrap_err();
    assert_eq!(err.to_string(), "Error: 404 Not Found");
}
