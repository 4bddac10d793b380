//! Error handling scenarios for full crawls

use tempfile::TempDir;
use tethys::config::Taxonomy;
use tethys::crawler::Crawler;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::fixtures::{mount_details, mount_first_page, NoPageParam};
use crate::common::{read_output, test_config, LISTING_PAGE};

#[tokio::test]
async fn test_missing_first_page_writes_header_only() {
    let server = MockServer::start().await;
    // Nothing mounted for /stressor/lighting: wiremock answers 404

    let dir = TempDir::new().unwrap();
    let config = test_config(
        &server.uri(),
        dir.path(),
        Taxonomy::from_pairs(&[("stressor", &["lighting"])]),
    );

    let summary = Crawler::new(config).unwrap().run().await.unwrap();

    let path = dir.path().join("stressor-lighting.csv");
    assert!(path.exists());
    assert!(read_output(&path).is_empty());
    assert!(read_output(&dir.path().join("stressor.csv")).is_empty());
    assert_eq!(summary.pages, 0);
}

#[tokio::test]
async fn test_missing_subtag_does_not_affect_siblings() {
    let server = MockServer::start().await;
    mount_first_page(&server, "/receptor/fish", LISTING_PAGE).await;
    mount_details(&server).await;

    let dir = TempDir::new().unwrap();
    let config = test_config(
        &server.uri(),
        dir.path(),
        Taxonomy::from_pairs(&[("receptor", &["bats", "fish"])]),
    );

    Crawler::new(config).unwrap().run().await.unwrap();

    assert!(read_output(&dir.path().join("receptor-bats.csv")).is_empty());
    assert_eq!(read_output(&dir.path().join("receptor-fish.csv")).len(), 3);
    assert_eq!(read_output(&dir.path().join("receptor.csv")).len(), 3);
}

#[tokio::test]
async fn test_wrong_table_shape_is_not_merged() {
    let server = MockServer::start().await;
    let narrow = r#"<html><body><table>
        <thead><tr><th>Title</th><th>Date</th></tr></thead>
        <tbody><tr><td><a href="/publications/x">X</a></td><td>2018</td></tr></tbody>
        </table></body></html>"#;
    mount_first_page(&server, "/stressor/emf", narrow).await;
    Mock::given(method("GET"))
        .and(path("/publications/x"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let config = test_config(
        &server.uri(),
        dir.path(),
        Taxonomy::from_pairs(&[("stressor", &["emf"])]),
    );

    let summary = Crawler::new(config).unwrap().run().await.unwrap();

    assert!(read_output(&dir.path().join("stressor-emf.csv")).is_empty());
    assert_eq!(summary.records, 0);
}

#[tokio::test]
async fn test_detail_page_failure_stops_subtag() {
    let server = MockServer::start().await;
    mount_first_page(&server, "/stressor/emf", LISTING_PAGE).await;
    Mock::given(method("GET"))
        .and(path("/publications/effects-emf-subsea-cables-fish"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let config = test_config(
        &server.uri(),
        dir.path(),
        Taxonomy::from_pairs(&[("stressor", &["emf"])]),
    );

    let summary = Crawler::new(config).unwrap().run().await.unwrap();

    assert!(read_output(&dir.path().join("stressor-emf.csv")).is_empty());
    assert_eq!(summary.pages, 0);
}

#[tokio::test]
async fn test_server_error_on_listing_stops_subtag() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stressor/emf"))
        .and(NoPageParam)
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let config = test_config(
        &server.uri(),
        dir.path(),
        Taxonomy::from_pairs(&[("stressor", &["emf"])]),
    );

    let summary = Crawler::new(config).unwrap().run().await.unwrap();
    assert_eq!(summary.subtags, 1);
    assert_eq!(summary.records, 0);
}

#[tokio::test]
async fn test_unwritable_output_is_an_error() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "file in the way").unwrap();

    let config = test_config(
        &server.uri(),
        &blocker,
        Taxonomy::from_pairs(&[("stressor", &["emf"])]),
    );

    assert!(Crawler::new(config).is_err());
}
