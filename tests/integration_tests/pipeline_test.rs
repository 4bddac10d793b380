//! Full crawl tests

use tempfile::TempDir;
use tethys::config::Taxonomy;
use tethys::crawler::Crawler;
use wiremock::MockServer;

use super::fixtures::{expect_page_requests, mount_details, mount_first_page, mount_page};
use crate::common::{read_output, test_config, EMPTY_LISTING, LISTING_PAGE};

#[tokio::test]
async fn test_single_page_subtag_end_to_end() {
    let server = MockServer::start().await;
    mount_first_page(&server, "/stressor/chemicals", LISTING_PAGE).await;
    mount_page(&server, "/stressor/chemicals", 1, EMPTY_LISTING).await;
    mount_details(&server).await;
    expect_page_requests(&server, "/stressor/chemicals", 2, 0).await;

    let dir = TempDir::new().unwrap();
    let config = test_config(
        &server.uri(),
        dir.path(),
        Taxonomy::from_pairs(&[("stressor", &["chemicals"])]),
    );

    let summary = Crawler::new(config).unwrap().run().await.unwrap();

    let subtag = read_output(&dir.path().join("stressor-chemicals.csv"));
    let tag = read_output(&dir.path().join("stressor.csv"));
    assert_eq!(subtag.len(), 3);
    assert_eq!(tag.len(), 3);
    assert_eq!(summary.pages, 1);
    assert_eq!(summary.records, 3);
}

#[tokio::test]
async fn test_records_carry_source_links_by_priority() {
    let server = MockServer::start().await;
    mount_first_page(&server, "/stressor/emf", LISTING_PAGE).await;
    mount_details(&server).await;

    let dir = TempDir::new().unwrap();
    let config = test_config(
        &server.uri(),
        dir.path(),
        Taxonomy::from_pairs(&[("stressor", &["emf"])]),
    );

    Crawler::new(config).unwrap().run().await.unwrap();

    let records = read_output(&dir.path().join("stressor-emf.csv"));
    let base = server.uri();

    assert_eq!(records[0].title, "Effects of EMF from Subsea Cables on Fish");
    assert_eq!(records[0].authors, "Gill, A.; Desender, M.");
    assert_eq!(records[0].paper_url, "https://doi.org/10.1000/emf-fish");

    assert_eq!(records[1].technology_type, "Wave, Tidal");
    assert_eq!(
        records[1].paper_url,
        format!("{base}/sites/default/files/publications/kirschvink-1997.pdf")
    );

    assert_eq!(records[2].receptor, "Invertebrates");
    assert_eq!(
        records[2].paper_url,
        format!("{base}/publications/emf-lobster-behavior")
    );
}

#[tokio::test]
async fn test_tag_file_follows_subtag_order() {
    let server = MockServer::start().await;
    mount_first_page(&server, "/interactions/attraction", LISTING_PAGE).await;
    mount_first_page(&server, "/interactions/avoidance", LISTING_PAGE).await;
    mount_page(&server, "/interactions/avoidance", 1, LISTING_PAGE).await;
    mount_details(&server).await;

    let dir = TempDir::new().unwrap();
    let config = test_config(
        &server.uri(),
        dir.path(),
        Taxonomy::from_pairs(&[("interactions", &["attraction", "avoidance"])]),
    );

    let summary = Crawler::new(config).unwrap().run().await.unwrap();

    let attraction = read_output(&dir.path().join("interactions-attraction.csv"));
    let avoidance = read_output(&dir.path().join("interactions-avoidance.csv"));
    let tag = read_output(&dir.path().join("interactions.csv"));

    assert_eq!(attraction.len(), 3);
    assert_eq!(avoidance.len(), 6);
    assert_eq!(tag.len(), 9);
    assert_eq!(&tag[..3], &attraction[..]);
    assert_eq!(&tag[3..], &avoidance[..]);
    assert_eq!(summary.pages, 3);
    assert_eq!(summary.files_written, 3);
}

#[tokio::test]
async fn test_output_header_and_delimiter() {
    let server = MockServer::start().await;
    mount_first_page(&server, "/stressor/noise", LISTING_PAGE).await;
    mount_details(&server).await;

    let dir = TempDir::new().unwrap();
    let config = test_config(
        &server.uri(),
        dir.path(),
        Taxonomy::from_pairs(&[("stressor", &["noise"])]),
    );

    Crawler::new(config).unwrap().run().await.unwrap();

    let content = std::fs::read_to_string(dir.path().join("stressor-noise.csv")).unwrap();
    let header = content.lines().next().unwrap();
    assert_eq!(
        header.split('\t').collect::<Vec<_>>(),
        vec![
            "title",
            "authors",
            "date",
            "content_type",
            "technology_type",
            "stressor",
            "receptor",
            "paper_url"
        ]
    );
    assert!(content.lines().skip(1).all(|line| line.split('\t').count() == 8));
}
