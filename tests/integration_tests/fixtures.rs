//! Mock site setup shared by the end-to-end tests

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{DETAIL_ACCESS_FILE, DETAIL_EXTERNAL, DETAIL_NO_SOURCE, LISTING_SLUGS};

fn html(body: impl Into<String>) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(body.into())
        .insert_header("content-type", "text/html; charset=utf-8")
}

/// Serve a listing page at `route` with no page parameter
pub async fn mount_first_page(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .and(NoPageParam)
        .respond_with(html(body))
        .mount(server)
        .await;
}

/// Serve a listing page at `route?page={page}`
pub async fn mount_page(server: &MockServer, route: &str, page: u32, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .and(query_param("page", page.to_string()))
        .respond_with(html(body))
        .mount(server)
        .await;
}

/// Serve the three detail pages linked from the listing fixture
pub async fn mount_details(server: &MockServer) {
    let bodies = [DETAIL_EXTERNAL, DETAIL_ACCESS_FILE, DETAIL_NO_SOURCE];
    for (slug, body) in LISTING_SLUGS.iter().zip(bodies) {
        Mock::given(method("GET"))
            .and(path(format!("/publications/{slug}")))
            .respond_with(html(body))
            .mount(server)
            .await;
    }
}

/// Expect exactly `times` requests for `route?page={page}`
pub async fn expect_page_requests(server: &MockServer, route: &str, page: u32, times: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .and(query_param("page", page.to_string()))
        .respond_with(ResponseTemplate::new(404))
        .expect(times)
        .mount(server)
        .await;
}

/// Matches requests without a `page` query parameter
pub struct NoPageParam;

impl wiremock::Match for NoPageParam {
    fn matches(&self, request: &wiremock::Request) -> bool {
        !request.url.query_pairs().any(|(key, _)| key == "page")
    }
}
