//! End-to-end crawl tests against a wiremock server

mod error_scenarios;
mod fixtures;
mod pipeline_test;
