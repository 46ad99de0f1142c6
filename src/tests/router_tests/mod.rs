mod dashboard_tests;
mod hunt_tests;

use crate::config::HuntConfig;
use crate::pipeline::{HuntHandle, HuntSummary, PipelineError};
use crate::router::AppState;
use astra::{Body, Response};
use std::io::Read;

pub fn state_with_job<F>(config: HuntConfig, job: F) -> AppState
where
    F: Fn(&HuntConfig) -> Result<HuntSummary, PipelineError> + Send + Sync + 'static,
{
    AppState {
        config,
        hunt: HuntHandle::new(job),
    }
}

pub fn get(uri: &str) -> astra::Request {
    http::Request::builder()
        .method(http::Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post(uri: &str) -> astra::Request {
    http::Request::builder()
        .method(http::Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn body_string(mut resp: Response) -> String {
    let mut body = String::new();
    resp.body_mut().reader().read_to_string(&mut body).unwrap();
    body
}
