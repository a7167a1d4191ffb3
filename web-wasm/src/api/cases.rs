//! `cases.json` の取得（同一オリジンのfetch）

use async_trait::async_trait;
use case_archive_common::{parse_cases, Case, CaseSource, LoadError};
use gloo::net::http::Request;

/// 事件データのURL（ページと同じオリジン）
pub const CASES_URL: &str = "cases.json";

pub struct FetchSource {
    url: String,
}

impl FetchSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait(?Send)]
impl CaseSource for FetchSource {
    async fn fetch_cases(&self) -> Result<Vec<Case>, LoadError> {
        let response = Request::get(&self.url)
            .send()
            .await
            .map_err(|e| LoadError::Fetch(e.to_string()))?;

        if !response.ok() {
            return Err(LoadError::Status(response.status()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| LoadError::Fetch(e.to_string()))?;
        parse_cases(&body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
