//! CLI用の取得元（ファイル / HTTP / 標準入力）

use async_trait::async_trait;
use case_archive_common::{parse_cases, Case, CaseCatalog, CaseSource, LoadError, LoadOutcome, StaticSource};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{ArchiveError, Result};

/// ローカルの `cases.json`
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait(?Send)]
impl CaseSource for FileSource {
    async fn fetch_cases(&self) -> std::result::Result<Vec<Case>, LoadError> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        parse_cases(&content)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// http(s) で配信される `cases.json`
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout_seconds: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }
}

#[async_trait(?Send)]
impl CaseSource for HttpSource {
    async fn fetch_cases(&self) -> std::result::Result<Vec<Case>, LoadError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| LoadError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status(status.as_u16()));
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

pub fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// 取得元の指定文字列から `CaseSource` を作る
///
/// * `-` - 標準入力
/// * `http://` / `https://` - HTTP
/// * それ以外 - ファイルパス
pub fn open_source(source: &str, timeout_seconds: u64) -> Result<Box<dyn CaseSource>> {
    if source == "-" {
        let mut payload = String::new();
        std::io::stdin().read_to_string(&mut payload)?;
        return Ok(Box::new(StaticSource::new("stdin", payload)));
    }

    if is_remote(source) {
        return Ok(Box::new(HttpSource::new(source, timeout_seconds)?));
    }

    let path = PathBuf::from(source);
    if !path.exists() {
        return Err(ArchiveError::FileNotFound(path.display().to_string()));
    }
    Ok(Box::new(FileSource::new(path)))
}

/// スピナーを出しながらカタログを読み込む
pub async fn load_catalog(source: &dyn CaseSource) -> Result<CaseCatalog> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("事件データを読み込み中... ({})", source.describe()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let mut catalog = CaseCatalog::new();
    let result = catalog.load(source).await;
    spinner.finish_and_clear();

    match result? {
        LoadOutcome::Applied { count } => info!(count, source = %source.describe(), "cases loaded"),
        LoadOutcome::Stale => debug!("stale load ignored"),
    }
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_remote() {
        assert!(is_remote("https://fatalpast.example/cases.json"));
        assert!(is_remote("http://localhost:8080/cases.json"));
        assert!(!is_remote("cases.json"));
        assert!(!is_remote("./data/https.json"));
    }

    #[test]
    fn test_open_source_missing_file() {
        let result = open_source("/nonexistent/path/cases.json", 5);
        assert!(matches!(result, Err(ArchiveError::FileNotFound(_))));
    }

    #[test]
    fn test_open_source_http() {
        let source = open_source("https://fatalpast.example/cases.json", 5).unwrap();
        assert_eq!(source.describe(), "https://fatalpast.example/cases.json");
    }
}
