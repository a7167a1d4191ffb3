use crate::error::{ArchiveError, Result};
use case_archive_common::DEFAULT_FEATURED_COUNT;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 取得元を上書きする環境変数
pub const SOURCE_ENV: &str = "CASE_ARCHIVE_SOURCE";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `cases.json` のパスまたは http(s) URL
    pub source: String,
    pub featured_count: usize,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: "cases.json".into(),
            featured_count: DEFAULT_FEATURED_COUNT,
            timeout_seconds: 30,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ArchiveError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("case-archive").join("config.json"))
    }

    /// 取得元を決める（コマンドライン > 環境変数 > 設定ファイル）
    pub fn resolve_source(&self, flag: Option<&str>) -> String {
        if let Some(source) = flag {
            return source.to_string();
        }

        match std::env::var(SOURCE_ENV) {
            Ok(source) if !source.trim().is_empty() => source,
            _ => self.source.clone(),
        }
    }

    pub fn set_source(&mut self, source: String) -> Result<()> {
        if source.trim().is_empty() {
            return Err(ArchiveError::Config("取得元が空です".into()));
        }
        self.source = source;
        self.save()
    }
}
