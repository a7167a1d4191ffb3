use case_archive_common::LoadError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("事件データの読み込みに失敗: {0}")]
    Load(#[from] LoadError),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTPクライアントエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("入力エラー: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("事件データが空です: {0}")]
    NoCases(String),
}

pub type Result<T> = std::result::Result<T, ArchiveError>;
