//! エラー型定義

use thiserror::Error;

/// 事件コレクションの読み込み失敗
///
/// カタログの操作で失敗しうるのは読み込みだけ。
/// 失敗してもカタログは直前のコレクションのまま使い続けられる。
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("fetch failed: {0}")]
    Fetch(String),

    #[error("unexpected HTTP status: {0}")]
    Status(u16),

    #[error("malformed case collection: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("invalid case at index {index}: {reason}")]
    InvalidCase { index: usize, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("Unknown filter dimension: {0}")]
    UnknownDimension(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_display_fetch() {
        let error = LoadError::Fetch("connection refused".to_string());
        assert_eq!(format!("{}", error), "fetch failed: connection refused");
    }

    #[test]
    fn test_load_error_display_status() {
        let error = LoadError::Status(404);
        assert_eq!(format!("{}", error), "unexpected HTTP status: 404");
    }

    #[test]
    fn test_load_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("[").unwrap_err();
        let error: LoadError = json_error.into();
        assert!(matches!(error, LoadError::Malformed(_)));
        assert!(format!("{}", error).contains("malformed case collection"));
    }

    #[test]
    fn test_load_error_display_invalid_case() {
        let error = LoadError::InvalidCase {
            index: 3,
            reason: "name is empty".to_string(),
        };
        assert_eq!(format!("{}", error), "invalid case at index 3: name is empty");
    }

    #[test]
    fn test_error_from_load_error() {
        let error: Error = LoadError::Status(500).into();
        assert!(matches!(error, Error::Load(LoadError::Status(500))));
        assert!(format!("{}", error).contains("Load error"));
    }

    #[test]
    fn test_error_display_unknown_dimension() {
        let error = Error::UnknownDimension("decade".to_string());
        assert_eq!(format!("{}", error), "Unknown filter dimension: decade");
    }
}
