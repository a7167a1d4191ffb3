//! tracing-subscriber の初期化
//!
//! ログは標準エラーへ出す（標準出力は一覧やJSONの出力に使う）。
//! `RUST_LOG` が設定されていればそれを優先する。

use crate::error::{ArchiveError, Result};
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` 未設定時のフィルタ
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "case_archive=debug,case_archive_common=debug"
    } else {
        "warn"
    }
}

pub fn init_logging(verbose: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| ArchiveError::Config(format!("ログ初期化に失敗: {}", e)))
}
