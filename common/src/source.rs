//! 事件コレクションの取得元
//!
//! `CaseSource` はコレクション全体を1回で返す読み取り専用の取得元。
//! CLIはファイル/HTTP、Webは `fetch` で実装する。

use async_trait::async_trait;

use crate::error::LoadError;
use crate::types::Case;

/// 事件コレクションの取得元
///
/// WASMのFutureはSendではないため `?Send` で定義する。
#[async_trait(?Send)]
pub trait CaseSource {
    /// コレクション全体を取得する（ページングなし）
    async fn fetch_cases(&self) -> Result<Vec<Case>, LoadError>;

    /// ログ表示用の取得元名
    fn describe(&self) -> String;
}

/// `cases.json` の本文をパースして検証する
///
/// # Returns
/// * `Ok(Vec<Case>)` - ソース順のまま
/// * `Err(LoadError::Malformed)` - JSONとして不正、またはフィールド不足
/// * `Err(LoadError::InvalidCase)` - 名前が空のレコードがある
pub fn parse_cases(json: &str) -> Result<Vec<Case>, LoadError> {
    let cases: Vec<Case> = serde_json::from_str(json)?;
    validate_cases(&cases)?;
    Ok(cases)
}

/// 読み込んだコレクションの不変条件を確認する
pub fn validate_cases(cases: &[Case]) -> Result<(), LoadError> {
    for (index, case) in cases.iter().enumerate() {
        if case.name.is_empty() {
            return Err(LoadError::InvalidCase {
                index,
                reason: "name is empty".to_string(),
            });
        }
    }
    Ok(())
}

/// メモリ上のJSON本文を返す取得元（標準入力や埋め込みデータ用）
#[derive(Debug, Clone)]
pub struct StaticSource {
    label: String,
    payload: String,
}

impl StaticSource {
    pub fn new(label: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            payload: payload.into(),
        }
    }
}

#[async_trait(?Send)]
impl CaseSource for StaticSource {
    async fn fetch_cases(&self) -> Result<Vec<Case>, LoadError> {
        parse_cases(&self.payload)
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}
