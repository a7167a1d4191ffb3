//! 事件カタログ
//!
//! コレクションとフィルタ状態を所有し、表示対象を都度計算する。
//! 表示対象のキャッシュは持たない（変更のたびに `visible_cases` で再計算）。
//!
//! 読み込みは「最後の要求が勝つ」:
//! `begin_load` で発行したチケットが最新でない応答は破棄される。

use tracing::{debug, warn};

use crate::error::LoadError;
use crate::facets::{self, ArchiveStats, Facet};
use crate::filter::{Dimension, FilterState, FilterValue};
use crate::source::CaseSource;
use crate::types::Case;

/// 読み込み要求の識別子（単調増加）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

/// 読み込み応答の扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// コレクションを置き換えた
    Applied { count: usize },
    /// より新しい要求が発行済みのため破棄した
    Stale,
}

/// 事件カタログ
#[derive(Debug, Clone, Default)]
pub struct CaseCatalog {
    cases: Vec<Case>,
    filters: FilterState,
    has_loaded: bool,
    latest_ticket: u64,
}

impl CaseCatalog {
    /// 空のカタログ（未読み込み、フィルタはすべて "all"）
    pub fn new() -> Self {
        Self::default()
    }

    /// 読み込み済みコレクションから作る
    pub fn with_cases(cases: Vec<Case>) -> Self {
        Self {
            cases,
            has_loaded: true,
            ..Default::default()
        }
    }

    // =============================================
    // 読み込み
    // =============================================

    /// 取得元からコレクション全体を読み込む
    ///
    /// 失敗時はコレクションを変更せずに `LoadError` を返す。再試行はしない。
    pub async fn load<S>(&mut self, source: &S) -> Result<LoadOutcome, LoadError>
    where
        S: CaseSource + ?Sized,
    {
        let ticket = self.begin_load();
        debug!(source = %source.describe(), "loading cases");
        let result = source.fetch_cases().await;
        self.finish_load(ticket, result)
    }

    /// 読み込み要求を発行する
    ///
    /// 非同期の取得をカタログの外で行う場合（UIのシグナル経由など）に使う。
    pub fn begin_load(&mut self) -> LoadTicket {
        self.latest_ticket += 1;
        LoadTicket(self.latest_ticket)
    }

    /// 取得結果を反映する
    ///
    /// 最新でないチケットの応答は成功・失敗にかかわらず破棄する。
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Case>, LoadError>,
    ) -> Result<LoadOutcome, LoadError> {
        if ticket.0 != self.latest_ticket {
            warn!(
                ticket = ticket.0,
                latest = self.latest_ticket,
                "discarding stale case load"
            );
            return Ok(LoadOutcome::Stale);
        }

        let cases = result?;
        let count = cases.len();
        self.cases = cases;
        self.has_loaded = true;
        debug!(count, "case collection replaced");
        Ok(LoadOutcome::Applied { count })
    }

    /// 1回以上読み込みに成功したか
    ///
    /// 空の表示結果が「未読み込み」か「一致なし」かはこれで区別する。
    pub fn has_loaded(&self) -> bool {
        self.has_loaded
    }

    // =============================================
    // フィルタ操作
    // =============================================

    pub fn set_filter(&mut self, dimension: Dimension, value: impl Into<FilterValue>) {
        self.filters.set(dimension, value);
    }

    pub fn clear_filter(&mut self, dimension: Dimension) {
        self.filters.clear(dimension);
    }

    /// 3ディメンションを "all" に戻す（検索語は残す）
    pub fn clear_all(&mut self) {
        self.filters.clear_all();
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.filters.set_search(term);
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    // =============================================
    // 表示
    // =============================================

    /// すべての条件に一致する事件（ソース順）
    pub fn visible_cases(&self) -> Vec<&Case> {
        self.cases
            .iter()
            .filter(|case| self.filters.matches(case))
            .collect()
    }

    /// "all" 以外のフィルタ（era, type, region の順）
    pub fn active_filter_summary(&self) -> Vec<(Dimension, &str)> {
        self.filters.active()
    }

    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// フィルタボタン用のラベル一覧
    pub fn facet(&self, dimension: Dimension) -> Facet {
        facets::facet(&self.cases, dimension)
    }

    /// 先頭から `count` 件（注目事件）
    pub fn featured(&self, count: usize) -> &[Case] {
        facets::featured(&self.cases, count)
    }

    pub fn stats(&self) -> ArchiveStats {
        facets::stats(&self.cases)
    }
}
