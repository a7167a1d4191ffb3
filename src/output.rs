//! カタログの表示（テキスト / JSON）

use case_archive_common::{ArchiveStats, Case, CaseCatalog, Dimension, Facet};
use serde::Serialize;

use crate::error::Result;

/// 1件分の表示行
pub fn case_line(case: &Case) -> String {
    format!(
        "{} ({}) - {} [{} / {} / {}]",
        case.name, case.year, case.location, case.era, case.case_type, case.region
    )
}

/// アクティブフィルタの表示（なければNone）
pub fn active_filters_line(active: &[(Dimension, &str)]) -> Option<String> {
    if active.is_empty() {
        return None;
    }

    let badges: Vec<String> = active
        .iter()
        .map(|(dimension, value)| format!("{} {}", dimension.icon(), value))
        .collect();
    Some(format!("Active filters: {}", badges.join(", ")))
}

/// 表示対象の一覧
///
/// 未読み込みと一致なしは別のメッセージにする。
pub fn render_view(catalog: &CaseCatalog) -> String {
    let mut lines = Vec::new();

    if let Some(active) = active_filters_line(&catalog.active_filter_summary()) {
        lines.push(active);
    }
    let search = catalog.filters().search_term();
    if !search.is_empty() {
        lines.push(format!("Search: \"{}\"", search));
    }

    if !catalog.has_loaded() {
        lines.push("事件データが読み込まれていません".to_string());
        return lines.join("\n");
    }

    let visible = catalog.visible_cases();
    if visible.is_empty() {
        lines.push("一致する事件はありません".to_string());
    } else {
        lines.extend(visible.iter().map(|case| case_line(case)));
        lines.push(format!("{} / {} 件", visible.len(), catalog.len()));
    }

    lines.join("\n")
}

/// `list --json` の出力
#[derive(Debug, Serialize)]
pub struct ListView<'a> {
    pub filters: Vec<ActiveFilter<'a>>,
    pub search: &'a str,
    pub cases: Vec<&'a Case>,
}

#[derive(Debug, Serialize)]
pub struct ActiveFilter<'a> {
    pub dimension: Dimension,
    pub value: &'a str,
}

/// 表示対象とアクティブフィルタをまとめる
pub fn list_view(catalog: &CaseCatalog) -> ListView<'_> {
    ListView {
        filters: catalog
            .active_filter_summary()
            .into_iter()
            .map(|(dimension, value)| ActiveFilter { dimension, value })
            .collect(),
        search: catalog.filters().search_term(),
        cases: catalog.visible_cases(),
    }
}

pub fn render_facets(facets: &[Facet]) -> String {
    let mut lines = Vec::new();
    for facet in facets {
        lines.push(format!("{} {}:", facet.dimension.icon(), facet.dimension.label()));
        for entry in &facet.labels {
            lines.push(format!("  {} ({})", entry.label, entry.count));
        }
    }
    lines.join("\n")
}

pub fn render_stats(stats: &ArchiveStats) -> String {
    format!(
        "事件数: {}\n年代: {}\n種別: {}\n地域: {}",
        stats.total_cases, stats.eras, stats.types, stats.regions
    )
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
