//! 対話的なフィルタ操作
//!
//! Webのフィルタボタン・検索欄と同じ操作をプロンプトで行う。

use case_archive_common::{CaseCatalog, Dimension, ALL};
use dialoguer::{Input, Select};
use tracing::debug;

use crate::error::{ArchiveError, Result};
use crate::output;

/// 1回分の操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseAction {
    SetFilter(Dimension, String),
    ClearFilter(Dimension),
    ClearAll,
    Search(String),
    Quit,
}

/// 操作をカタログに反映する（Quitならfalse）
pub fn apply_action(catalog: &mut CaseCatalog, action: BrowseAction) -> bool {
    debug!(?action, "browse action");
    match action {
        BrowseAction::SetFilter(dimension, value) => catalog.set_filter(dimension, value),
        BrowseAction::ClearFilter(dimension) => catalog.clear_filter(dimension),
        BrowseAction::ClearAll => catalog.clear_all(),
        BrowseAction::Search(term) => catalog.set_search(term),
        BrowseAction::Quit => return false,
    }
    true
}

/// フィルタ選択肢（先頭は "all"、以降はデータの初出順）
pub fn filter_choices(catalog: &CaseCatalog, dimension: Dimension) -> Vec<String> {
    std::iter::once(ALL.to_string())
        .chain(catalog.facet(dimension).labels().map(str::to_string))
        .collect()
}

fn prompt_dimension(prompt: &str) -> Result<Dimension> {
    let items: Vec<String> = Dimension::ORDER
        .iter()
        .map(|d| format!("{} {}", d.icon(), d.label()))
        .collect();
    let index = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact()?;
    Ok(Dimension::ORDER[index])
}

fn prompt_action(catalog: &CaseCatalog) -> Result<BrowseAction> {
    let items = [
        "フィルタを設定",
        "フィルタを解除",
        "すべてのフィルタを解除",
        "検索",
        "終了",
    ];
    let choice = Select::new()
        .with_prompt("操作を選択")
        .items(&items)
        .default(0)
        .interact()?;

    let action = match choice {
        0 => {
            let dimension = prompt_dimension("ディメンション")?;
            let choices = filter_choices(catalog, dimension);
            let current = catalog.filters().get(dimension).as_str().to_string();
            let index = Select::new()
                .with_prompt(format!("{} {}", dimension.icon(), dimension.label()))
                .items(&choices)
                .default(choices.iter().position(|c| *c == current).unwrap_or(0))
                .interact()?;
            BrowseAction::SetFilter(dimension, choices[index].clone())
        }
        1 => BrowseAction::ClearFilter(prompt_dimension("解除するディメンション")?),
        2 => BrowseAction::ClearAll,
        3 => {
            let term: String = Input::new()
                .with_prompt("検索語（名前・場所・年）")
                .with_initial_text(catalog.filters().search_term())
                .allow_empty(true)
                .interact_text()?;
            BrowseAction::Search(term)
        }
        _ => BrowseAction::Quit,
    };
    Ok(action)
}

/// 対話ループ
pub fn run_browse(catalog: &mut CaseCatalog) -> Result<()> {
    if catalog.is_empty() {
        return Err(ArchiveError::NoCases("閲覧できる事件がありません".into()));
    }

    println!("{}\n", output::render_view(catalog));
    loop {
        let action = prompt_action(catalog)?;
        if !apply_action(catalog, action) {
            break;
        }
        println!("\n{}\n", output::render_view(catalog));
    }
    Ok(())
}
