//! フィルタ状態と一致判定
//!
//! 3つの分類ディメンション（年代・種別・地域）とフリーテキスト検索。
//! ラベルはデータ由来の任意文字列で、列挙型には閉じない。

use crate::error::{Error, Result};
use crate::types::Case;
use serde::Serialize;

/// 「制約なし」を表すフィルタ値
pub const ALL: &str = "all";

/// フィルタのディメンション
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Era,
    Type,
    Region,
}

impl Dimension {
    /// 表示順（era → type → region）
    pub const ORDER: [Dimension; 3] = [Dimension::Era, Dimension::Type, Dimension::Region];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Era => "era",
            Dimension::Type => "type",
            Dimension::Region => "region",
        }
    }

    /// 表示用ラベル
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Era => "Era",
            Dimension::Type => "Type",
            Dimension::Region => "Region",
        }
    }

    /// アクティブフィルタのバッジに付けるアイコン
    pub fn icon(&self) -> &'static str {
        match self {
            Dimension::Era => "📅",
            Dimension::Type => "🎭",
            Dimension::Region => "🌍",
        }
    }

    /// Caseの対応フィールド
    pub fn field<'a>(&self, case: &'a Case) -> &'a str {
        match self {
            Dimension::Era => &case.era,
            Dimension::Type => &case.case_type,
            Dimension::Region => &case.region,
        }
    }
}

impl std::str::FromStr for Dimension {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "era" => Ok(Dimension::Era),
            "type" => Ok(Dimension::Type),
            "region" => Ok(Dimension::Region),
            _ => Err(Error::UnknownDimension(s.to_string())),
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 1ディメンション分のフィルタ値
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterValue {
    /// 制約なし
    #[default]
    All,
    /// ラベル完全一致（大文字小文字を区別）
    Only(String),
}

impl FilterValue {
    pub fn is_all(&self) -> bool {
        matches!(self, FilterValue::All)
    }

    pub fn as_str(&self) -> &str {
        match self {
            FilterValue::All => ALL,
            FilterValue::Only(value) => value,
        }
    }

    pub fn matches(&self, field: &str) -> bool {
        match self {
            FilterValue::All => true,
            FilterValue::Only(value) => value == field,
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        if value == ALL {
            FilterValue::All
        } else {
            FilterValue::Only(value.to_string())
        }
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        if value == ALL {
            FilterValue::All
        } else {
            FilterValue::Only(value)
        }
    }
}

/// 検索語の一致判定
///
/// 名前・場所は大文字小文字を無視して部分一致、年は生の文字列で部分一致。
/// 空の検索語はすべてに一致する。
pub fn matches_search(case: &Case, term: &str) -> bool {
    let folded = term.to_lowercase();
    case.name.to_lowercase().contains(&folded)
        || case.location.to_lowercase().contains(&folded)
        || case.year.contains(term)
}

/// フィルタ状態（3ディメンション + 検索語）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    era: FilterValue,
    case_type: FilterValue,
    region: FilterValue,
    search_term: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, dimension: Dimension) -> &FilterValue {
        match dimension {
            Dimension::Era => &self.era,
            Dimension::Type => &self.case_type,
            Dimension::Region => &self.region,
        }
    }

    pub fn set(&mut self, dimension: Dimension, value: impl Into<FilterValue>) {
        let slot = match dimension {
            Dimension::Era => &mut self.era,
            Dimension::Type => &mut self.case_type,
            Dimension::Region => &mut self.region,
        };
        *slot = value.into();
    }

    pub fn clear(&mut self, dimension: Dimension) {
        self.set(dimension, FilterValue::All);
    }

    /// 3ディメンションを "all" に戻す。検索語はそのまま
    pub fn clear_all(&mut self) {
        for dimension in Dimension::ORDER {
            self.clear(dimension);
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// 検索語はそのまま保持し、一致判定時にだけ小文字化する
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// "all" 以外のディメンションを era, type, region の順で返す
    pub fn active(&self) -> Vec<(Dimension, &str)> {
        Dimension::ORDER
            .iter()
            .filter_map(|&dimension| match self.get(dimension) {
                FilterValue::All => None,
                FilterValue::Only(value) => Some((dimension, value.as_str())),
            })
            .collect()
    }

    pub fn has_active_filters(&self) -> bool {
        Dimension::ORDER
            .iter()
            .any(|&dimension| !self.get(dimension).is_all())
    }

    /// 検索 AND 年代 AND 種別 AND 地域
    pub fn matches(&self, case: &Case) -> bool {
        matches_search(case, &self.search_term)
            && Dimension::ORDER
                .iter()
                .all(|&dimension| self.get(dimension).matches(dimension.field(case)))
    }
}
