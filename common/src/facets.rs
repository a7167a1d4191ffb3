//! ファセット・注目事件・統計
//!
//! フィルタボタンのラベル一覧はデータから作る（初出順）。

use serde::Serialize;

use crate::filter::Dimension;
use crate::types::Case;

/// トップページに並べる注目事件の件数
pub const DEFAULT_FEATURED_COUNT: usize = 6;

/// 1ラベル分の件数
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetCount {
    pub label: String,
    pub count: usize,
}

/// 1ディメンション分のラベル一覧
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Facet {
    pub dimension: Dimension,
    pub labels: Vec<FacetCount>,
}

impl Facet {
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(|l| l.label.as_str())
    }
}

/// アーカイブ全体の統計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveStats {
    pub total_cases: usize,
    pub eras: usize,
    pub types: usize,
    pub regions: usize,
}

/// ディメンションごとのラベルと件数（初出順）
pub fn facet(cases: &[Case], dimension: Dimension) -> Facet {
    let mut labels: Vec<FacetCount> = Vec::new();

    for case in cases {
        let label = dimension.field(case);
        match labels.iter_mut().find(|l| l.label == label) {
            Some(entry) => entry.count += 1,
            None => labels.push(FacetCount {
                label: label.to_string(),
                count: 1,
            }),
        }
    }

    Facet { dimension, labels }
}

/// 先頭から `count` 件
pub fn featured(cases: &[Case], count: usize) -> &[Case] {
    &cases[..count.min(cases.len())]
}

pub fn stats(cases: &[Case]) -> ArchiveStats {
    ArchiveStats {
        total_cases: cases.len(),
        eras: facet(cases, Dimension::Era).labels.len(),
        types: facet(cases, Dimension::Type).labels.len(),
        regions: facet(cases, Dimension::Region).labels.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Vec<Case> {
        vec![
            Case::new("Zodiac", "1968", "San Francisco", "1960s", "Unsolved", "West"),
            Case::new("Black Dahlia", "1947", "Los Angeles", "1940s", "Unsolved", "West"),
            Case::new("Jack the Ripper", "1888", "London", "1880s", "Serial", "Europe"),
            Case::new("Lizzie Borden", "1892", "Fall River", "1890s", "Solved", "East"),
        ]
    }

    #[test]
    fn test_facet_first_seen_order_with_counts() {
        let facet = facet(&fixture(), Dimension::Type);

        assert_eq!(facet.dimension, Dimension::Type);
        assert_eq!(facet.labels().collect::<Vec<_>>(), vec!["Unsolved", "Serial", "Solved"]);
        assert_eq!(facet.labels[0].count, 2);
        assert_eq!(facet.labels[1].count, 1);
    }

    #[test]
    fn test_facet_labels_are_case_sensitive() {
        let cases = vec![
            Case::new("A", "1900", "X", "1900s", "Unsolved", "West"),
            Case::new("B", "1901", "Y", "1900s", "Unsolved", "west"),
        ];
        let facet = facet(&cases, Dimension::Region);
        assert_eq!(facet.labels.len(), 2);
    }

    #[test]
    fn test_facet_empty_collection() {
        assert!(facet(&[], Dimension::Era).labels.is_empty());
    }

    #[test]
    fn test_featured_takes_prefix() {
        let cases = fixture();
        let featured = featured(&cases, 2);
        assert_eq!(featured.len(), 2);
        assert_eq!(featured[0].name, "Zodiac");
        assert_eq!(featured[1].name, "Black Dahlia");
    }

    #[test]
    fn test_featured_shorter_collection() {
        let cases = fixture();
        assert_eq!(featured(&cases, DEFAULT_FEATURED_COUNT).len(), 4);
        assert!(featured(&[], DEFAULT_FEATURED_COUNT).is_empty());
    }

    #[test]
    fn test_stats() {
        let stats = stats(&fixture());
        assert_eq!(
            stats,
            ArchiveStats {
                total_cases: 4,
                eras: 4,
                types: 3,
                regions: 3,
            }
        );
    }
}
