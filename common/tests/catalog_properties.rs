//! カタログの性質テスト
//!
//! 任意のコレクション・フィルタ状態で成り立つ性質をproptestで検証

use case_archive_common::{Case, CaseCatalog, Dimension};
use proptest::prelude::*;

static ERAS: [&str; 3] = ["1940s", "1960s", "1880s"];
static TYPES: [&str; 3] = ["Unsolved", "Serial", "Solved"];
static REGIONS: [&str; 3] = ["West", "East", "Europe"];

fn arb_case() -> impl Strategy<Value = Case> {
    (
        "[A-Za-z ]{1,12}",
        "[0-9]{4}",
        "[A-Za-z ]{0,12}",
        prop::sample::select(&ERAS[..]),
        prop::sample::select(&TYPES[..]),
        prop::sample::select(&REGIONS[..]),
    )
        .prop_map(|(name, year, location, era, case_type, region)| {
            Case::new(name, year, location, era, case_type, region)
        })
}

fn arb_filter_value(labels: &'static [&'static str]) -> impl Strategy<Value = String> {
    prop_oneof![
        Just("all".to_string()),
        prop::sample::select(labels).prop_map(str::to_string),
    ]
}

fn arb_search() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[A-Za-z0-9 ]{0,4}"]
}

proptest! {
    /// 表示対象は元コレクションの部分列（順序保持）
    #[test]
    fn visible_is_ordered_subsequence(
        cases in prop::collection::vec(arb_case(), 0..20),
        era in arb_filter_value(&ERAS),
        case_type in arb_filter_value(&TYPES),
        region in arb_filter_value(&REGIONS),
        search in arb_search(),
    ) {
        let mut catalog = CaseCatalog::with_cases(cases.clone());
        catalog.set_filter(Dimension::Era, era);
        catalog.set_filter(Dimension::Type, case_type);
        catalog.set_filter(Dimension::Region, region);
        catalog.set_search(search);

        let mut source = cases.iter();
        for visible in catalog.visible_cases() {
            prop_assert!(source.any(|c| c == visible));
        }
    }

    /// すべて "all" かつ検索語が空なら全件
    #[test]
    fn unconstrained_is_identity(cases in prop::collection::vec(arb_case(), 0..20)) {
        let mut catalog = CaseCatalog::with_cases(cases.clone());
        for dimension in Dimension::ORDER {
            catalog.set_filter(dimension, "all");
        }
        catalog.set_search("");

        let visible: Vec<Case> = catalog.visible_cases().into_iter().cloned().collect();
        prop_assert_eq!(visible, cases);
    }

    /// 同じ値で2回設定しても結果は変わらない
    #[test]
    fn set_filter_is_idempotent(
        cases in prop::collection::vec(arb_case(), 0..20),
        region in arb_filter_value(&REGIONS),
    ) {
        let mut once = CaseCatalog::with_cases(cases.clone());
        once.set_filter(Dimension::Region, region.clone());

        let mut twice = CaseCatalog::with_cases(cases);
        twice.set_filter(Dimension::Region, region.clone());
        twice.set_filter(Dimension::Region, region);

        prop_assert_eq!(once.visible_cases(), twice.visible_cases());
    }

    /// clear_allは検索語を変えない
    #[test]
    fn clear_all_preserves_search(
        search in arb_search(),
        era in arb_filter_value(&ERAS),
    ) {
        let mut catalog = CaseCatalog::new();
        catalog.set_search(search.clone());
        catalog.set_filter(Dimension::Era, era);

        catalog.clear_all();

        prop_assert_eq!(catalog.filters().search_term(), search.as_str());
        prop_assert!(catalog.active_filter_summary().is_empty());
    }
}
