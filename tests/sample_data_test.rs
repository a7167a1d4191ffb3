//! 同梱の事件データテスト

use case_archive_common::{parse_cases, CaseCatalog, Dimension};

const SAMPLE: &str = include_str!("../data/cases.json");

/// 同梱データがパースできる
#[test]
fn test_sample_data_parses() {
    let cases = parse_cases(SAMPLE).expect("同梱データのパース失敗");
    assert_eq!(cases.len(), 6);
    assert!(cases.iter().all(|c| !c.link.is_empty()));
}

/// 同梱データで絞り込みと検索を組み合わせる
#[test]
fn test_sample_data_filter_and_search() {
    let mut catalog = CaseCatalog::with_cases(parse_cases(SAMPLE).unwrap());

    catalog.set_filter(Dimension::Type, "Unsolved");
    catalog.set_filter(Dimension::Region, "West");
    let names: Vec<&str> = catalog.visible_cases().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Zodiac Killer", "Black Dahlia", "D. B. Cooper"]);

    catalog.set_search("port");
    let names: Vec<&str> = catalog.visible_cases().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["D. B. Cooper"]);
}
