//! 設定ファイルテスト

use case_archive::config::Config;
use tempfile::tempdir;

/// 設定ファイルがなければデフォルト
#[test]
fn test_config_default_when_missing() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).unwrap();

    assert_eq!(config.source, "cases.json");
    assert_eq!(config.featured_count, 6);
    assert_eq!(config.timeout_seconds, 30);
}

/// 保存と読み込み
#[test]
fn test_config_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let config = Config {
        source: "https://fatalpast.example/cases.json".to_string(),
        featured_count: 3,
        ..Default::default()
    };
    config.save_to(&path).expect("設定保存失敗");

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.source, "https://fatalpast.example/cases.json");
    assert_eq!(loaded.featured_count, 3);
    assert_eq!(loaded.timeout_seconds, 30);
}

/// 一部のフィールドだけの設定ファイル
#[test]
fn test_config_partial_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"featured_count": 4}"#).unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.featured_count, 4);
    assert_eq!(config.source, "cases.json");
}

/// コマンドラインの指定が最優先
#[test]
fn test_resolve_source_flag_wins() {
    let config = Config::default();
    assert_eq!(config.resolve_source(Some("other.json")), "other.json");
}

/// 壊れた設定ファイルはエラー
#[test]
fn test_config_invalid_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(Config::load_from(&path).is_err());
}
