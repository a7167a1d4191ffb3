//! 事件データの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - Case: `cases.json` の1レコード（読み込み後は不変）

use serde::{Deserialize, Serialize};

/// アーカイブされた1件の事件
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    /// 表示名（空文字不可）
    pub name: String,

    /// 年（数値ではなく文字列。"c. 1888" のような値もある）
    pub year: String,

    pub location: String,

    pub era: String,              // 年代ラベル

    #[serde(rename = "type")]
    pub case_type: String,        // 種別ラベル

    pub region: String,           // 地域ラベル

    #[serde(default)]
    pub image: String,

    #[serde(default)]
    pub link: String,

    #[serde(default)]
    pub description: String,
}

impl Case {
    /// 名前・年・場所・分類ラベルだけを持つCaseを作る（テストやフィクスチャ用）
    pub fn new(
        name: impl Into<String>,
        year: impl Into<String>,
        location: impl Into<String>,
        era: impl Into<String>,
        case_type: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            year: year.into(),
            location: location.into(),
            era: era.into(),
            case_type: case_type.into(),
            region: region.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_deserialize() {
        let json = r#"{
            "name": "Zodiac",
            "year": "1968",
            "location": "San Francisco",
            "era": "1960s",
            "type": "Unsolved",
            "region": "West",
            "image": "img/zodiac.jpg",
            "link": "cases/zodiac.html",
            "description": "Cipher letters sent to the press."
        }"#;

        let case: Case = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(case.name, "Zodiac");
        assert_eq!(case.year, "1968");
        assert_eq!(case.case_type, "Unsolved");
        assert_eq!(case.link, "cases/zodiac.html");
    }

    #[test]
    fn test_case_deserialize_missing_presentation_fields() {
        // 表示用フィールドは省略可
        let json = r#"{
            "name": "Black Dahlia",
            "year": "1947",
            "location": "Los Angeles",
            "era": "1940s",
            "type": "Unsolved",
            "region": "West"
        }"#;

        let case: Case = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(case.image, "");
        assert_eq!(case.link, "");
        assert_eq!(case.description, "");
    }

    #[test]
    fn test_case_missing_category_is_error() {
        let json = r#"{"name": "Nameless", "year": "1900", "location": "Nowhere"}"#;
        assert!(serde_json::from_str::<Case>(json).is_err());
    }

    #[test]
    fn test_case_numeric_year_is_error() {
        // yearは部分一致検索のため文字列で持つ
        let json = r#"{
            "name": "Zodiac", "year": 1968, "location": "San Francisco",
            "era": "1960s", "type": "Unsolved", "region": "West"
        }"#;
        assert!(serde_json::from_str::<Case>(json).is_err());
    }

    #[test]
    fn test_case_serialize_uses_type_key() {
        let case = Case::new("Zodiac", "1968", "San Francisco", "1960s", "Unsolved", "West");
        let json = serde_json::to_string(&case).expect("シリアライズ失敗");
        assert!(json.contains("\"type\":\"Unsolved\""));
        assert!(!json.contains("caseType"));
    }
}
