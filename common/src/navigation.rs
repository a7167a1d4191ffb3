//! ページ遷移・スクロールの補助計算
//!
//! DOMに触れない純粋な計算だけを置く（Web側のイベントハンドラから呼ぶ）。

/// ローディングオーバーレイに出すメッセージ
pub const LOADING_MESSAGES: [&str; 5] = [
    "Analyzing Case Files...",
    "Retrieving Evidence...",
    "Scanning Archive...",
    "Accessing Dossier...",
    "Processing Forensic Data...",
];

/// ページ読み込み完了後にオーバーレイを消すまでの待ち時間（ms）
pub const OVERLAY_HIDE_DELAY_MS: u32 = 500;

/// 遷移前の待ち時間の最小値（ms）
pub const OVERLAY_MIN_DELAY_MS: u32 = 500;

/// 遷移前の待ち時間の揺らぎ幅（ms）
pub const OVERLAY_DELAY_SPREAD_MS: u32 = 4500;

/// 「トップへ戻る」ボタンを出すスクロール量（px）
pub const BACK_TO_TOP_THRESHOLD: f64 = 300.0;

/// クリックされたリンクの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// 同一ホストのページ（オーバーレイを出して遷移）
    Internal,
    /// `#section` へのページ内リンク
    Anchor,
    /// `mailto:` / `tel:` / `javascript:`
    Special,
    /// 別ホスト
    External,
}

impl LinkKind {
    /// `href` は属性値そのまま、`link_host` は解決済みURLのホスト名
    pub fn classify(href: &str, link_host: &str, current_host: &str) -> Self {
        if href.starts_with('#') {
            LinkKind::Anchor
        } else if ["mailto:", "tel:", "javascript:"]
            .iter()
            .any(|scheme| href.starts_with(scheme))
        {
            LinkKind::Special
        } else if link_host == current_host {
            LinkKind::Internal
        } else {
            LinkKind::External
        }
    }

    pub fn shows_overlay(&self) -> bool {
        matches!(self, LinkKind::Internal)
    }
}

/// ページ内リンクのスクロール先ID（`#` 単体は対象外）
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// `random` は [0, 1) の乱数
pub fn pick_loading_message(random: f64) -> &'static str {
    let index = (random * LOADING_MESSAGES.len() as f64).floor() as usize;
    LOADING_MESSAGES[index.min(LOADING_MESSAGES.len() - 1)]
}

/// 遷移までの待ち時間（500〜5000ms）
pub fn overlay_delay_ms(random: f64) -> u32 {
    let random = random.clamp(0.0, 1.0);
    OVERLAY_MIN_DELAY_MS + (random * f64::from(OVERLAY_DELAY_SPREAD_MS)) as u32
}

/// スクロール進捗（0〜100%）
///
/// スクロールできないページでは 0。
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let scrollable = scroll_height - client_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

pub fn back_to_top_visible(scroll_top: f64) -> bool {
    scroll_top >= BACK_TO_TOP_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_internal() {
        let kind = LinkKind::classify("cases/zodiac.html", "fatalpast.example", "fatalpast.example");
        assert_eq!(kind, LinkKind::Internal);
        assert!(kind.shows_overlay());
    }

    #[test]
    fn test_classify_anchor_and_special() {
        assert_eq!(
            LinkKind::classify("#archive", "fatalpast.example", "fatalpast.example"),
            LinkKind::Anchor
        );
        assert_eq!(
            LinkKind::classify("mailto:tips@fatalpast.example", "", "fatalpast.example"),
            LinkKind::Special
        );
        assert_eq!(
            LinkKind::classify("tel:5551234", "", "fatalpast.example"),
            LinkKind::Special
        );
        assert_eq!(
            LinkKind::classify("javascript:void(0)", "fatalpast.example", "fatalpast.example"),
            LinkKind::Special
        );
    }

    #[test]
    fn test_classify_external() {
        let kind = LinkKind::classify("https://example.org/", "example.org", "fatalpast.example");
        assert_eq!(kind, LinkKind::External);
        assert!(!kind.shows_overlay());
    }

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#archive"), Some("archive"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("cases.html"), None);
    }

    #[test]
    fn test_pick_loading_message_bounds() {
        assert_eq!(pick_loading_message(0.0), "Analyzing Case Files...");
        assert_eq!(pick_loading_message(0.999), "Processing Forensic Data...");
        assert_eq!(pick_loading_message(1.0), "Processing Forensic Data...");
    }

    #[test]
    fn test_overlay_delay_range() {
        assert_eq!(overlay_delay_ms(0.0), 500);
        assert_eq!(overlay_delay_ms(0.5), 2750);
        assert_eq!(overlay_delay_ms(1.0), 5000);
    }

    #[test]
    fn test_scroll_progress() {
        assert_eq!(scroll_progress(0.0, 2000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(500.0, 2000.0, 1000.0), 50.0);
        assert_eq!(scroll_progress(1000.0, 2000.0, 1000.0), 100.0);
    }

    #[test]
    fn test_scroll_progress_unscrollable_page() {
        assert_eq!(scroll_progress(0.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_progress(0.0, 600.0, 800.0), 0.0);
    }

    #[test]
    fn test_back_to_top_threshold() {
        assert!(!back_to_top_visible(299.0));
        assert!(back_to_top_visible(300.0));
    }
}
