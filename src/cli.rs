use case_archive_common::Dimension;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "case-archive")]
#[command(about = "事件アーカイブの一覧・絞り込み・検索ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 事件データの取得元（パス / http(s) URL / "-" で標準入力）
    #[arg(short, long, global = true)]
    pub source: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 条件に一致する事件を一覧表示
    List {
        /// 年代で絞り込み（"all" で解除）
        #[arg(long)]
        era: Option<String>,

        /// 種別で絞り込み
        #[arg(long = "type")]
        case_type: Option<String>,

        /// 地域で絞り込み
        #[arg(long)]
        region: Option<String>,

        /// 名前・場所・年で検索
        #[arg(short = 'q', long)]
        search: Option<String>,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// ディメンションごとのラベルと件数を表示
    Facets {
        /// 対象のディメンション（era / type / region、省略時はすべて）
        #[arg(short, long)]
        dimension: Option<Dimension>,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 注目事件（先頭N件）を表示
    Featured {
        /// 件数（省略時は設定値）
        #[arg(short, long)]
        count: Option<usize>,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// アーカイブの統計を表示
    Stats {
        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 対話的に絞り込み・検索
    Browse,

    /// 設定を表示/編集
    Config {
        /// 取得元を設定
        #[arg(long)]
        set_source: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
