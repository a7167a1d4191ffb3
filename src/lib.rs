//! Case Archive CLI
//!
//! 事件アーカイブの一覧・絞り込み・検索

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod sources;
pub mod output;
pub mod browse;
