//! ポートフォリオサイトのコンテンツツール
//!
//! Web版と同じローダー・カタログロジックをファイルシステム上で実行する

pub mod cli;
pub mod commands;
pub mod config;
pub mod content;
pub mod error;
