use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "ポートフォリオサイトのコンテンツ検証・マニフェスト生成ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 全プロジェクトと連絡先ページを読み込んで検証
    Check {
        /// サイトルート（content/ を含むディレクトリ）
        root: Option<PathBuf>,
    },

    /// プロジェクト一覧のマニフェスト（index.json）を生成
    Manifest {
        /// サイトルート
        root: Option<PathBuf>,
    },

    /// カテゴリ・検索語で絞り込んだプロジェクトを表示
    List {
        /// サイトルート
        root: Option<PathBuf>,

        /// カテゴリ（省略時は All）
        #[arg(short, long)]
        category: Option<String>,

        /// 検索語（タイトル・説明・タグ、大文字小文字無視）
        #[arg(short, long, default_value = "")]
        search: String,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// カテゴリ一覧を表示
    Categories {
        /// サイトルート
        root: Option<PathBuf>,
    },

    /// 設定
    Config {
        /// 既定のサイトルートを設定
        #[arg(long)]
        set_site_root: Option<PathBuf>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_with_filters() {
        let cli = Cli::parse_from(["portfolio", "list", "site", "-c", "Web", "-s", "react", "--json"]);
        match cli.command {
            Commands::List { root, category, search, json } => {
                assert_eq!(root, Some(PathBuf::from("site")));
                assert_eq!(category.as_deref(), Some("Web"));
                assert_eq!(search, "react");
                assert!(json);
            }
            _ => panic!("list として解釈されるべき"),
        }
    }

    #[test]
    fn test_parse_check_default_root() {
        let cli = Cli::parse_from(["portfolio", "-v", "check"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Check { root: None }));
    }
}
