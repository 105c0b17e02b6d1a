//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use portfolio::commands;
use portfolio::error::PortfolioError;
use std::path::Path;
use tempfile::tempdir;

/// 存在しないサイトルート
#[tokio::test]
async fn test_check_nonexistent_root() {
    let result = commands::check(Path::new("/nonexistent/path/12345")).await;

    let err = result.unwrap_err();
    assert!(matches!(err, PortfolioError::FolderNotFound(_)));
}

/// プロジェクトディレクトリがない
#[tokio::test]
async fn test_list_without_projects_dir() {
    let dir = tempdir().expect("Failed to create temp dir");

    let err = commands::list(dir.path(), None, "").await.unwrap_err();
    assert!(matches!(err, PortfolioError::Common(portfolio_common::Error::Load(_))));
}

/// 壊れたサイト設定
#[test]
fn test_invalid_site_config() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::create_dir_all(dir.path().join("content")).unwrap();
    std::fs::write(dir.path().join(commands::SITE_CONFIG_FILE), "{ not json").unwrap();

    let result = commands::load_site_config(dir.path());
    assert!(result.is_err());
}

/// サイト設定がなければ既定値
#[test]
fn test_missing_site_config_uses_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");

    let site = commands::load_site_config(dir.path()).unwrap();
    assert_eq!(site.content.projects_dir, "/content/projects");
}

#[test]
fn test_error_messages() {
    let err = PortfolioError::FolderNotFound("/tmp/site".into());
    assert!(err.to_string().contains("/tmp/site"));

    let err = PortfolioError::InvalidContent(3);
    assert!(err.to_string().contains('3'));

    let err: PortfolioError = portfolio_common::Error::Load("content/projects".into()).into();
    assert!(err.to_string().contains("content/projects"));
}
