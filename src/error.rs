use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("不正なコンテンツがあります: {0}件")]
    InvalidContent(usize),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] portfolio_common::Error),
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
