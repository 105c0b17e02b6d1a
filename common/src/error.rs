//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Front-matter not found: {0}")]
    MissingFrontMatter(String),

    #[error("Invalid record {path}: {reason}")]
    InvalidRecord { path: String, reason: String },

    #[error("Load error: {0}")]
    Load(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn invalid(path: &str, reason: impl Into<String>) -> Self {
        Error::InvalidRecord {
            path: path.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = Error::Io(io_error);
        let display = format!("{}", error);
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_error_display_yaml() {
        let yaml_error = serde_yaml::from_str::<Vec<String>>("key: [unclosed").unwrap_err();
        let error: Error = yaml_error.into();
        assert!(matches!(error, Error::Yaml(_)));
        assert!(format!("{}", error).starts_with("YAML error"));
    }

    #[test]
    fn test_error_display_invalid_record() {
        let error = Error::invalid("/content/projects/a.md", "title is required");
        assert_eq!(
            format!("{}", error),
            "Invalid record /content/projects/a.md: title is required"
        );
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::Load("HTTP 404".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("Load"));
        assert!(debug.contains("HTTP 404"));
    }
}
