use crate::error::{PortfolioError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// サイトのルート（content/ を含むディレクトリ）
    pub site_root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site_root: PathBuf::from("."),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PortfolioError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("portfolio").join("config.json"))
    }

    pub fn set_site_root(&mut self, root: PathBuf) -> Result<()> {
        self.site_root = root;
        self.save()
    }

    /// 引数指定があればそれを、なければ設定値を使う
    pub fn resolve_root(&self, arg: Option<PathBuf>) -> PathBuf {
        arg.unwrap_or_else(|| self.site_root.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_root_prefers_argument() {
        let config = Config {
            site_root: PathBuf::from("/srv/site"),
        };
        assert_eq!(config.resolve_root(Some(PathBuf::from("dist"))), PathBuf::from("dist"));
        assert_eq!(config.resolve_root(None), PathBuf::from("/srv/site"));
    }

    #[test]
    fn test_deserialize_missing_fields() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.site_root, PathBuf::from("."));
    }
}
