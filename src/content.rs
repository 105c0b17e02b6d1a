//! ファイルシステム上のコンテンツ読込
//!
//! Web版と同じ `/content/...` 形式のパスを、サイトルートからの相対パスとして解決する。

use crate::error::{PortfolioError, Result};
use portfolio_common::loader::{is_markdown_file_name, parse_manifest, MANIFEST_FILE};
use portfolio_common::ContentSource;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// サイトルート配下を読むコンテンツソース
#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `/content/projects` → `<root>/content/projects`
    pub fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path.trim_start_matches('/'))
    }
}

impl ContentSource for FsSource {
    async fn read_text(&self, path: &str) -> portfolio_common::Result<String> {
        let text = tokio::fs::read_to_string(self.resolve(path)).await?;
        Ok(text)
    }

    async fn list_collection(&self, dir: &str) -> portfolio_common::Result<Vec<String>> {
        let dir_path = self.resolve(dir);
        if !dir_path.is_dir() {
            return Err(portfolio_common::Error::Load(format!(
                "directory not found: {}",
                dir_path.display()
            )));
        }
        Ok(scan_markdown_files(&dir_path))
    }
}

/// ディレクトリ直下のMarkdownファイル名（ファイル名順）
pub fn scan_markdown_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = WalkDir::new(dir)
        .max_depth(1) // 直下のみ
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.file_name().to_str().map(str::to_string))
        .filter(|name| is_markdown_file_name(name))
        .collect();

    names.sort();
    names
}

/// マニフェスト（index.json）を書き出す
///
/// # Returns
/// 書き出したパスと、掲載したファイル名
pub fn write_manifest(dir: &Path) -> Result<(PathBuf, Vec<String>)> {
    if !dir.is_dir() {
        return Err(PortfolioError::FolderNotFound(dir.display().to_string()));
    }

    let names = scan_markdown_files(dir);
    let path = dir.join(MANIFEST_FILE);
    let json = serde_json::to_string_pretty(&names)?;
    std::fs::write(&path, json + "\n")?;
    Ok((path, names))
}

/// マニフェストとディスク上のファイルの差分
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManifestDrift {
    /// ディスクにあるがマニフェストにない
    pub unlisted: Vec<String>,
    /// マニフェストにあるがディスクにない
    pub missing: Vec<String>,
}

/// マニフェストとディスクを比較する
///
/// マニフェストがない場合は `Ok(None)`
pub fn manifest_drift(dir: &Path) -> Result<Option<ManifestDrift>> {
    let path = dir.join(MANIFEST_FILE);
    if !path.exists() {
        return Ok(None);
    }

    let listed = parse_manifest(&std::fs::read_to_string(&path)?)?;
    let on_disk = scan_markdown_files(dir);

    Ok(Some(ManifestDrift {
        unlisted: on_disk.iter().filter(|n| !listed.contains(n)).cloned().collect(),
        missing: listed.iter().filter(|n| !on_disk.contains(n)).cloned().collect(),
    }))
}
