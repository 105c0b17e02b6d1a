//! サブコマンドの実装

use crate::content::{manifest_drift, write_manifest, FsSource};
use crate::error::{PortfolioError, Result};
use portfolio_common::{
    load_catalog_report, load_contact, Catalog, CatalogLoad, CatalogView, CategoryFilter,
    ProjectRecord, SiteConfig,
};
use std::path::Path;

/// サイト設定ファイル（サイトルートからの相対パス）
pub const SITE_CONFIG_FILE: &str = "content/site.json";

/// サイト設定を読む（ファイルがなければ既定値）
pub fn load_site_config(root: &Path) -> Result<SiteConfig> {
    let path = root.join(SITE_CONFIG_FILE);
    if !path.exists() {
        tracing::debug!(path = %path.display(), "site config not found, using defaults");
        return Ok(SiteConfig::default());
    }
    let json = std::fs::read_to_string(&path)?;
    Ok(SiteConfig::from_json(&json)?)
}

fn ensure_root(root: &Path) -> Result<()> {
    if !root.is_dir() {
        return Err(PortfolioError::FolderNotFound(root.display().to_string()));
    }
    Ok(())
}

/// 検証結果
#[derive(Debug, Default)]
pub struct CheckSummary {
    pub catalog: CatalogLoad,
    pub contact_ok: bool,
    pub manifest_problems: Vec<String>,
}

impl CheckSummary {
    pub fn problem_count(&self) -> usize {
        self.catalog.skipped.len() + usize::from(!self.contact_ok) + self.manifest_problems.len()
    }
}

pub async fn check(root: &Path) -> Result<CheckSummary> {
    ensure_root(root)?;
    let site = load_site_config(root)?;
    let source = FsSource::new(root);

    let catalog = load_catalog_report(&source, &site.content.projects_dir).await?;

    let contact_ok = match load_contact(&source, &site.content.contact_file).await {
        Ok(_) => true,
        Err(e) => {
            tracing::error!(path = %site.content.contact_file, error = %e, "contact content invalid");
            false
        }
    };

    let mut manifest_problems = Vec::new();
    match manifest_drift(&source.resolve(&site.content.projects_dir))? {
        None => manifest_problems.push("index.json がありません（`portfolio manifest` で生成）".to_string()),
        Some(drift) => {
            for name in drift.unlisted {
                manifest_problems.push(format!("index.json に未掲載: {}", name));
            }
            for name in drift.missing {
                manifest_problems.push(format!("index.json のファイルが存在しません: {}", name));
            }
        }
    }

    Ok(CheckSummary {
        catalog,
        contact_ok,
        manifest_problems,
    })
}

pub fn manifest(root: &Path) -> Result<(std::path::PathBuf, Vec<String>)> {
    ensure_root(root)?;
    let site = load_site_config(root)?;
    let dir = FsSource::new(root).resolve(&site.content.projects_dir);
    write_manifest(&dir)
}

/// カタログを読み込む（スキップしたファイルは警告ログのみ）
pub async fn load_projects(root: &Path) -> Result<Vec<ProjectRecord>> {
    ensure_root(root)?;
    let site = load_site_config(root)?;
    let report = load_catalog_report(&FsSource::new(root), &site.content.projects_dir).await?;
    Ok(report.records)
}

pub async fn list(root: &Path, category: Option<&str>, search: &str) -> Result<Vec<ProjectRecord>> {
    let catalog = Catalog::new(load_projects(root).await?);
    let view = CatalogView {
        active_category: category.map(CategoryFilter::from_label).unwrap_or_default(),
        search_term: search.to_string(),
    };
    Ok(catalog.visible(&view).into_iter().cloned().collect())
}

pub async fn categories(root: &Path) -> Result<Vec<String>> {
    let catalog = Catalog::new(load_projects(root).await?);
    Ok(catalog
        .categories()
        .iter()
        .map(|c| c.label().to_string())
        .collect())
}
