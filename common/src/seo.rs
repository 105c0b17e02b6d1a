//! ページメタデータ
//!
//! ページ表示時にドキュメントのタイトルと description / keywords メタタグを上書きする。
//! 指定がない項目はサイト既定値を使う。

use crate::config::SiteConfig;

/// ページが指定するメタデータ
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageMeta {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
}

/// 既定値を適用したメタデータ
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedMeta {
    pub title: String,
    pub description: String,
    pub keywords: String,
}

impl PageMeta {
    pub fn resolve(&self, site: &SiteConfig) -> ResolvedMeta {
        fn pick(value: &Option<String>, fallback: impl FnOnce() -> String) -> String {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .unwrap_or_else(fallback)
        }

        ResolvedMeta {
            title: pick(&self.title, || site.default_title()),
            description: pick(&self.description, || site.seo.description.clone()),
            keywords: pick(&self.keywords, || site.seo.keywords.clone()),
        }
    }
}

/// プロジェクト一覧ページのメタデータ
pub fn projects_page_meta(site: &SiteConfig) -> PageMeta {
    PageMeta {
        title: Some(format!("Projects - {}", site.owner)),
        description: Some("Explore my portfolio of web development and data science projects".into()),
        keywords: Some("React projects, Python projects, Data Science, Web Development".into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> SiteConfig {
        SiteConfig {
            owner: "Ada".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_when_unspecified() {
        let meta = PageMeta::default().resolve(&site());
        assert_eq!(meta.title, "Ada - Portfolio");
        assert_eq!(meta.description, "Full Stack Developer & Data Scientist Portfolio");
        assert_eq!(meta.keywords, "React, Python, Data Science, Web Development");
    }

    #[test]
    fn test_empty_values_use_defaults() {
        let meta = PageMeta {
            title: Some(String::new()),
            ..Default::default()
        }
        .resolve(&site());
        assert_eq!(meta.title, "Ada - Portfolio");
    }

    #[test]
    fn test_projects_page() {
        let meta = projects_page_meta(&site()).resolve(&site());
        assert_eq!(meta.title, "Projects - Ada");
        assert!(meta.keywords.contains("Python projects"));
    }
}
