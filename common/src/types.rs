//! コンテンツの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - ProjectFrontMatter: プロジェクトMarkdownのフロントマター（生データ）
//! - ProjectRecord: 検証済みのプロジェクト（読込後は不変）
//! - ContactContent: 連絡先ページの内容

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// カテゴリ未設定のプロジェクトに表示するラベル
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

/// プロジェクトのフロントマター
///
/// 未知のキーは無視する。必須チェックは [`ProjectRecord::from_front_matter`] で行う。
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectFrontMatter {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    #[serde(deserialize_with = "deserialize_tags")]
    pub tags: Vec<String>,
    pub image: Option<String>,
    pub github: Option<String>,
    pub webapp: Option<String>,
}

/// `tags` はYAMLのリストとカンマ区切り文字列の両方を受け付ける
#[derive(Deserialize)]
#[serde(untagged)]
enum TagsField {
    List(Vec<String>),
    Csv(String),
}

fn deserialize_tags<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let tags = match Option::<TagsField>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(TagsField::List(list)) => list,
        Some(TagsField::Csv(csv)) => csv.split(',').map(str::to_string).collect(),
    };
    Ok(tags
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect())
}

/// プロジェクトのカテゴリ
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Named(String),
    /// カテゴリなし（空文字も含む）
    Uncategorized,
}

impl Category {
    /// 空欄と予約語 `Uncategorized` はカテゴリなしに寄せる
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(name) if !name.is_empty() && name != UNCATEGORIZED_LABEL => {
                Category::Named(name.to_string())
            }
            _ => Category::Uncategorized,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Category::Named(name) => name,
            Category::Uncategorized => UNCATEGORIZED_LABEL,
        }
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 検証済みプロジェクト
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub tags: Vec<String>,
    pub image: Option<String>,
    pub github: Option<String>,
    pub webapp: Option<String>,
    /// フロントマター以降のMarkdown本文
    pub body: String,
}

impl ProjectRecord {
    /// フロントマターからレコードを組み立てる
    ///
    /// # Arguments
    /// * `front_matter` - パース済みフロントマター
    /// * `body` - Markdown本文
    /// * `origin` - 読込元パス（エラー表示とID導出に使用）
    ///
    /// # Returns
    /// * `Err(Error::InvalidRecord)` - タイトルが空、またはIDが導出できない場合
    pub fn from_front_matter(
        front_matter: ProjectFrontMatter,
        body: &str,
        origin: &str,
    ) -> Result<Self> {
        let title = non_blank(front_matter.title)
            .ok_or_else(|| Error::invalid(origin, "title is required"))?;

        let id = non_blank(front_matter.id)
            .or_else(|| non_blank(Some(id_from_path(origin))))
            .ok_or_else(|| Error::invalid(origin, "cannot derive an id"))?;

        Ok(Self {
            id,
            title,
            description: front_matter.description.unwrap_or_default().trim().to_string(),
            category: Category::from_raw(front_matter.category.as_deref()),
            tags: front_matter.tags,
            image: non_blank(front_matter.image),
            github: non_blank(front_matter.github),
            webapp: non_blank(front_matter.webapp),
            body: body.trim().to_string(),
        })
    }
}

/// パスのファイル名から拡張子を除いた部分をIDとする
///
/// ```
/// use portfolio_common::types::id_from_path;
///
/// assert_eq!(id_from_path("/content/projects/ml-pipeline.md"), "ml-pipeline");
/// ```
pub fn id_from_path(path: &str) -> String {
    let file_name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    match file_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem.to_string(),
        _ => file_name.to_string(),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// 連絡先ページのフロントマター
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactFrontMatter {
    pub description: String,
}

/// 連絡先ページの内容（descriptionはそのまま表示する）
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactContent {
    pub description: String,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn front_matter(yaml: &str) -> ProjectFrontMatter {
        serde_yaml::from_str(yaml).expect("YAMLパース失敗")
    }

    #[test]
    fn test_record_from_full_front_matter() {
        let fm = front_matter(
            r#"
title: Portfolio Site
description: Personal site
category: Web
tags: [react, styled-components]
image: /images/portfolio.png
github: https://github.com/example/portfolio
webapp: https://example.dev
"#,
        );

        let record = ProjectRecord::from_front_matter(fm, "\n# Body\n", "/content/projects/portfolio.md")
            .expect("レコード生成失敗");
        assert_eq!(record.id, "portfolio");
        assert_eq!(record.title, "Portfolio Site");
        assert_eq!(record.category, Category::Named("Web".into()));
        assert_eq!(record.tags, vec!["react", "styled-components"]);
        assert_eq!(record.image.as_deref(), Some("/images/portfolio.png"));
        assert_eq!(record.body, "# Body");
    }

    #[test]
    fn test_record_defaults_for_optional_fields() {
        let fm = front_matter("title: Minimal");
        let record = ProjectRecord::from_front_matter(fm, "", "minimal.md").unwrap();

        assert_eq!(record.description, "");
        assert_eq!(record.category, Category::Uncategorized);
        assert!(record.tags.is_empty());
        assert!(record.image.is_none());
        assert!(record.github.is_none());
        assert!(record.webapp.is_none());
    }

    #[test]
    fn test_record_requires_title() {
        let fm = front_matter("title: '   '\ndescription: no title");
        let err = ProjectRecord::from_front_matter(fm, "", "untitled.md").unwrap_err();
        assert!(matches!(err, Error::InvalidRecord { .. }));
        assert!(err.to_string().contains("title is required"));
    }

    #[test]
    fn test_explicit_id_wins_over_file_name() {
        let fm = front_matter("id: custom-id\ntitle: A");
        let record = ProjectRecord::from_front_matter(fm, "", "/x/file-name.md").unwrap();
        assert_eq!(record.id, "custom-id");
    }

    #[test]
    fn test_blank_category_is_uncategorized() {
        let fm = front_matter("title: A\ncategory: ''");
        let record = ProjectRecord::from_front_matter(fm, "", "a.md").unwrap();
        assert_eq!(record.category.label(), UNCATEGORIZED_LABEL);
    }

    #[test]
    fn test_literal_uncategorized_joins_bucket() {
        assert_eq!(Category::from_raw(Some("Uncategorized")), Category::Uncategorized);
        assert_eq!(Category::from_raw(Some(" Uncategorized ")), Category::Uncategorized);
        assert_eq!(
            Category::from_raw(Some("uncategorized")),
            Category::Named("uncategorized".into())
        );
    }

    #[test]
    fn test_tags_from_comma_separated_string() {
        let fm = front_matter("title: A\ntags: 'python, pandas ,, sql'");
        assert_eq!(fm.tags, vec!["python", "pandas", "sql"]);
    }

    #[test]
    fn test_null_tags_are_empty() {
        let fm = front_matter("title: A\ntags:");
        assert!(fm.tags.is_empty());
    }

    #[test]
    fn test_blank_links_are_none() {
        let fm = front_matter("title: A\ngithub: ''\nwebapp: ' '");
        let record = ProjectRecord::from_front_matter(fm, "", "a.md").unwrap();
        assert!(record.github.is_none());
        assert!(record.webapp.is_none());
    }

    #[test]
    fn test_id_from_path() {
        assert_eq!(id_from_path("/content/projects/ml-pipeline.md"), "ml-pipeline");
        assert_eq!(id_from_path("C:\\content\\web.md"), "web");
        assert_eq!(id_from_path("README"), "README");
        assert_eq!(id_from_path("archive.tar.md"), "archive.tar");
    }
}
