//! サイト設定
//!
//! プロフィール・スキル・学歴・SEO既定値・コンテンツパス・メール送信設定。
//! 全項目に既定値があり、JSONで部分的に上書きできる。

use crate::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub owner: String,
    pub role: String,
    pub tagline: String,
    pub bio: String,
    pub github_url: String,
    pub resume_url: Option<String>,
    pub skills: Vec<SkillGroup>,
    pub education: Vec<EducationEntry>,
    pub seo: SeoDefaults,
    pub content: ContentPaths,
    pub email: EmailJsConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillGroup {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub school: String,
    pub degree: String,
    pub period: String,
    pub description: String,
}

/// ページメタデータの既定値
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoDefaults {
    pub title: String,
    pub description: String,
    pub keywords: String,
}

impl Default for SeoDefaults {
    fn default() -> Self {
        Self {
            title: "Portfolio".into(),
            description: "Full Stack Developer & Data Scientist Portfolio".into(),
            keywords: "React, Python, Data Science, Web Development".into(),
        }
    }
}

/// コンテンツの配置（サイトルートからのパス）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentPaths {
    pub projects_dir: String,
    pub contact_file: String,
}

impl Default for ContentPaths {
    fn default() -> Self {
        Self {
            projects_dir: "/content/projects".into(),
            contact_file: "/content/contact/index.md".into(),
        }
    }
}

/// メール中継サービス（EmailJS）の識別子
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl EmailJsConfig {
    pub fn is_configured(&self) -> bool {
        !self.service_id.is_empty() && !self.template_id.is_empty() && !self.public_key.is_empty()
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: "Portfolio Owner".into(),
            role: "Full Stack Developer & Data Scientist".into(),
            tagline: "I build web applications and data pipelines.".into(),
            bio: String::new(),
            github_url: "https://github.com".into(),
            resume_url: None,
            skills: Vec::new(),
            education: Vec::new(),
            seo: SeoDefaults::default(),
            content: ContentPaths::default(),
            email: EmailJsConfig::default(),
        }
    }
}

impl SiteConfig {
    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// JSONが不正な場合は既定値を使う
    pub fn from_json_or_default(json: &str) -> Self {
        Self::from_json(json).unwrap_or_else(|e| {
            tracing::error!(error = %e, "invalid site config, using defaults");
            Self::default()
        })
    }

    /// ページタイトルの既定値（"<owner> - Portfolio"）
    pub fn default_title(&self) -> String {
        format!("{} - {}", self.owner, self.seo.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SiteConfig::from_json(r#"{"owner": "Ada Lovelace", "content": {"projects_dir": "/p"}}"#)
            .unwrap();
        assert_eq!(config.owner, "Ada Lovelace");
        assert_eq!(config.content.projects_dir, "/p");
        assert_eq!(config.content.contact_file, "/content/contact/index.md");
        assert_eq!(config.seo, SeoDefaults::default());
    }

    #[test]
    fn test_invalid_json_falls_back() {
        assert_eq!(SiteConfig::from_json_or_default("{not json"), SiteConfig::default());
    }

    #[test]
    fn test_default_title() {
        let config = SiteConfig {
            owner: "Ada".into(),
            ..Default::default()
        };
        assert_eq!(config.default_title(), "Ada - Portfolio");
    }

    #[test]
    fn test_email_configured() {
        assert!(!EmailJsConfig::default().is_configured());
        let email = EmailJsConfig {
            service_id: "s".into(),
            template_id: "t".into(),
            public_key: "k".into(),
        };
        assert!(email.is_configured());
    }

    #[test]
    fn test_skills_and_education() {
        let config = SiteConfig::from_json(
            r#"{
                "skills": [{"title": "Frontend", "items": ["Rust", "Leptos"]}],
                "education": [{"school": "Uni", "degree": "BSc", "period": "2018 - 2022"}]
            }"#,
        )
        .unwrap();
        assert_eq!(config.skills[0].items, vec!["Rust", "Leptos"]);
        assert_eq!(config.education[0].description, "");
    }
}
