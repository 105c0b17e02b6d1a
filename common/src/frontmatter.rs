//! フロントマター付きMarkdownのパーサー
//!
//! 先頭行の `---` から次の `---` 行までをYAMLとして読み、残りを本文とする。

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;

const FENCE: &str = "---";

/// フロントマターと本文
#[derive(Debug, Clone, PartialEq)]
pub struct MarkdownDocument<F> {
    pub frontmatter: F,
    pub body: String,
}

/// YAML部分と本文に分割する
///
/// 先頭がフェンスで始まらない、または閉じフェンスがない場合は `None`
///
/// # Examples
/// ```
/// use portfolio_common::frontmatter::split_front_matter;
///
/// let (yaml, body) = split_front_matter("---\ntitle: A\n---\nbody\n").unwrap();
/// assert_eq!(yaml, "title: A\n");
/// assert_eq!(body, "body\n");
/// ```
pub fn split_front_matter(input: &str) -> Option<(&str, &str)> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    let mut lines = input.split_inclusive('\n');

    let first = lines.next()?;
    if first.trim_end() != FENCE {
        return None;
    }

    let start = first.len();
    let mut offset = start;
    for line in lines {
        if line.trim_end() == FENCE {
            return Some((&input[start..offset], &input[offset + line.len()..]));
        }
        offset += line.len();
    }

    None
}

/// Markdown文字列をパースする
///
/// # Arguments
/// * `source` - ファイル内容
/// * `origin` - エラー表示用のパス
pub fn parse_document<F: DeserializeOwned>(source: &str, origin: &str) -> Result<MarkdownDocument<F>> {
    let (yaml, body) = split_front_matter(source)
        .ok_or_else(|| Error::MissingFrontMatter(origin.to_string()))?;

    // 空のフロントマターは空マッピングとして扱う
    let yaml = if yaml.trim().is_empty() { "{}" } else { yaml };
    let frontmatter = serde_yaml::from_str(yaml)?;

    Ok(MarkdownDocument {
        frontmatter,
        body: body.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ContactFrontMatter, ProjectFrontMatter};

    #[test]
    fn test_split_basic() {
        let (yaml, body) = split_front_matter("---\ntitle: A\n---\n# Heading\n").unwrap();
        assert_eq!(yaml, "title: A\n");
        assert_eq!(body, "# Heading\n");
    }

    #[test]
    fn test_split_crlf() {
        let (yaml, body) = split_front_matter("---\r\ntitle: A\r\n---\r\nbody").unwrap();
        assert_eq!(yaml, "title: A\r\n");
        assert_eq!(body, "body");
    }

    #[test]
    fn test_split_with_bom() {
        assert!(split_front_matter("\u{feff}---\ntitle: A\n---\n").is_some());
    }

    #[test]
    fn test_split_without_fence() {
        assert!(split_front_matter("# Just markdown\n").is_none());
        assert!(split_front_matter("").is_none());
    }

    #[test]
    fn test_split_unclosed_fence() {
        assert!(split_front_matter("---\ntitle: A\nno closing\n").is_none());
    }

    #[test]
    fn test_body_may_contain_fences() {
        let (_, body) = split_front_matter("---\na: 1\n---\nintro\n---\nmore\n").unwrap();
        assert_eq!(body, "intro\n---\nmore\n");
    }

    #[test]
    fn test_parse_project_document() {
        let doc: MarkdownDocument<ProjectFrontMatter> = parse_document(
            "---\ntitle: ML Pipeline\ncategory: Data\ntags:\n  - python\n---\nDetails",
            "ml.md",
        )
        .unwrap();
        assert_eq!(doc.frontmatter.title.as_deref(), Some("ML Pipeline"));
        assert_eq!(doc.frontmatter.tags, vec!["python"]);
        assert_eq!(doc.body, "Details");
    }

    #[test]
    fn test_parse_empty_front_matter() {
        let doc: MarkdownDocument<ContactFrontMatter> =
            parse_document("---\n---\nHello", "contact.md").unwrap();
        assert_eq!(doc.frontmatter.description, "");
        assert_eq!(doc.body, "Hello");
    }

    #[test]
    fn test_parse_missing_front_matter() {
        let err = parse_document::<ContactFrontMatter>("no front matter", "x.md").unwrap_err();
        assert!(matches!(err, Error::MissingFrontMatter(path) if path == "x.md"));
    }

    #[test]
    fn test_parse_malformed_yaml() {
        let err = parse_document::<ProjectFrontMatter>("---\ntitle: [oops\n---\n", "bad.md")
            .unwrap_err();
        assert!(matches!(err, Error::Yaml(_)));
    }
}
