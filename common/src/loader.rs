//! コンテンツローダー（CLI/WASM共通）
//!
//! 読込手段は [`ContentSource`] で抽象化する。
//! CLIはファイルシステム、WebはHTTPで実装する。
//!
//! コレクション（ディレクトリ）の一覧はブラウザから取得できないため、
//! 各ディレクトリに `index.json`（ファイル名の配列）を置く。

use crate::error::{Error, Result};
use crate::frontmatter::{parse_document, MarkdownDocument};
use crate::types::{ContactContent, ContactFrontMatter, ProjectFrontMatter, ProjectRecord};
use serde::de::DeserializeOwned;
use std::collections::HashSet;

/// コレクションのマニフェストファイル名
pub const MANIFEST_FILE: &str = "index.json";

/// コンテンツの読込元
#[allow(async_fn_in_trait)]
pub trait ContentSource {
    /// パスのテキストを読む
    async fn read_text(&self, path: &str) -> Result<String>;

    /// コレクション内のMarkdownファイル名を表示順で返す
    async fn list_collection(&self, dir: &str) -> Result<Vec<String>>;
}

/// 読込をスキップしたファイル
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedFile {
    pub path: String,
    pub reason: String,
}

/// コレクションの読込結果
#[derive(Debug, Clone)]
pub struct Collection<F> {
    /// (パス, ドキュメント) の並び
    pub documents: Vec<(String, MarkdownDocument<F>)>,
    pub skipped: Vec<SkippedFile>,
}

/// カタログの読込結果
#[derive(Debug, Clone, Default)]
pub struct CatalogLoad {
    pub records: Vec<ProjectRecord>,
    pub skipped: Vec<SkippedFile>,
}

/// ディレクトリとファイル名を `/` で連結する
///
/// ```
/// use portfolio_common::loader::join_path;
///
/// assert_eq!(join_path("/content/projects/", "a.md"), "/content/projects/a.md");
/// ```
pub fn join_path(dir: &str, name: &str) -> String {
    if dir.is_empty() {
        return name.to_string();
    }
    format!("{}/{}", dir.trim_end_matches('/'), name.trim_start_matches('/'))
}

/// マニフェストに載せられるファイル名か
pub fn is_markdown_file_name(name: &str) -> bool {
    name.ends_with(".md") && name.len() > 3 && !name.contains(['/', '\\']) && !name.starts_with('.')
}

/// マニフェスト（JSONの文字列配列）をパースする
///
/// Markdown以外やパス区切りを含む名前は警告を出して除外する
pub fn parse_manifest(json: &str) -> Result<Vec<String>> {
    let names: Vec<String> = serde_json::from_str(json)?;
    Ok(names
        .into_iter()
        .filter(|name| {
            let ok = is_markdown_file_name(name);
            if !ok {
                tracing::warn!(name = %name, "manifest entry ignored");
            }
            ok
        })
        .collect())
}

/// Markdownファイルを1件読み込む
///
/// ファイルがない、またはフロントマターが不正な場合はエラー
pub async fn load_markdown_file<S, F>(source: &S, path: &str) -> Result<MarkdownDocument<F>>
where
    S: ContentSource + ?Sized,
    F: DeserializeOwned,
{
    let text = source.read_text(path).await?;
    parse_document(&text, path)
}

/// コレクションを読み込む
///
/// 一覧が取得できない場合はエラー。個々の不正ファイルはスキップして続行する。
pub async fn load_markdown_collection<S, F>(source: &S, dir: &str) -> Result<Collection<F>>
where
    S: ContentSource + ?Sized,
    F: DeserializeOwned,
{
    let names = source.list_collection(dir).await?;

    let mut documents = Vec::with_capacity(names.len());
    let mut skipped = Vec::new();

    for name in names {
        let path = join_path(dir, &name);
        match load_markdown_file(source, &path).await {
            Ok(doc) => documents.push((path, doc)),
            Err(e) => {
                tracing::warn!(path = %path, error = %e, "skipping content file");
                skipped.push(SkippedFile {
                    path,
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok(Collection { documents, skipped })
}

/// プロジェクトのコレクションを検証済みレコードに変換する
///
/// 読込順を維持する。IDが重複した場合は先のファイルを採用する。
pub fn build_catalog(collection: Collection<ProjectFrontMatter>) -> CatalogLoad {
    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(collection.documents.len());
    let mut skipped = collection.skipped;

    for (path, doc) in collection.documents {
        let record = match ProjectRecord::from_front_matter(doc.frontmatter, &doc.body, &path) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(path = %path, error = %e, "skipping invalid project");
                skipped.push(SkippedFile {
                    path,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        if !seen.insert(record.id.clone()) {
            tracing::warn!(path = %path, id = %record.id, "skipping duplicate project id");
            skipped.push(SkippedFile {
                path,
                reason: format!("duplicate id: {}", record.id),
            });
            continue;
        }

        records.push(record);
    }

    CatalogLoad { records, skipped }
}

/// カタログを読み込み、スキップしたファイルも返す
pub async fn load_catalog_report<S>(source: &S, dir: &str) -> Result<CatalogLoad>
where
    S: ContentSource + ?Sized,
{
    let collection = load_markdown_collection::<S, ProjectFrontMatter>(source, dir)
        .await
        .map_err(|e| match e {
            Error::Load(_) => e,
            other => Error::Load(format!("{}: {}", dir, other)),
        })?;
    Ok(build_catalog(collection))
}

/// カタログを読み込む
pub async fn load_catalog<S>(source: &S, dir: &str) -> Result<Vec<ProjectRecord>>
where
    S: ContentSource + ?Sized,
{
    let report = load_catalog_report(source, dir).await?;
    tracing::info!(
        loaded = report.records.len(),
        skipped = report.skipped.len(),
        "catalog loaded"
    );
    Ok(report.records)
}

/// 連絡先ページを読み込む
pub async fn load_contact<S>(source: &S, path: &str) -> Result<ContactContent>
where
    S: ContentSource + ?Sized,
{
    let doc: MarkdownDocument<ContactFrontMatter> = load_markdown_file(source, path).await?;
    Ok(ContactContent {
        description: doc.frontmatter.description,
        body: doc.body.trim().to_string(),
    })
}
