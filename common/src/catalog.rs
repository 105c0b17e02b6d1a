//! プロジェクトカタログ
//!
//! 読込済みレコードから、カテゴリ一覧と表示対象（カテゴリ絞込+検索）を導出する。
//! どの操作も純粋関数で、失敗しない。

use crate::types::{Category, ProjectRecord, UNCATEGORIZED_LABEL};
use std::collections::HashSet;

/// 「すべて」フィルタのラベル
pub const ALL_LABEL: &str = "All";

/// カテゴリフィルタ
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// ラベルから復元する（`All` と `Uncategorized` は予約語）
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "" | ALL_LABEL => CategoryFilter::All,
            UNCATEGORIZED_LABEL => CategoryFilter::Only(Category::Uncategorized),
            name => CategoryFilter::Only(Category::Named(name.to_string())),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_LABEL,
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn matches(&self, category: &Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(only) => only == category,
        }
    }
}

/// 絞込状態（入力が変わるたびに再計算し、保存しない）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogView {
    pub active_category: CategoryFilter,
    pub search_term: String,
}

/// カテゴリ一覧を導出する
///
/// 先頭は常に `All`、以降は出現順でラベルの重複なし
///
/// カテゴリ名が `All` のものは先頭の `All` に含める
pub fn derive_categories(records: &[ProjectRecord]) -> Vec<CategoryFilter> {
    let mut seen = HashSet::from([ALL_LABEL]);
    let mut categories = vec![CategoryFilter::All];

    for record in records {
        if seen.insert(record.category.label()) {
            categories.push(CategoryFilter::Only(record.category.clone()));
        }
    }

    categories
}

/// 検索語に一致するか（タイトル・説明・タグの部分一致、大文字小文字無視）
///
/// `needle` は小文字化済みであること
fn matches_search(record: &ProjectRecord, needle: &str) -> bool {
    needle.is_empty()
        || record.title.to_lowercase().contains(needle)
        || record.description.to_lowercase().contains(needle)
        || record.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
}

/// 表示対象を計算する
///
/// カテゴリと検索の両方を満たすレコードを読込順のまま返す
pub fn compute_visible<'a>(
    records: &'a [ProjectRecord],
    active_category: &CategoryFilter,
    search_term: &str,
) -> Vec<&'a ProjectRecord> {
    let needle = search_term.to_lowercase();
    records
        .iter()
        .filter(|record| active_category.matches(&record.category))
        .filter(|record| matches_search(record, &needle))
        .collect()
}

/// 読込済みプロジェクト一覧
///
/// 再読込時は全件を置き換える（差分マージはしない）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    records: Vec<ProjectRecord>,
}

impl Catalog {
    pub fn new(records: Vec<ProjectRecord>) -> Self {
        Self { records }
    }

    pub fn replace(&mut self, records: Vec<ProjectRecord>) {
        self.records = records;
    }

    pub fn categories(&self) -> Vec<CategoryFilter> {
        derive_categories(&self.records)
    }

    pub fn visible(&self, view: &CatalogView) -> Vec<&ProjectRecord> {
        compute_visible(&self.records, &view.active_category, &view.search_term)
    }
}
