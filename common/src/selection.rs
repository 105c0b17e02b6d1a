//! プロジェクト詳細モーダルの選択状態

use crate::types::ProjectRecord;

/// クリックの発生元
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOrigin {
    /// カード本体
    Card,
    /// カード内のリンク（Code / Live Demo）
    NestedLink,
}

/// 選択状態
///
/// シェル生成時は非選択。カードクリックで選択、モーダルを閉じると非選択に戻る。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    pub active: bool,
    pub project: Option<ProjectRecord>,
}

impl SelectionState {
    pub fn select(record: ProjectRecord) -> Self {
        Self {
            active: true,
            project: Some(record),
        }
    }

    pub fn dismiss() -> Self {
        Self::default()
    }

    /// カードのクリックを処理する
    ///
    /// リンク由来のクリックでは選択しない
    pub fn on_card_click(&mut self, origin: ClickOrigin, record: &ProjectRecord) {
        if origin == ClickOrigin::Card {
            *self = Self::select(record.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn record(id: &str) -> ProjectRecord {
        ProjectRecord {
            id: id.to_string(),
            title: id.to_uppercase(),
            description: String::new(),
            category: Category::Uncategorized,
            tags: vec![],
            image: None,
            github: Some("https://github.com/example/x".into()),
            webapp: None,
            body: String::new(),
        }
    }

    #[test]
    fn test_initial_state() {
        let state = SelectionState::default();
        assert!(!state.active);
        assert!(state.project.is_none());
    }

    #[test]
    fn test_select_sets_exact_record() {
        let r = record("a");
        let state = SelectionState::select(r.clone());
        assert!(state.active);
        assert_eq!(state.project, Some(r));
    }

    #[test]
    fn test_dismiss_from_any_state() {
        assert_eq!(SelectionState::dismiss(), SelectionState::default());

        let state = SelectionState::select(record("a"));
        assert!(state.active);
        let state = SelectionState::dismiss();
        assert!(!state.active);
        assert!(state.project.is_none());
    }

    #[test]
    fn test_card_click_selects() {
        let mut state = SelectionState::default();
        state.on_card_click(ClickOrigin::Card, &record("b"));
        assert_eq!(state.project.map(|p| p.id), Some("b".to_string()));
    }

    #[test]
    fn test_nested_link_click_does_not_select() {
        let mut state = SelectionState::default();
        state.on_card_click(ClickOrigin::NestedLink, &record("b"));
        assert_eq!(state, SelectionState::default());

        let mut open = SelectionState::select(record("a"));
        open.on_card_click(ClickOrigin::NestedLink, &record("b"));
        assert_eq!(open.project.map(|p| p.id), Some("a".to_string()));
    }
}
