//! テーマ（ダーク/ライト）とシェルの表示ルール

use std::fmt::Write;

/// スクロールトップボタンを表示するスクロール量（px）
pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;

/// カードに表示するタグの最大数
pub const MAX_CARD_TAGS: usize = 4;

/// ナビゲーションのセクション (アンカーID, ラベル)
pub const NAV_SECTIONS: [(&str, &str); 5] = [
    ("about", "About"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("education", "Education"),
    ("contact", "Contact"),
];

pub fn should_show_scroll_top(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_THRESHOLD
}

/// カード表示用のタグ（先頭から最大4件）
pub fn card_tags(tags: &[String]) -> &[String] {
    &tags[..tags.len().min(MAX_CARD_TAGS)]
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// 配色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: &'static str,
    pub bg_light: &'static str,
    pub primary: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub card: &'static str,
    pub card_light: &'static str,
}

const DARK: Palette = Palette {
    bg: "#090917",
    bg_light: "#1C1E27",
    primary: "#854CE6",
    text_primary: "#F2F3F4",
    text_secondary: "#b1b2b3",
    card: "#171721",
    card_light: "#191924",
};

const LIGHT: Palette = Palette {
    bg: "#FFFFFF",
    bg_light: "#f0f0f0",
    primary: "#be1adb",
    text_primary: "#111111",
    text_secondary: "#48494a",
    card: "#FFFFFF",
    card_light: "#FFFFFF",
};

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Theme::Dark => "theme-dark",
            Theme::Light => "theme-light",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => DARK,
            Theme::Light => LIGHT,
        }
    }

    /// トグルボタンのアイコン（切り替え先を表す）
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Dark => "☀",
            Theme::Light => "☾",
        }
    }
}

impl Palette {
    /// CSSカスタムプロパティとして出力
    pub fn css_variables(&self) -> String {
        let vars = [
            ("bg", self.bg),
            ("bg-light", self.bg_light),
            ("primary", self.primary),
            ("text-primary", self.text_primary),
            ("text-secondary", self.text_secondary),
            ("card", self.card),
            ("card-light", self.card_light),
        ];

        let mut css = String::new();
        for (name, value) in vars {
            let _ = write!(css, "--{}: {}; ", name, value);
        }
        css.trim_end().to_string()
    }
}
