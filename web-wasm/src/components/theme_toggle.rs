//! テーマ切替ボタン（テーマを書き換える唯一の場所）

use leptos::prelude::*;

use crate::app::use_app_state;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_app_state().theme;

    view! {
        <button
            class="theme-toggle"
            aria-label="Toggle theme"
            on:click=move |_| theme.update(|t| *t = t.toggled())
        >
            {move || theme.get().toggle_icon()}
        </button>
    }
}
