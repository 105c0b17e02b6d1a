//! スクロールトップボタン

use leptos::ev;
use leptos::leptos_dom::helpers::window_event_listener;
use leptos::prelude::*;
use portfolio_common::theme::should_show_scroll_top;

use crate::dom::{scroll_y, smooth_scroll_to_top};

#[component]
pub fn ScrollToTop() -> impl IntoView {
    let (visible, set_visible) = signal(should_show_scroll_top(scroll_y()));

    let handle = window_event_listener(ev::scroll, move |_| {
        set_visible.set(should_show_scroll_top(scroll_y()));
    });
    on_cleanup(move || handle.remove());

    view! {
        <Show when=move || visible.get()>
            <button
                class="scroll-to-top"
                aria-label="Scroll to top"
                on:click=move |_| smooth_scroll_to_top()
            >
                "↑"
            </button>
        </Show>
    }
}
