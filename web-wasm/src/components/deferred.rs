//! 遅延描画
//!
//! 初回描画の次フレームまで子要素を描画せず、スピナーを表示する

use leptos::leptos_dom::helpers::request_animation_frame;
use leptos::prelude::*;

use super::loading_spinner::LoadingSpinner;

#[component]
pub fn Deferred(children: ChildrenFn) -> impl IntoView {
    let (ready, set_ready) = signal(false);

    request_animation_frame(move || {
        set_ready.try_set(true);
    });

    view! {
        <Show when=move || ready.get() fallback=|| view! { <LoadingSpinner /> }>
            {children()}
        </Show>
    }
}
