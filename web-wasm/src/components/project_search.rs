//! プロジェクト検索ボックス

use leptos::prelude::*;

#[component]
pub fn ProjectSearch(search_term: RwSignal<String>) -> impl IntoView {
    view! {
        <div class="project-search">
            <input
                type="text"
                placeholder="Search projects..."
                prop:value=move || search_term.get()
                on:input=move |ev| search_term.set(event_target_value(&ev))
            />
        </div>
    }
}
