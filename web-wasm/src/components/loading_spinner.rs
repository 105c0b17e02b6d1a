use leptos::prelude::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="loading-spinner" role="status">
            <div class="spinner"></div>
        </div>
    }
}
