//! フッター

use leptos::prelude::*;

use crate::app::use_app_state;

#[component]
pub fn Footer() -> impl IntoView {
    let site = use_app_state().site;
    let (owner, github_url) = site.with_value(|s| (s.owner.clone(), s.github_url.clone()));

    view! {
        <footer class="footer">
            <p class="footer-name">{owner}</p>
            <a href=github_url target="_blank" rel="noopener noreferrer">"GitHub"</a>
        </footer>
    }
}
