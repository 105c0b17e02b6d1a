//! 自己紹介セクション

use leptos::prelude::*;

use crate::app::use_app_state;

#[component]
pub fn About() -> impl IntoView {
    let bio = use_app_state().site.with_value(|s| s.bio.clone());

    view! {
        <section id="about" class="section about">
            <h2 class="section-title">"About"</h2>
            <p class="section-desc">{bio}</p>
        </section>
    }
}
