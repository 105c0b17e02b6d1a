//! ヒーローセクション

use leptos::prelude::*;

use crate::app::use_app_state;

#[component]
pub fn Hero() -> impl IntoView {
    let site = use_app_state().site.get_value();

    view! {
        <section id="hero" class="hero">
            <h1 class="hero-title">"Hi, I am " <span class="accent">{site.owner}</span></h1>
            <h2 class="hero-role">{site.role}</h2>
            <p class="hero-tagline">{site.tagline}</p>
            <div class="hero-actions">
                {site.resume_url.map(|url| {
                    view! {
                        <a href=url target="_blank" rel="noopener noreferrer" class="btn btn-primary">
                            "Check Resume"
                        </a>
                    }
                })}
                <a href="#contact" class="btn btn-secondary">"Contact Me"</a>
            </div>
        </section>
    }
}
