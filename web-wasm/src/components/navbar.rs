//! ナビゲーションバー

use leptos::prelude::*;
use portfolio_common::theme::NAV_SECTIONS;

use crate::app::use_app_state;

#[component]
pub fn Navbar() -> impl IntoView {
    let site = use_app_state().site;
    let (owner, github_url) = site.with_value(|s| (s.owner.clone(), s.github_url.clone()));
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <nav class="navbar">
            <a href="#" class="nav-logo">{owner}</a>

            <button
                class="nav-menu-toggle"
                aria-label="Toggle menu"
                on:click=move |_| set_menu_open.update(|open| *open = !*open)
            >
                {move || if menu_open.get() { "✕" } else { "☰" }}
            </button>

            <ul class="nav-links" class:open=move || menu_open.get()>
                {NAV_SECTIONS
                    .iter()
                    .map(|(anchor, label)| {
                        view! {
                            <li>
                                <a
                                    href=format!("#{}", anchor)
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    {*label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>

            <a
                href=github_url
                target="_blank"
                rel="noopener noreferrer"
                class="btn btn-secondary nav-github"
            >
                "GitHub Profile"
            </a>
        </nav>
    }
}
