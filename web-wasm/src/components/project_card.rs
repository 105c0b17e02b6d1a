//! プロジェクトカード

use leptos::html;
use leptos::prelude::*;
use portfolio_common::theme::card_tags;
use portfolio_common::ProjectRecord;

use crate::app::use_app_state;
use crate::dom::{click_origin, use_in_view};

#[component]
pub fn ProjectCard(record: ProjectRecord) -> impl IntoView {
    let selection = use_app_state().selection;
    let node_ref = NodeRef::<html::Div>::new();
    let in_view = use_in_view(node_ref, 0.1);
    let (image_failed, set_image_failed) = signal(false);

    let tags = card_tags(&record.tags).to_vec();
    let image = record.image.clone();
    let github = record.github.clone();
    let webapp = record.webapp.clone();
    let title = record.title.clone();
    let description = record.description.clone();
    let category = record.category.label().to_string();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        let origin = click_origin(&ev);
        selection.update(|s| s.on_card_click(origin, &record));
    };

    let image_view = move || match image.clone() {
        Some(src) if !image_failed.get() => view! {
            <img
                class="project-image"
                src=src
                alt=""
                loading="lazy"
                on:error=move |_| set_image_failed.set(true)
            />
        }
        .into_any(),
        _ => view! { <div class="project-image placeholder">"No Image"</div> }.into_any(),
    };

    view! {
        <div
            node_ref=node_ref
            class="project-card fade-in"
            class:visible=move || in_view.get()
            on:click=on_click
        >
            {image_view}
            <div class="project-body">
                <span class="project-category">{category}</span>
                <h3 class="project-title">{title}</h3>
                <p class="project-desc">{description}</p>
                <div class="project-tags">
                    {tags.into_iter().map(|tag| view! { <span class="tag">{tag}</span> }).collect_view()}
                </div>
                <div class="project-links" on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()>
                    {github.map(|href| view! {
                        <a href=href target="_blank" rel="noopener noreferrer" class="btn btn-secondary btn-small">
                            "Code"
                        </a>
                    })}
                    {webapp.map(|href| view! {
                        <a href=href target="_blank" rel="noopener noreferrer" class="btn btn-primary btn-small">
                            "Live Demo"
                        </a>
                    })}
                </div>
            </div>
        </div>
    }
}
