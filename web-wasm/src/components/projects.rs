//! プロジェクトセクション
//!
//! 起動時に一度だけカタログを読み込み、カテゴリと検索語で絞り込んだカードを表示する

use leptos::prelude::*;
use leptos::task::spawn_local;
use portfolio_common::seo::projects_page_meta;
use portfolio_common::{load_catalog, Catalog, CatalogView, CategoryFilter};

use super::project_card::ProjectCard;
use super::project_search::ProjectSearch;
use super::seo::Seo;
use crate::api::content::HttpSource;
use crate::app::use_app_state;

#[component]
pub fn Projects() -> impl IntoView {
    let site = use_app_state().site;
    let projects_dir = site.with_value(|s| s.content.projects_dir.clone());
    let page_meta = site.with_value(projects_page_meta);

    let catalog = RwSignal::new(Catalog::default());
    let active_category = RwSignal::new(CategoryFilter::All);
    let search_term = RwSignal::new(String::new());

    spawn_local(async move {
        match load_catalog(&HttpSource, &projects_dir).await {
            Ok(loaded) => {
                // アンマウント後に届いた結果は捨てる
                catalog.try_update(|c| c.replace(loaded));
            }
            Err(e) => tracing::error!(error = %e, "failed to load projects"),
        }
    });

    let categories = Memo::new(move |_| catalog.with(Catalog::categories));

    let visible = Memo::new(move |_| {
        let view = CatalogView {
            active_category: active_category.get(),
            search_term: search_term.get(),
        };
        catalog.with(|c| c.visible(&view).into_iter().cloned().collect::<Vec<_>>())
    });

    view! {
        <section id="projects" class="section projects">
            <Seo meta=page_meta />
            <h2 class="section-title">"Projects"</h2>
            <p class="section-desc">
                "A selection of things I have built, from web apps to data pipelines."
            </p>

            <ProjectSearch search_term=search_term />

            <div class="category-filters">
                <For
                    each=move || categories.get()
                    key=|category| category.clone()
                    children=move |category| {
                        let label = category.label().to_string();
                        let chip = category.clone();
                        view! {
                            <button
                                class="category-chip"
                                class:active=move || active_category.with(|a| *a == category)
                                on:click=move |_| active_category.set(chip.clone())
                            >
                                {label}
                            </button>
                        }
                    }
                />
            </div>

            <div class="project-grid">
                <For
                    each=move || visible.get()
                    key=|record| record.id.clone()
                    children=move |record| view! { <ProjectCard record=record /> }
                />
            </div>
        </section>
    }
}
