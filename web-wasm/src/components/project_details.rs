//! プロジェクト詳細モーダル
//!
//! 選択中のプロジェクトがあるときだけ表示する。背景か閉じるボタンで非選択に戻る。

use leptos::prelude::*;
use portfolio_common::markdown::render_html;
use portfolio_common::{ProjectRecord, SelectionState};

use crate::app::use_app_state;

#[component]
pub fn ProjectDetails() -> impl IntoView {
    let selection = use_app_state().selection;
    let dismiss = move || selection.set(SelectionState::dismiss());

    let selected = Memo::new(move |_| {
        selection.with(|s| if s.active { s.project.clone() } else { None })
    });

    move || {
        selected.get().map(|record| {
            view! {
                <div class="modal-backdrop" on:click=move |_| dismiss()>
                    <div class="modal" on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()>
                        <button class="modal-close" aria-label="Close" on:click=move |_| dismiss()>
                            "✕"
                        </button>
                        <DetailsBody record=record />
                    </div>
                </div>
            }
        })
    }
}

#[component]
fn DetailsBody(record: ProjectRecord) -> impl IntoView {
    let body_html = render_html(&record.body);

    view! {
        {record.image.map(|src| view! { <img class="modal-image" src=src alt="" /> })}
        <h2 class="modal-title">{record.title}</h2>
        <span class="project-category">{record.category.label().to_string()}</span>
        <div class="project-tags">
            {record.tags.into_iter().map(|tag| view! { <span class="tag">{tag}</span> }).collect_view()}
        </div>
        <p class="modal-desc">{record.description}</p>
        // render_html は本文中の生HTMLをエスケープして出力する
        <div class="modal-body markdown" inner_html=body_html></div>
        <div class="project-links">
            {record.github.map(|href| view! {
                <a href=href target="_blank" rel="noopener noreferrer" class="btn btn-secondary">
                    "View Code"
                </a>
            })}
            {record.webapp.map(|href| view! {
                <a href=href target="_blank" rel="noopener noreferrer" class="btn btn-primary">
                    "View Live App"
                </a>
            })}
        </div>
    }
}
