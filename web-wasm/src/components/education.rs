//! 学歴セクション

use leptos::html;
use leptos::prelude::*;
use portfolio_common::config::EducationEntry;

use crate::app::use_app_state;
use crate::dom::use_in_view;

#[component]
pub fn Education() -> impl IntoView {
    let entries = use_app_state().site.with_value(|s| s.education.clone());

    view! {
        <section id="education" class="section education">
            <h2 class="section-title">"Education"</h2>
            <div class="timeline">
                {entries
                    .into_iter()
                    .map(|entry| view! { <EducationCard entry=entry /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn EducationCard(entry: EducationEntry) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let in_view = use_in_view(node_ref, 0.1);

    view! {
        <div node_ref=node_ref class="education-card fade-in" class:visible=move || in_view.get()>
            <h3>{entry.school}</h3>
            <p class="education-degree">{entry.degree}</p>
            <p class="education-period">{entry.period}</p>
            <p class="education-desc">{entry.description}</p>
        </div>
    }
}
