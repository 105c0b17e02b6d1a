//! スキルセクション

use leptos::prelude::*;

use crate::app::use_app_state;

#[component]
pub fn Skills() -> impl IntoView {
    let groups = use_app_state().site.with_value(|s| s.skills.clone());

    view! {
        <section id="skills" class="section skills">
            <h2 class="section-title">"Skills"</h2>
            <div class="skill-groups">
                {groups
                    .into_iter()
                    .map(|group| {
                        view! {
                            <div class="skill-group">
                                <h3>{group.title}</h3>
                                <ul class="skill-items">
                                    {group
                                        .items
                                        .into_iter()
                                        .map(|item| view! { <li class="skill-item">{item}</li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
