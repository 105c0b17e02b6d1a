//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use portfolio_common::{SelectionState, SiteConfig, Theme};

use crate::components::{
    about::About, contact::Contact, deferred::Deferred, education::Education, footer::Footer,
    hero::Hero, navbar::Navbar, project_details::ProjectDetails, projects::Projects,
    scroll_to_top::ScrollToTop, skills::Skills, theme_toggle::ThemeToggle,
};

const SITE_JSON: &str = include_str!("../../content/site.json");

/// シェル全体で共有する状態
///
/// テーマの書き込みは ThemeToggle のみ、選択状態の書き込みはカードとモーダルのみ。
#[derive(Clone, Copy)]
pub struct AppState {
    pub theme: RwSignal<Theme>,
    pub selection: RwSignal<SelectionState>,
    pub site: StoredValue<SiteConfig>,
}

impl AppState {
    pub fn new(site: SiteConfig) -> Self {
        Self {
            theme: RwSignal::new(Theme::default()),
            selection: RwSignal::new(SelectionState::default()),
            site: StoredValue::new(site),
        }
    }
}

pub fn use_app_state() -> AppState {
    expect_context::<AppState>()
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new(SiteConfig::from_json_or_default(SITE_JSON));
    provide_context(state);

    let theme = state.theme;

    view! {
        <ErrorBoundary fallback=|errors| {
            view! {
                <div class="app-error">
                    <h2>"Something went wrong."</h2>
                    <ul>
                        {move || {
                            errors
                                .get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect_view()
                        }}
                    </ul>
                </div>
            }
        }>
            <div
                class=move || format!("app {}", theme.get().class_name())
                style=move || theme.get().palette().css_variables()
            >
                <Navbar />
                <Hero />
                <Deferred>
                    <About />
                    <Skills />
                    <Projects />
                    <Education />
                    <Contact />
                    <Footer />
                    <ProjectDetails />
                </Deferred>
                <ThemeToggle />
                <ScrollToTop />
            </div>
        </ErrorBoundary>
    }
}
