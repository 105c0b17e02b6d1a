//! ページメタ情報
//!
//! マウント時にタイトルと description / keywords を上書きする。未指定の項目はサイト既定値。

use leptos::prelude::*;
use portfolio_common::PageMeta;

use crate::app::use_app_state;
use crate::dom::apply_document_meta;

#[component]
pub fn Seo(#[prop(into)] meta: PageMeta) -> impl IntoView {
    let site = use_app_state().site;
    let resolved = site.with_value(|s| meta.resolve(s));

    Effect::new(move |_| {
        tracing::debug!(title = %resolved.title, "apply page meta");
        apply_document_meta(&resolved);
    });
}
