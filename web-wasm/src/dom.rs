//! DOM操作ヘルパー
//!
//! メタタグ更新、スクロール、クリック元判定、表示領域の監視

use leptos::html;
use leptos::prelude::*;
use portfolio_common::{ClickOrigin, ResolvedMeta};
use wasm_bindgen::prelude::*;
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, MouseEvent,
    ScrollBehavior, ScrollToOptions,
};

/// ドキュメントのタイトルと description / keywords メタタグを上書きする
pub fn apply_document_meta(meta: &ResolvedMeta) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    document.set_title(&meta.title);

    for (name, content) in [("description", &meta.description), ("keywords", &meta.keywords)] {
        if let Ok(Some(tag)) = document.query_selector(&format!("meta[name=\"{}\"]", name)) {
            let _ = tag.set_attribute("content", content);
        }
    }
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn smooth_scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let opts = ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&opts);
    }
}

/// クリックがカード内のリンクから発生したか判定する
pub fn click_origin(ev: &MouseEvent) -> ClickOrigin {
    let from_link = ev
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest("a").ok().flatten())
        .is_some();

    if from_link {
        ClickOrigin::NestedLink
    } else {
        ClickOrigin::Card
    }
}

type ObserverSlot = Option<(IntersectionObserver, Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>)>;

/// 要素が閾値以上見えたら `true` になるシグナル
///
/// 一度表示されたら監視を解除する。アンマウント時も解除する。
pub fn use_in_view(node_ref: NodeRef<html::Div>, threshold: f64) -> ReadSignal<bool> {
    let (visible, set_visible) = signal(false);
    let slot = StoredValue::new_local(None as ObserverSlot);

    Effect::new(move |_| {
        let Some(el) = node_ref.get() else {
            return;
        };
        if slot.with_value(|s| s.is_some()) {
            return;
        }

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let hit = entries
                    .iter()
                    .any(|entry| entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting());
                if hit {
                    set_visible.try_set(true);
                    observer.disconnect();
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => {
                observer.observe(&el);
                slot.set_value(Some((observer, callback)));
            }
            Err(e) => {
                tracing::warn!(error = ?e, "IntersectionObserver unavailable");
                set_visible.set(true);
            }
        }
    });

    on_cleanup(move || {
        slot.try_update_value(|s| {
            if let Some((observer, _)) = s.take() {
                observer.disconnect();
            }
        });
    });

    visible
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    wasm_bindgen_test_configure!(run_in_browser);

    /// カード要素にクリックを仕掛け、判定結果を返す
    fn click_and_capture(card: &Element, clicked: &Element) -> Option<ClickOrigin> {
        let captured = Rc::new(Cell::new(None));
        let sink = captured.clone();
        let listener = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
            sink.set(Some(click_origin(&ev)));
        });
        card.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
            .unwrap();

        clicked.dyn_ref::<HtmlElement>().unwrap().click();
        captured.get()
    }

    fn card_with_link() -> (Element, Element, Element) {
        let document = web_sys::window().unwrap().document().unwrap();
        let card = document.create_element("div").unwrap();
        let title = document.create_element("h3").unwrap();
        let link = document.create_element("a").unwrap();
        link.set_attribute("href", "#").unwrap();
        card.append_child(&title).unwrap();
        card.append_child(&link).unwrap();
        document.body().unwrap().append_child(&card).unwrap();
        (card, title, link)
    }

    #[wasm_bindgen_test]
    fn test_click_on_card_body_selects() {
        let (card, title, _) = card_with_link();
        assert_eq!(click_and_capture(&card, &title), Some(ClickOrigin::Card));
    }

    #[wasm_bindgen_test]
    fn test_click_on_nested_link_is_ignored() {
        let (card, _, link) = card_with_link();
        assert_eq!(click_and_capture(&card, &link), Some(ClickOrigin::NestedLink));
    }

    #[wasm_bindgen_test]
    fn test_scroll_y_at_top() {
        assert!(scroll_y() >= 0.0);
    }
}
