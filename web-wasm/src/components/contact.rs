//! 問い合わせセクション
//!
//! 説明文はコンテンツから読み込む。読込に失敗した場合は "Loading..." のまま。

use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use portfolio_common::contact::{StatusMessage, MESSAGE_DISMISS_MS};
use portfolio_common::{
    load_contact, submit_contact, ContactContent, ContactField, ContactForm, ValidationErrors,
};

use crate::api::content::HttpSource;
use crate::api::emailjs::EmailJsRelay;
use crate::app::use_app_state;

#[component]
pub fn Contact() -> impl IntoView {
    let site = use_app_state().site;
    let contact_file = site.with_value(|s| s.content.contact_file.clone());

    let content = RwSignal::new(None::<ContactContent>);
    let form = RwSignal::new(ContactForm::default());
    let errors = RwSignal::new(ValidationErrors::default());
    let submitting = RwSignal::new(false);
    let status = RwSignal::new(None::<StatusMessage>);
    let dismiss_timer = StoredValue::new_local(None::<Timeout>);

    spawn_local(async move {
        match load_contact(&HttpSource, &contact_file).await {
            Ok(loaded) => {
                content.try_set(Some(loaded));
            }
            Err(e) => tracing::error!(error = %e, "failed to load contact content"),
        }
    });

    on_cleanup(move || {
        dismiss_timer.try_update_value(|t| t.take());
    });

    // バナーを表示し、一定時間後に消す（前のタイマーは破棄）
    let show_status = move |message: StatusMessage| {
        status.try_set(Some(message));
        let timer = Timeout::new(MESSAGE_DISMISS_MS, move || {
            status.try_set(None);
        });
        dismiss_timer.try_update_value(|t| *t = Some(timer));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let snapshot = form.get_untracked();
        if let Err(e) = snapshot.validate() {
            errors.set(e);
            return;
        }
        errors.set(ValidationErrors::default());
        submitting.set(true);

        let config = site.with_value(|s| s.email.clone());
        spawn_local(async move {
            let relay = EmailJsRelay::new(&config);
            let outcome = submit_contact(&relay, &config, &snapshot).await;

            submitting.try_set(false);
            if outcome.clears_form() {
                form.try_set(ContactForm::default());
            }
            if let Some(message) = outcome.status_message() {
                show_status(message);
            }
        });
    };

    view! {
        <section id="contact" class="section contact">
            <h2 class="section-title">"Contact"</h2>
            {move || match content.get() {
                Some(c) => view! { <p class="section-desc">{c.description}</p> }.into_any(),
                None => view! { <p class="section-desc">"Loading..."</p> }.into_any(),
            }}

            <form class="contact-form" novalidate=true on:submit=on_submit>
                {ContactField::ALL
                    .into_iter()
                    .map(|field| view! { <FormField field=field form=form errors=errors /> })
                    .collect_view()}

                <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Sending..." } else { "Send" }}
                </button>
            </form>

            {move || {
                status
                    .get()
                    .map(|message| {
                        view! {
                            <div class=format!("status-banner {}", message.kind.as_str())>
                                {message.text}
                            </div>
                        }
                    })
            }}
        </section>
    }
}

#[component]
fn FormField(
    field: ContactField,
    form: RwSignal<ContactForm>,
    errors: RwSignal<ValidationErrors>,
) -> impl IntoView {
    let value = move || form.with(|f| f.value(field).to_string());
    let on_input = move |ev: leptos::ev::Event| form.update(|f| f.set(field, event_target_value(&ev)));
    let error_text = move || errors.with(|e| e.get(field).map(|err| err.to_string()));

    let input = match field {
        ContactField::Message => view! {
            <textarea
                name=field.name()
                rows="5"
                placeholder=field.label()
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any(),
        ContactField::Email => view! {
            <input type="email" name=field.name() placeholder=field.label() prop:value=value on:input=on_input />
        }
        .into_any(),
        _ => view! {
            <input type="text" name=field.name() placeholder=field.label() prop:value=value on:input=on_input />
        }
        .into_any(),
    };

    view! {
        <div class="form-group" class:invalid=move || error_text().is_some()>
            {input}
            {move || error_text().map(|text| view! { <span class="field-error">{text}</span> })}
        </div>
    }
}
