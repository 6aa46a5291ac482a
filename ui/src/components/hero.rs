use dioxus::prelude::*;

use crate::core::session::Session;
use crate::core::subscription::SubscriptionStatus;

/// Headline plus the waitlist form, or the confirmation once subscribed.
#[component]
pub fn Hero(session: Signal<Session>, on_submit: EventHandler<()>) -> Element {
    let mut session = session;
    let (bundle, email, status) = {
        let state = session.read();
        let frame = state.frame();
        (
            frame.bundle,
            frame.subscription.email().to_string(),
            frame.subscription.status().clone(),
        )
    };

    let submitting = status == SubscriptionStatus::Submitting;
    let succeeded = status == SubscriptionStatus::Succeeded;
    let failed = matches!(status, SubscriptionStatus::Failed { .. });

    let title = &bundle.hero_title;
    let subtitle = &bundle.hero_subtitle;
    let placeholder = &bundle.email_placeholder;
    let cta = if submitting {
        &bundle.submitting_label
    } else {
        &bundle.join_waitlist
    };
    let success = &bundle.waitlist_success;
    let failure = &bundle.waitlist_failed;

    rsx! {
        div { class: "hero__content",
            h1 { class: "hero__title gradient-text", "{title}" }
            p { class: "hero__subtitle", "{subtitle}" }

            if succeeded {
                div { class: "waitlist-success", role: "status",
                    span { class: "waitlist-success__icon", aria_hidden: "true", "✓" }
                    span { "{success}" }
                }
            } else {
                form {
                    class: "waitlist-form glass",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        on_submit.call(());
                    },
                    span { class: "waitlist-form__icon", aria_hidden: "true", "✉" }
                    input {
                        r#type: "email",
                        name: "email",
                        autocomplete: "email",
                        placeholder: "{placeholder}",
                        value: "{email}",
                        required: true,
                        disabled: submitting,
                        oninput: move |evt: FormEvent| {
                            session.write().edit_email(&evt.value());
                        },
                    }
                    button {
                        r#type: "submit",
                        class: "button button--primary",
                        disabled: submitting,
                        "{cta}"
                        span { class: "button__chevron", aria_hidden: "true", "›" }
                    }
                }
                if failed {
                    p { class: "waitlist-form__error", role: "alert", "{failure}" }
                }
            }
        }
    }
}
