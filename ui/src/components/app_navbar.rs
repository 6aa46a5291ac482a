use dioxus::prelude::*;

use crate::core::locale::LanguageCode;
use crate::core::session::Session;

/// Top bar with the brand, the share button, and the language switcher.
///
/// The share button swaps to its "copied" state while the session's share
/// acknowledgment is raised. Switching language writes straight into the
/// session, so every component reading the frame re-renders in one pass.
#[component]
pub fn AppNavbar(session: Signal<Session>, on_share: EventHandler<()>) -> Element {
    let mut session = session;
    let (language, bundle, acknowledged) = {
        let state = session.read();
        let frame = state.frame();
        (frame.language, frame.bundle, frame.share_acknowledged)
    };

    let share_label = if acknowledged {
        &bundle.share_copied
    } else {
        &bundle.share_link
    };
    let share_class = if acknowledged {
        "share-button glass share-button--copied"
    } else {
        "share-button glass"
    };
    let share_icon = if acknowledged { "✓" } else { "↗" };
    let locale_label = &bundle.language_label;

    rsx! {
        header {
            id: "navbar",
            class: "navbar glass",
            div { class: "navbar__inner",
                // Brand
                div { class: "navbar__brand",
                    span { class: "navbar__brand-spark", aria_hidden: "true", "⌕" }
                    span { class: "navbar__brand-mark", "Lupa" }
                }

                div { class: "navbar__actions",
                    button {
                        r#type: "button",
                        class: "{share_class}",
                        onclick: move |_| on_share.call(()),
                        span { class: "share-button__icon", aria_hidden: "true", "{share_icon}" }
                        span { "{share_label}" }
                    }

                    // Locale switcher
                    div {
                        class: "navbar__locale",
                        role: "group",
                        aria_label: "{locale_label}",
                        span { class: "navbar__locale-icon", aria_hidden: "true", "🌐" }
                        { LanguageCode::ALL.iter().map(|&code| {
                            let class = if code == language {
                                "locale-button locale-button--active"
                            } else {
                                "locale-button"
                            };
                            let pressed = code == language;
                            let label = code.label();
                            rsx! {
                                button {
                                    key: "{code}",
                                    r#type: "button",
                                    class: "{class}",
                                    aria_pressed: "{pressed}",
                                    onclick: move |_| {
                                        session.write().select_language(code.as_str());
                                    },
                                    "{label}"
                                }
                            }
                        })}
                    }
                }
            }
        }
    }
}
