use dioxus::prelude::*;

use crate::core::catalog::{mock_content, ListingRecord};
use crate::core::locale::LanguageCode;
use crate::i18n::TranslationBundle;

/// Phone frame with a fake discovery feed for `language`.
#[component]
pub fn PhoneMockup(language: LanguageCode) -> Element {
    let content = mock_content(language);
    let bundle = TranslationBundle::for_language(language);
    let badge = &bundle.mockup_badge;
    let search = &bundle.mockup_search;
    let section_title = &bundle.mockup_section_title;

    rsx! {
        div { class: "phone-frame glass",
            div { class: "phone-screen",
                div { class: "mockup-app",
                    div { class: "mockup-badge", "{badge}" }
                    header { class: "mockup-header",
                        div { class: "mockup-logo",
                            span { class: "mockup-logo__icon", aria_hidden: "true", "⌕" }
                            span { "Lupa" }
                        }
                        div { class: "mockup-search", "{search}" }
                    }
                    main { class: "mockup-main",
                        div { class: "mockup-categories",
                            { content.categories.iter().enumerate().map(|(i, cat)| {
                                let class = if i == 0 { "mockup-chip mockup-chip--active" } else { "mockup-chip" };
                                rsx! { span { key: "{i}", class: "{class}", "{cat}" } }
                            })}
                        }
                        div { class: "mockup-section-title", "{section_title}" }
                        div { class: "mockup-feed",
                            { content.listings.iter().enumerate().map(|(i, record)| rsx! {
                                ListingCard { key: "{language}-{i}", record: *record }
                            })}
                        }
                    }
                    nav { class: "mockup-nav", aria_hidden: "true",
                        span { "◎" }
                        span { "⊕" }
                        span { "✉" }
                        span { "◯" }
                    }
                }
            }
        }
    }
}

/// One feed row. A failed image is hidden locally; the record is untouched.
#[component]
fn ListingCard(record: ListingRecord) -> Element {
    let mut image_failed = use_signal(|| false);

    rsx! {
        div { class: "mockup-row",
            div { class: "mockup-row__img-wrapper",
                if !image_failed() {
                    img {
                        class: "mockup-row__img",
                        src: "{record.image_url}",
                        alt: "",
                        onerror: move |_| image_failed.set(true),
                    }
                }
                div { class: "mockup-row__shimmer" }
            }
            div { class: "mockup-row__info",
                h4 { "{record.title}" }
                div { class: "mockup-row__meta",
                    span { class: "mockup-row__meta-item", "🗓 {record.time}" }
                    span { class: "mockup-row__meta-item", "📍 {record.location}" }
                }
                div { class: "mockup-row__price", "{record.price}" }
            }
        }
    }
}
