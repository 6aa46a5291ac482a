use dioxus::prelude::*;

use crate::core::locale::LanguageCode;
use crate::i18n::TranslationBundle;

#[component]
pub fn FeatureGrid(language: LanguageCode) -> Element {
    let bundle = TranslationBundle::for_language(language);
    let heading = &bundle.features_title;
    let cards = [
        ("⌕", &bundle.feature_1_title, &bundle.feature_1_desc),
        ("▦", &bundle.feature_2_title, &bundle.feature_2_desc),
        ("⚡", &bundle.feature_3_title, &bundle.feature_3_desc),
    ];

    rsx! {
        section { class: "features",
            h2 { "{heading}" }
            div { class: "features__grid",
                { cards.into_iter().enumerate().map(|(i, (icon, title, desc))| rsx! {
                    div { key: "{i}", class: "feature-card glass",
                        div { class: "feature-card__icon", aria_hidden: "true", "{icon}" }
                        h3 { "{title}" }
                        p { "{desc}" }
                    }
                })}
            }
        }
    }
}
