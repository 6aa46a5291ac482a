use dioxus::prelude::*;
use tracing::debug;

use crate::components::{AppNavbar, FeatureGrid, Hero, PhoneMockup};
use crate::core::config::LandingConfig;
use crate::core::platform::{self, PlatformShareHost};
use crate::core::session::Session;
use crate::core::share::{self, AckTimer};
use crate::core::subscription;
use crate::core::timing;
use crate::core::transport::HttpTransport;
use crate::i18n::TranslationBundle;

/// The whole landing page. Owns the session and the share reset timer;
/// child components only render the current frame and raise intents.
#[component]
pub fn Landing(config: LandingConfig) -> Element {
    let session = use_signal(|| Session::new(&config));
    let ack_timer = use_hook(AckTimer::new);

    let endpoint = config.waitlist_endpoint.clone();
    let on_submit = move |_: ()| {
        let transport = HttpTransport::new(endpoint.clone());
        match subscription::submit(session, transport, timing::local_timestamp()) {
            Ok(dispatch) => {
                spawn(dispatch);
            }
            Err(reason) => debug!(?reason, "waitlist form not submitted"),
        }
    };

    let share_url = config.share_url.clone();
    let on_share = move |_: ()| {
        let url = platform::page_url(&share_url);
        let timer = ack_timer.clone();
        spawn(async move {
            share::share(session, &timer, &PlatformShareHost, &url).await;
        });
    };

    let language = session.read().language();
    let footer = &TranslationBundle::for_language(language).footer_text;

    rsx! {
        div { class: "landing", lang: "{language}",
            // Background blobs
            div { class: "bg-blob bg-blob--1", aria_hidden: "true" }
            div { class: "bg-blob bg-blob--2", aria_hidden: "true" }
            div { class: "bg-blob bg-blob--3", aria_hidden: "true" }

            AppNavbar { session, on_share }

            main { class: "page page-landing",
                section { class: "hero",
                    Hero { session, on_submit }
                    div { class: "hero__mockup",
                        PhoneMockup { language }
                    }
                }
                FeatureGrid { language }
            }

            footer { class: "footer",
                p { "{footer}" }
            }
        }
    }
}
