//! Session-scoped context tying the state machines together.
//!
//! One [`Session`] exists per page session. The view layer reads a [`Frame`]
//! each render and feeds user intents (`select_language`, `edit_email`,
//! submit, share) back through the methods below.
//!
//! Async intents ([`crate::core::subscription::submit`],
//! [`crate::core::share::share`]) outlive a single borrow of the session, so
//! they go through a [`SessionHandle`] instead of `&mut Session`.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use tracing::debug;

use super::catalog::{mock_content, MockContent};
use super::config::LandingConfig;
use super::locale::{LanguageCode, LocaleSelector};
use super::share::{AckTicket, ShareFeedback, SharePayload};
use super::subscription::{SubmitRejected, SubscriptionFlow, WaitlistEntry};
use super::transport::TransportError;
use crate::i18n::TranslationBundle;

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    locale: LocaleSelector,
    subscription: SubscriptionFlow,
    share: ShareFeedback,
    share_title: String,
}

/// Everything the view needs for one render. Bundle and mock content are
/// both derived from `language`, so they always agree.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub language: LanguageCode,
    pub bundle: &'static TranslationBundle,
    pub content: &'static MockContent,
    pub subscription: &'a SubscriptionFlow,
    pub share_acknowledged: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&LandingConfig::default())
    }
}

impl Session {
    pub fn new(config: &LandingConfig) -> Self {
        Self {
            locale: LocaleSelector::new(),
            subscription: SubscriptionFlow::new(config.optimistic_dispatch),
            share: ShareFeedback::default(),
            share_title: config.share_title.clone(),
        }
    }

    pub fn language(&self) -> LanguageCode {
        self.locale.current()
    }

    pub fn frame(&self) -> Frame<'_> {
        let language = self.locale.current();
        Frame {
            language,
            bundle: TranslationBundle::for_language(language),
            content: mock_content(language),
            subscription: &self.subscription,
            share_acknowledged: self.share.acknowledged(),
        }
    }

    pub fn subscription(&self) -> &SubscriptionFlow {
        &self.subscription
    }

    pub fn select_language(&mut self, code: &str) -> bool {
        self.locale.select(code)
    }

    pub fn edit_email(&mut self, value: &str) -> bool {
        self.subscription.edit_email(value)
    }

    /// Start a submission stamped with `date` in the active language.
    pub fn begin_submit(&mut self, date: String) -> Result<WaitlistEntry, SubmitRejected> {
        let language = self.locale.current();
        self.subscription.begin_submit(language, date)
    }

    pub fn finish_submit(&mut self, outcome: Result<(), TransportError>) {
        self.subscription.finish_submit(outcome);
        debug!(status = ?self.subscription.status(), "submission settled");
    }

    /// Payload for the share action: configured title, localized subtitle,
    /// and the page `url`.
    pub fn share_payload(&self, url: &str) -> SharePayload {
        SharePayload {
            title: self.share_title.clone(),
            text: self.frame().bundle.hero_subtitle.clone(),
            url: url.to_string(),
        }
    }

    pub fn acknowledge_share(&mut self) -> AckTicket {
        self.share.acknowledge()
    }

    pub fn expire_share(&mut self, ticket: AckTicket) -> bool {
        self.share.expire(ticket)
    }
}

/// Shared access to a [`Session`] that can be carried across await points.
/// Each call borrows the session only for the duration of `f`.
pub trait SessionHandle {
    fn inspect<R>(&self, f: impl FnOnce(&Session) -> R) -> R;
    fn update<R>(&mut self, f: impl FnOnce(&mut Session) -> R) -> R;
}

impl SessionHandle for Signal<Session> {
    fn inspect<R>(&self, f: impl FnOnce(&Session) -> R) -> R {
        f(&self.peek())
    }

    fn update<R>(&mut self, f: impl FnOnce(&mut Session) -> R) -> R {
        f(&mut self.write())
    }
}

/// Headless handle, for hosts without a reactive runtime.
impl SessionHandle for Rc<RefCell<Session>> {
    fn inspect<R>(&self, f: impl FnOnce(&Session) -> R) -> R {
        f(&self.borrow())
    }

    fn update<R>(&mut self, f: impl FnOnce(&mut Session) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}
