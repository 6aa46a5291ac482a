//! Share action: native share sheet when the host has one, clipboard copy
//! with a short-lived "copied" acknowledgment otherwise.
//!
//! The provider is chosen per invocation by probing the host, never cached.
//! Only the clipboard path raises the acknowledgment; the native path leaves
//! [`ShareFeedback`] alone whether it succeeds, fails, or is cancelled.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use futures::future::{abortable, AbortHandle};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::session::{Session, SessionHandle};
use super::timing;

/// How long the "copied" acknowledgment stays raised.
pub const ACK_RESET_MS: u64 = 2_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    #[error("capability unavailable on this host")]
    Unavailable,
    #[error("share dismissed: {0}")]
    Cancelled(String),
    #[error("share failed: {0}")]
    Failed(String),
}

/// Host-supplied sharing capabilities.
#[allow(async_fn_in_trait)]
pub trait ShareHost {
    /// Capability probe, evaluated on every invocation.
    fn supports_native_share(&self) -> bool;
    async fn native_share(&self, payload: &SharePayload) -> Result<(), ShareError>;
    async fn copy_text(&self, text: &str) -> Result<(), ShareError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareProvider {
    Native,
    Clipboard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Native sheet completed.
    Shared,
    /// Native sheet failed or the user backed out.
    Dismissed,
    /// URL is on the clipboard; the acknowledgment should be raised.
    Copied,
    CopyFailed,
}

impl ShareProvider {
    pub fn probe<H: ShareHost>(host: &H) -> Self {
        if host.supports_native_share() {
            Self::Native
        } else {
            Self::Clipboard
        }
    }

    pub async fn run<H: ShareHost>(self, host: &H, payload: &SharePayload) -> ShareOutcome {
        match self {
            Self::Native => match host.native_share(payload).await {
                Ok(()) => ShareOutcome::Shared,
                Err(err) => {
                    info!(%err, "native share did not complete");
                    ShareOutcome::Dismissed
                }
            },
            Self::Clipboard => match host.copy_text(&payload.url).await {
                Ok(()) => ShareOutcome::Copied,
                Err(err) => {
                    warn!(%err, "clipboard copy failed");
                    ShareOutcome::CopyFailed
                }
            },
        }
    }
}

/// Probe `host` and share through whichever provider it offers.
pub async fn invoke<H: ShareHost>(host: &H, payload: &SharePayload) -> ShareOutcome {
    let provider = ShareProvider::probe(host);
    debug!(?provider, "share requested");
    provider.run(host, payload).await
}

/// Identifies one raise of the acknowledgment; only the latest may clear it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AckTicket(u64);

/// The "copied" acknowledgment flag bound to the share button.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareFeedback {
    acknowledged: bool,
    generation: u64,
}

impl ShareFeedback {
    pub fn acknowledged(&self) -> bool {
        self.acknowledged
    }

    pub fn acknowledge(&mut self) -> AckTicket {
        self.generation = self.generation.wrapping_add(1);
        self.acknowledged = true;
        AckTicket(self.generation)
    }

    /// Lower the flag if `ticket` is still the latest raise.
    pub fn expire(&mut self, ticket: AckTicket) -> bool {
        if ticket.0 != self.generation || !self.acknowledged {
            return false;
        }
        self.acknowledged = false;
        true
    }
}

/// Reset timer for the acknowledgment. Clones share one pending window, and
/// restarting cancels it first, so two resets can never race.
#[derive(Clone, Default)]
pub struct AckTimer {
    pending: Rc<Cell<Option<AbortHandle>>>,
}

impl AckTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh window. The returned future resolves to `true` once
    /// [`ACK_RESET_MS`] elapses, or `false` as soon as a later restart (or
    /// [`AckTimer::cancel`]) supersedes it.
    pub fn restart(&self) -> impl Future<Output = bool> + 'static {
        self.cancel();
        let (window, handle) = abortable(timing::sleep_ms(ACK_RESET_MS));
        self.pending.set(Some(handle));
        async move { window.await.is_ok() }
    }

    pub fn cancel(&self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

/// Share intent for `url`.
///
/// A clipboard copy raises the session's acknowledgment immediately and
/// lowers it when the window closes, unless a later share restarted it. The
/// future resolves after that window, so callers should spawn it.
pub async fn share<S, H>(mut session: S, timer: &AckTimer, host: &H, url: &str) -> ShareOutcome
where
    S: SessionHandle,
    H: ShareHost,
{
    let payload = session.inspect(|s| s.share_payload(url));
    let outcome = invoke(host, &payload).await;
    if outcome == ShareOutcome::Copied {
        let ticket = session.update(Session::acknowledge_share);
        if timer.restart().await {
            session.update(|s| s.expire_share(ticket));
        }
    }
    outcome
}
