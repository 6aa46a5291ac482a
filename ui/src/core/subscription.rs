//! Waitlist subscription state machine.
//!
//! ```text
//! Idle ──submit(valid email)──▶ Submitting ──dispatch done──▶ Succeeded (terminal)
//!   ▲                               │
//!   └──────── edit_email ◀── Failed ◀┘ (build failure, or dispatch failure
//!                                       when optimistic dispatch is off)
//! ```
//!
//! The flow itself is synchronous. [`submit`] drives one round trip: it
//! takes the [`WaitlistEntry`] returned by [`SubscriptionFlow::begin_submit`],
//! hands it to a [`WaitlistTransport`] via [`deliver`], and reports the
//! outcome back through [`SubscriptionFlow::finish_submit`].

use std::future::Future;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::locale::LanguageCode;
use super::session::SessionHandle;
use super::transport::{TransportError, WaitlistTransport};

/// WHATWG "valid e-mail address" grammar (what `<input type="email">` accepts).
static EMAIL_RE: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .ok()
});

pub fn is_valid_email(candidate: &str) -> bool {
    EMAIL_RE
        .as_ref()
        .map(|re| re.is_match(candidate))
        .unwrap_or(!candidate.is_empty())
}

/// JSON body posted to the collection endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WaitlistEntry {
    pub email: String,
    /// Client-local, human-readable time of submission.
    pub date: String,
    pub language: LanguageCode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscriptionStatus {
    Idle,
    Submitting,
    Succeeded,
    Failed { reason: String },
}

/// Why a submit request did not start a dispatch. Never shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejected {
    Empty,
    Malformed,
    InFlight,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionFlow {
    email: String,
    status: SubscriptionStatus,
    optimistic_dispatch: bool,
}

impl Default for SubscriptionFlow {
    fn default() -> Self {
        Self::new(true)
    }
}

impl SubscriptionFlow {
    pub fn new(optimistic_dispatch: bool) -> Self {
        Self {
            email: String::new(),
            status: SubscriptionStatus::Idle,
            optimistic_dispatch,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn status(&self) -> &SubscriptionStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubscriptionStatus::Submitting
    }

    pub fn is_succeeded(&self) -> bool {
        self.status == SubscriptionStatus::Succeeded
    }

    /// Replace the typed email. Only possible while idle; editing after a
    /// failure returns the flow to idle so the user can retry.
    pub fn edit_email(&mut self, value: &str) -> bool {
        match self.status {
            SubscriptionStatus::Idle => {}
            SubscriptionStatus::Failed { .. } => self.status = SubscriptionStatus::Idle,
            SubscriptionStatus::Submitting | SubscriptionStatus::Succeeded => return false,
        }
        self.email = value.to_string();
        true
    }

    /// Move `Idle → Submitting` and hand back the payload to dispatch.
    /// Rejected requests leave the state untouched.
    pub fn begin_submit(
        &mut self,
        language: LanguageCode,
        date: String,
    ) -> Result<WaitlistEntry, SubmitRejected> {
        let rejected = match self.status {
            SubscriptionStatus::Submitting => Some(SubmitRejected::InFlight),
            SubscriptionStatus::Succeeded => Some(SubmitRejected::Closed),
            SubscriptionStatus::Idle | SubscriptionStatus::Failed { .. } => None,
        };
        if let Some(reason) = rejected {
            debug!(?reason, "submit ignored");
            return Err(reason);
        }

        let email = self.email.trim();
        if email.is_empty() {
            debug!(reason = ?SubmitRejected::Empty, "submit ignored");
            return Err(SubmitRejected::Empty);
        }
        if !is_valid_email(email) {
            debug!(reason = ?SubmitRejected::Malformed, "submit ignored");
            return Err(SubmitRejected::Malformed);
        }

        let entry = WaitlistEntry {
            email: email.to_string(),
            date,
            language,
        };
        self.status = SubscriptionStatus::Submitting;
        Ok(entry)
    }

    /// Settle an in-flight submission. Ignored unless `Submitting`.
    pub fn finish_submit(&mut self, outcome: Result<(), TransportError>) {
        if !self.is_submitting() {
            return;
        }
        self.status = match outcome {
            Ok(()) => SubscriptionStatus::Succeeded,
            Err(TransportError::Dispatch(detail)) if self.optimistic_dispatch => {
                warn!(%detail, "treating undelivered waitlist entry as submitted");
                SubscriptionStatus::Succeeded
            }
            Err(err) => SubscriptionStatus::Failed {
                reason: err.to_string(),
            },
        };
    }
}

/// Dispatch one entry and log the result. Delivery is never confirmable.
pub async fn deliver<T: WaitlistTransport>(
    transport: &T,
    entry: &WaitlistEntry,
) -> Result<(), TransportError> {
    info!(language = %entry.language, "dispatching waitlist entry");
    let outcome = transport.send(entry).await;
    if let Err(err) = &outcome {
        warn!(%err, "waitlist dispatch failed");
    }
    outcome
}

/// Submit intent. The `Idle → Submitting` transition happens before this
/// returns, so a repeated submit is rejected even if the returned dispatch
/// has not been polled yet. Awaiting the dispatch sends the entry once and
/// settles the flow.
pub fn submit<S, T>(
    mut session: S,
    transport: T,
    date: String,
) -> Result<impl Future<Output = ()> + 'static, SubmitRejected>
where
    S: SessionHandle + 'static,
    T: WaitlistTransport + 'static,
{
    let entry = session.update(|s| s.begin_submit(date))?;
    Ok(async move {
        let outcome = deliver(&transport, &entry).await;
        session.update(|s| s.finish_submit(outcome));
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::LandingConfig;
    use crate::core::session::Session;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    const DATE: &str = "16.10.2026, 12:00:00";

    #[derive(Clone)]
    struct FakeTransport {
        calls: Rc<Cell<usize>>,
        bodies: Rc<RefCell<Vec<WaitlistEntry>>>,
        outcome: Result<(), TransportError>,
    }

    impl FakeTransport {
        fn answering(outcome: Result<(), TransportError>) -> Self {
            Self {
                calls: Rc::default(),
                bodies: Rc::default(),
                outcome,
            }
        }
    }

    fn session_with(email: &str, optimistic_dispatch: bool) -> Rc<RefCell<Session>> {
        let config = LandingConfig {
            optimistic_dispatch,
            ..LandingConfig::default()
        };
        let session = Rc::new(RefCell::new(Session::new(&config)));
        session.borrow_mut().edit_email(email);
        session
    }

    fn status(session: &Rc<RefCell<Session>>) -> SubscriptionStatus {
        session.borrow().subscription().status().clone()
    }

    impl WaitlistTransport for FakeTransport {
        async fn send(&self, entry: &WaitlistEntry) -> Result<(), TransportError> {
            self.calls.set(self.calls.get() + 1);
            self.bodies.borrow_mut().push(entry.clone());
            self.outcome.clone()
        }
    }

    fn flow_with(email: &str) -> SubscriptionFlow {
        let mut flow = SubscriptionFlow::default();
        flow.edit_email(email);
        flow
    }

    #[test]
    fn empty_email_is_a_noop() {
        let mut flow = SubscriptionFlow::default();
        let before = flow.clone();
        assert_eq!(
            flow.begin_submit(LanguageCode::En, DATE.into()),
            Err(SubmitRejected::Empty)
        );
        assert_eq!(flow, before);

        flow.edit_email("   ");
        assert_eq!(
            flow.begin_submit(LanguageCode::En, DATE.into()),
            Err(SubmitRejected::Empty)
        );
        assert_eq!(flow.status(), &SubscriptionStatus::Idle);
    }

    #[test]
    fn malformed_email_is_rejected() {
        for bad in ["plainaddress", "a@", "@example.com", "a b@example.com", "a@-x.com"] {
            let mut flow = flow_with(bad);
            assert_eq!(
                flow.begin_submit(LanguageCode::En, DATE.into()),
                Err(SubmitRejected::Malformed),
                "{bad}"
            );
            assert_eq!(flow.status(), &SubscriptionStatus::Idle);
        }
    }

    #[test]
    fn email_pattern_compiles() {
        assert!(EMAIL_RE.is_some(), "EMAIL_RE failed to compile; validation would be off");
    }

    #[test]
    fn accepts_html_valid_addresses() {
        for good in ["test@example.com", "a.b+c@sub.example.kz", "user@localhost"] {
            assert!(is_valid_email(good), "{good}");
        }
    }

    #[test]
    fn submit_moves_to_submitting_synchronously() {
        let mut flow = flow_with("  test@example.com ");
        let entry = flow.begin_submit(LanguageCode::Ru, DATE.into()).unwrap();
        assert_eq!(entry.email, "test@example.com");
        assert_eq!(entry.language, LanguageCode::Ru);
        assert_eq!(entry.date, DATE);
        assert!(flow.is_submitting());
    }

    #[test]
    fn repeated_submit_while_in_flight_is_ignored() {
        let mut flow = flow_with("test@example.com");
        assert!(flow.begin_submit(LanguageCode::En, DATE.into()).is_ok());
        assert_eq!(
            flow.begin_submit(LanguageCode::En, DATE.into()),
            Err(SubmitRejected::InFlight)
        );
        assert!(flow.is_submitting());
    }

    #[test]
    fn email_is_locked_while_submitting_and_after_success() {
        let mut flow = flow_with("test@example.com");
        flow.begin_submit(LanguageCode::En, DATE.into()).unwrap();
        assert!(!flow.edit_email("other@example.com"));
        assert_eq!(flow.email(), "test@example.com");

        flow.finish_submit(Ok(()));
        assert!(flow.is_succeeded());
        assert!(!flow.edit_email("other@example.com"));
        assert_eq!(
            flow.begin_submit(LanguageCode::En, DATE.into()),
            Err(SubmitRejected::Closed)
        );
    }

    #[test]
    fn dispatch_failure_is_optimistic_by_default() {
        let mut flow = flow_with("test@example.com");
        flow.begin_submit(LanguageCode::En, DATE.into()).unwrap();
        flow.finish_submit(Err(TransportError::Dispatch("offline".into())));
        assert!(flow.is_succeeded());
    }

    #[test]
    fn dispatch_failure_surfaces_when_not_optimistic() {
        let mut flow = SubscriptionFlow::new(false);
        flow.edit_email("test@example.com");
        flow.begin_submit(LanguageCode::En, DATE.into()).unwrap();
        flow.finish_submit(Err(TransportError::Dispatch("offline".into())));
        assert!(matches!(flow.status(), SubscriptionStatus::Failed { .. }));

        // Editing after a failure re-opens the form.
        assert!(flow.edit_email("test@example.com"));
        assert_eq!(flow.status(), &SubscriptionStatus::Idle);
        assert!(flow.begin_submit(LanguageCode::En, DATE.into()).is_ok());
    }

    #[test]
    fn build_failure_always_fails() {
        let mut flow = flow_with("test@example.com");
        flow.begin_submit(LanguageCode::En, DATE.into()).unwrap();
        flow.finish_submit(Err(TransportError::Build("bad url".into())));
        assert!(matches!(flow.status(), SubscriptionStatus::Failed { .. }));
    }

    #[test]
    fn stray_completion_is_ignored() {
        let mut flow = flow_with("test@example.com");
        flow.finish_submit(Ok(()));
        assert_eq!(flow.status(), &SubscriptionStatus::Idle);
    }

    #[tokio::test]
    async fn deliver_dispatches_exactly_once() {
        let transport = FakeTransport::answering(Ok(()));
        let mut flow = flow_with("test@example.com");

        let entry = flow.begin_submit(LanguageCode::En, DATE.into()).unwrap();
        assert!(flow.begin_submit(LanguageCode::En, DATE.into()).is_err());
        let outcome = deliver(&transport, &entry).await;
        flow.finish_submit(outcome);

        assert_eq!(transport.calls.get(), 1);
        assert_eq!(transport.bodies.borrow()[0], entry);
        assert!(flow.is_succeeded());
    }

    #[tokio::test]
    async fn deliver_passes_failures_through() {
        let transport = FakeTransport::answering(Err(TransportError::Dispatch("dns".into())));
        let entry = flow_with("test@example.com")
            .begin_submit(LanguageCode::Kk, DATE.into())
            .unwrap();
        let outcome = deliver(&transport, &entry).await;
        assert_eq!(outcome, Err(TransportError::Dispatch("dns".into())));
    }

    #[tokio::test]
    async fn submit_intent_dispatches_once_and_settles() {
        let transport = FakeTransport::answering(Ok(()));
        let session = session_with("test@example.com", true);

        let Ok(dispatch) = submit(Rc::clone(&session), transport.clone(), DATE.into()) else {
            panic!("valid email should be accepted");
        };
        assert_eq!(status(&session), SubscriptionStatus::Submitting);
        assert!(matches!(
            submit(Rc::clone(&session), transport.clone(), DATE.into()),
            Err(SubmitRejected::InFlight)
        ));

        dispatch.await;
        assert_eq!(transport.calls.get(), 1);
        assert_eq!(transport.bodies.borrow()[0].email, "test@example.com");
        assert_eq!(status(&session), SubscriptionStatus::Succeeded);
    }

    #[test]
    fn submit_intent_ignores_empty_email() {
        let transport = FakeTransport::answering(Ok(()));
        let session = session_with("", true);
        assert!(matches!(
            submit(Rc::clone(&session), transport.clone(), DATE.into()),
            Err(SubmitRejected::Empty)
        ));
        assert_eq!(status(&session), SubscriptionStatus::Idle);
        assert_eq!(transport.calls.get(), 0);
    }

    #[tokio::test]
    async fn submit_intent_surfaces_dispatch_failure_when_not_optimistic() {
        let transport = FakeTransport::answering(Err(TransportError::Dispatch("offline".into())));
        let session = session_with("test@example.com", false);
        let Ok(dispatch) = submit(Rc::clone(&session), transport, DATE.into()) else {
            panic!("valid email should be accepted");
        };
        dispatch.await;
        assert!(matches!(status(&session), SubscriptionStatus::Failed { .. }));
    }
}
