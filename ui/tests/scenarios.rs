//! End-to-end flows through the session core, with fake hosts standing in
//! for the network and the browser.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use ui::core::catalog::mock_content;
use ui::core::config::LandingConfig;
use ui::core::locale::LanguageCode;
use ui::core::session::Session;
use ui::core::share::{self, AckTimer, ShareError, ShareHost, ShareOutcome, SharePayload};
use ui::core::subscription::{self, SubmitRejected, SubscriptionStatus, WaitlistEntry};
use ui::core::transport::{TransportError, WaitlistTransport};
use ui::i18n::TranslationBundle;

const DATE: &str = "16.10.2026, 09:30:00";

#[derive(Clone, Default)]
struct RecordingTransport {
    bodies: Rc<RefCell<Vec<String>>>,
    fail_with: Option<TransportError>,
}

impl WaitlistTransport for RecordingTransport {
    async fn send(&self, entry: &WaitlistEntry) -> Result<(), TransportError> {
        let body =
            serde_json::to_string(entry).map_err(|err| TransportError::Build(err.to_string()))?;
        self.bodies.borrow_mut().push(body);
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

struct SheetHost {
    shares: Cell<usize>,
}

impl ShareHost for SheetHost {
    fn supports_native_share(&self) -> bool {
        true
    }

    async fn native_share(&self, _payload: &SharePayload) -> Result<(), ShareError> {
        self.shares.set(self.shares.get() + 1);
        Ok(())
    }

    async fn copy_text(&self, _text: &str) -> Result<(), ShareError> {
        panic!("clipboard must not be used when a share sheet exists");
    }
}

fn new_session(config: &LandingConfig) -> Rc<RefCell<Session>> {
    Rc::new(RefCell::new(Session::new(config)))
}

fn status(session: &Rc<RefCell<Session>>) -> SubscriptionStatus {
    session.borrow().subscription().status().clone()
}

#[tokio::test]
async fn english_signup_reaches_success() {
    let transport = RecordingTransport::default();
    let session = new_session(&LandingConfig::default());

    assert!(session.borrow_mut().select_language("en"));
    session.borrow_mut().edit_email("test@example.com");
    let Ok(dispatch) = subscription::submit(Rc::clone(&session), transport.clone(), DATE.into())
    else {
        panic!("submit rejected");
    };
    assert_eq!(status(&session), SubscriptionStatus::Submitting);

    dispatch.await;

    let bodies = transport.bodies.borrow();
    assert_eq!(bodies.len(), 1);
    assert!(bodies[0].contains(r#""email":"test@example.com""#), "{}", bodies[0]);
    assert!(bodies[0].contains(r#""language":"en""#), "{}", bodies[0]);
    assert!(bodies[0].contains(DATE));
    assert_eq!(status(&session), SubscriptionStatus::Succeeded);
}

#[test]
fn switching_back_to_kazakh_restores_its_catalogs() {
    let mut session = Session::default();
    session.select_language("ru");
    session.select_language("kk");

    let frame = session.frame();
    assert_eq!(frame.language, LanguageCode::Kk);
    assert_eq!(frame.bundle, TranslationBundle::for_language(LanguageCode::Kk));
    assert_eq!(frame.content, mock_content(LanguageCode::Kk));
    assert_ne!(
        frame.bundle.hero_title,
        TranslationBundle::for_language(LanguageCode::Ru).hero_title
    );
}

#[tokio::test]
async fn double_submit_dispatches_once() {
    let transport = RecordingTransport::default();
    let session = new_session(&LandingConfig::default());
    session.borrow_mut().edit_email("test@example.com");

    let Ok(dispatch) = subscription::submit(Rc::clone(&session), transport.clone(), DATE.into())
    else {
        panic!("submit rejected");
    };
    assert!(matches!(
        subscription::submit(Rc::clone(&session), transport.clone(), DATE.into()),
        Err(SubmitRejected::InFlight)
    ));
    dispatch.await;

    assert_eq!(transport.bodies.borrow().len(), 1);
    assert!(matches!(
        subscription::submit(Rc::clone(&session), transport.clone(), DATE.into()),
        Err(SubmitRejected::Closed)
    ));
}

#[tokio::test]
async fn native_share_leaves_acknowledgment_untouched() {
    let host = SheetHost { shares: Cell::new(0) };
    let session = new_session(&LandingConfig::default());
    let before = session.borrow().clone();

    let outcome = share::share(Rc::clone(&session), &AckTimer::new(), &host, "https://lupa.kz/").await;
    assert_eq!(outcome, ShareOutcome::Shared);

    assert_eq!(host.shares.get(), 1);
    assert!(!session.borrow().frame().share_acknowledged);
    assert_eq!(*session.borrow(), before);
}

#[tokio::test]
async fn failed_dispatch_then_edit_reopens_form() {
    let transport = RecordingTransport {
        fail_with: Some(TransportError::Dispatch("offline".into())),
        ..Default::default()
    };
    let session = new_session(&LandingConfig {
        optimistic_dispatch: false,
        ..Default::default()
    });
    session.borrow_mut().edit_email("test@example.com");
    let Ok(dispatch) = subscription::submit(Rc::clone(&session), transport, DATE.into()) else {
        panic!("submit rejected");
    };
    dispatch.await;
    assert!(matches!(status(&session), SubscriptionStatus::Failed { .. }));

    session.borrow_mut().edit_email("test@example.com");
    assert_eq!(status(&session), SubscriptionStatus::Idle);
}
