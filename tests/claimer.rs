// tests/claimer.rs
//
// Scripted browser session standing in for a real WebDriver.
//
use std::{cell::RefCell, rc::Rc, time::Duration};

use airdrop_registry::{
    claim::{AirdropClaimer, BrowserSession, ClaimError, SessionLauncher},
    config::options::ClaimOptions,
};

#[derive(Default)]
struct Script {
    /// Classes that will "appear" on the page.
    present: Vec<&'static str>,
    fail_launch: bool,
    launches: usize,
    quits: usize,
    opened: Vec<String>,
    clicked: Vec<String>,
}

type Shared = Rc<RefCell<Script>>;

struct FakeLauncher(Shared);
struct FakeSession(Shared);

impl SessionLauncher for FakeLauncher {
    type Session = FakeSession;

    fn launch(&self, opts: &ClaimOptions) -> Result<FakeSession, ClaimError> {
        assert!(opts.headless);
        let mut s = self.0.borrow_mut();
        if s.fail_launch {
            return Err(ClaimError::Launch("no chrome".into()));
        }
        s.launches += 1;
        Ok(FakeSession(Rc::clone(&self.0)))
    }
}

impl BrowserSession for FakeSession {
    fn open(&mut self, url: &str) -> Result<(), ClaimError> {
        self.0.borrow_mut().opened.push(url.to_string());
        Ok(())
    }

    fn wait_for_class(&mut self, class: &str, timeout: Duration) -> Result<(), ClaimError> {
        if self.0.borrow().present.iter().any(|c| *c == class) {
            Ok(())
        } else {
            Err(ClaimError::Timeout { class: class.to_string(), waited: timeout })
        }
    }

    fn click_class(&mut self, class: &str) -> Result<(), ClaimError> {
        self.0.borrow_mut().clicked.push(class.to_string());
        Ok(())
    }

    fn quit(&mut self) -> Result<(), ClaimError> {
        self.0.borrow_mut().quits += 1;
        Ok(())
    }
}

fn script(present: &[&'static str]) -> Shared {
    Rc::new(RefCell::new(Script { present: present.to_vec(), ..Default::default() }))
}

const WALLET: &str = "0xabc123";

#[test]
fn happy_path_clicks_and_confirms() {
    let s = script(&["claim-button", "success-message"]);
    let mut claimer = AirdropClaimer::new(WALLET, FakeLauncher(Rc::clone(&s)));

    assert!(!claimer.has_session());
    assert!(claimer.claim_airdrop("https://example.com/claim"));
    assert!(claimer.has_session());

    let st = s.borrow();
    assert_eq!(st.launches, 1);
    assert_eq!(st.opened, ["https://example.com/claim"]);
    assert_eq!(st.clicked, ["claim-button"]);
}

#[test]
fn session_is_reused_across_claims() {
    let s = script(&["claim-button", "success-message"]);
    let mut claimer = AirdropClaimer::new(WALLET, FakeLauncher(Rc::clone(&s)));
    assert!(claimer.claim_airdrop("https://a.example/claim"));
    assert!(claimer.claim_airdrop("https://b.example/claim"));
    assert_eq!(s.borrow().launches, 1);
    assert_eq!(s.borrow().opened.len(), 2);
}

#[test]
fn missing_button_fails_without_clicking() {
    let s = script(&[]);
    let mut claimer = AirdropClaimer::new(WALLET, FakeLauncher(Rc::clone(&s)));
    assert!(!claimer.claim_airdrop("https://example.com/claim"));
    assert!(s.borrow().clicked.is_empty());
}

#[test]
fn missing_confirmation_fails_after_click() {
    let s = script(&["claim-button"]);
    let mut claimer = AirdropClaimer::new(WALLET, FakeLauncher(Rc::clone(&s)));
    assert!(!claimer.claim_airdrop("https://example.com/claim"));
    assert_eq!(s.borrow().clicked, ["claim-button"]);
}

#[test]
fn launch_failure_is_false() {
    let s = script(&["claim-button", "success-message"]);
    s.borrow_mut().fail_launch = true;
    let mut claimer = AirdropClaimer::new(WALLET, FakeLauncher(Rc::clone(&s)));
    assert!(!claimer.claim_airdrop("https://example.com/claim"));
    assert!(!claimer.has_session());
}

#[test]
fn blank_wallet_fails_before_click() {
    let s = script(&["claim-button", "success-message"]);
    let mut claimer = AirdropClaimer::new("  ", FakeLauncher(Rc::clone(&s)));
    assert!(!claimer.claim_airdrop("https://example.com/claim"));
    assert!(s.borrow().clicked.is_empty());
}

#[test]
fn cleanup_quits_once_and_drop_is_safe() {
    let s = script(&["claim-button", "success-message"]);
    {
        let mut claimer = AirdropClaimer::new(WALLET, FakeLauncher(Rc::clone(&s)));
        claimer.claim_airdrop("https://example.com/claim");
        claimer.cleanup();
        claimer.cleanup();
        assert!(!claimer.has_session());
    }
    assert_eq!(s.borrow().quits, 1);
}

#[test]
fn drop_quits_open_session() {
    let s = script(&["claim-button", "success-message"]);
    {
        let mut claimer = AirdropClaimer::new(WALLET, FakeLauncher(Rc::clone(&s)));
        claimer.claim_airdrop("https://example.com/claim");
    }
    assert_eq!(s.borrow().quits, 1);
}

#[test]
fn timeout_message_names_class_and_seconds() {
    let e = ClaimError::Timeout { class: "claim-button".into(), waited: Duration::from_secs(10) };
    assert_eq!(e.to_string(), "timed out after 10s waiting for .claim-button");
}
