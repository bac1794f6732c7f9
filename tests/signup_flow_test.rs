//! Signup flow tests at the app-state level.
//!
//! Drives `AppState` the way the UI does: fill the form, submit, poll until
//! the async work settles, then look at the phase. The external service is a
//! wiremock stand-in reached through the `SERVICE_URL` environment variable,
//! so these tests run serially.

mod common;

use std::time::{Duration, Instant};

use common::FakeService;
use pretty_assertions::assert_eq;
use serial_test::serial;

use code_kimbap::egui_app::forms::signup::{
    MSG_ALREADY_REGISTERED, MSG_NAME_REQUIRED, MSG_NETWORK,
};
use code_kimbap::egui_app::forms::SignupPhase;
use code_kimbap::egui_app::AppState;

/// Poll pending async work until it settles or the deadline passes.
fn pump(state: &mut AppState, deadline: Duration) {
    let started = Instant::now();
    loop {
        state.poll_results();
        if !state.has_pending_work() || started.elapsed() > deadline {
            return;
        }
        std::thread::sleep(Duration::from_millis(25));
    }
}

fn fill_valid_form(state: &mut AppState) {
    state.signup.name = "김밥".to_string();
    state.signup.email = "kimbap@example.com".to_string();
    state.signup.password = "secret".to_string();
    state.signup.confirm = "secret".to_string();
}

fn state_against(url: &str) -> AppState {
    std::env::set_var("SERVICE_URL", url);
    std::env::set_var("SERVICE_ANON_KEY", "test-anon-key");
    let mut state = AppState::new();
    // Let the initial (sessionless) user load settle.
    pump(&mut state, Duration::from_secs(2));
    state
}

#[test]
#[serial]
fn test_invalid_input_never_reaches_the_service() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let fake = rt.block_on(FakeService::start());

    let mut state = state_against(&fake.server.uri());
    fill_valid_form(&mut state);
    state.signup.name.clear();

    state.handle_signup();

    assert_eq!(state.signup.error(), Some(MSG_NAME_REQUIRED));
    assert!(!state.has_pending_work());
    assert_eq!(rt.block_on(fake.hits("POST", "/auth/v1/signup")), 0);
}

#[test]
#[serial]
fn test_successful_signup_shows_confirmation_screen() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let fake = rt.block_on(async {
        let fake = FakeService::start().await;
        fake.mount_signup_pending().await;
        fake.mount_profile(true).await;
        fake
    });

    let mut state = state_against(&fake.server.uri());
    fill_valid_form(&mut state);

    state.handle_signup();
    assert!(state.signup.is_submitting());

    // Registration includes the fixed one-second trigger check.
    pump(&mut state, Duration::from_secs(5));

    assert_eq!(
        state.signup.phase,
        SignupPhase::Success {
            email: "kimbap@example.com".to_string()
        }
    );
    assert_eq!(state.signup.error(), None);
    assert_eq!(rt.block_on(fake.hits("POST", "/auth/v1/signup")), 1);
}

#[test]
#[serial]
fn test_already_registered_email_is_localized() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let fake = rt.block_on(async {
        let fake = FakeService::start().await;
        fake.mount_signup_error(422, "User already registered").await;
        fake
    });

    let mut state = state_against(&fake.server.uri());
    fill_valid_form(&mut state);

    state.handle_signup();
    pump(&mut state, Duration::from_secs(5));

    assert_eq!(state.signup.error(), Some(MSG_ALREADY_REGISTERED));
}

#[test]
#[serial]
fn test_unreachable_service_maps_to_network_message() {
    // Discard port: connection refused before anything is sent.
    let mut state = state_against("http://127.0.0.1:9");
    fill_valid_form(&mut state);

    state.handle_signup();
    pump(&mut state, Duration::from_secs(5));

    assert_eq!(state.signup.error(), Some(MSG_NETWORK));
}
