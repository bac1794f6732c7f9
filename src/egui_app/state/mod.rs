//! Central application state shared across egui views.
//!
//! Async work never blocks a frame: handlers spawn onto the app's runtime and
//! hand back an mpsc receiver that `poll_results` drains once per frame,
//! applying the state transition when the result lands. This is also where
//! navigation between screens happens.

use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;

use crate::egui_app::config::Config;
use crate::egui_app::forms::{LoginForm, SignupForm};
use crate::egui_app::period::PeriodStore;
use crate::egui_app::queries::{Registration, UserDirectory};
use crate::service::{ServiceClient, ServiceError};
use crate::shared::{User, UserUpdate};

pub const MSG_RESEND_SENT: &str = "확인 이메일을 다시 보냈습니다.";

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Signup,
    Entry,
}

/// The signed-in member as the views see it.
#[derive(Debug, Clone, Default)]
pub enum UserSlot {
    /// First load still in flight; views render a skeleton
    #[default]
    Loading,
    /// Resolved: a member, or no session
    Ready(Option<User>),
}

/// Central application state.
pub struct AppState {
    pub config: Config,
    pub directory: Arc<UserDirectory>,
    pub screen: Screen,
    pub signup: SignupForm,
    pub login: LoginForm,
    pub current_user: UserSlot,
    pub periods: PeriodStore,
    /// Inline name-editing buffer; `Some` while the edit form is open
    pub name_edit: Option<String>,
    pub saving_name: bool,
    /// Feedback from the resend-confirmation action
    pub resend_notice: Option<String>,

    runtime: tokio::runtime::Runtime,
    signup_result: Option<Receiver<Result<Registration, ServiceError>>>,
    login_result: Option<Receiver<Result<(), ServiceError>>>,
    user_result: Option<Receiver<Result<Option<User>, ServiceError>>>,
    save_name_result: Option<Receiver<Result<(), ServiceError>>>,
    resend_result: Option<Receiver<Result<(), ServiceError>>>,
    signout_result: Option<Receiver<()>>,
}

impl AppState {
    pub fn new() -> Self {
        let config = Config::new();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .expect("tokio runtime builds");
        let service = Arc::new(ServiceClient::new(config.service_config()));
        let directory = Arc::new(UserDirectory::new(service));

        let mut state = Self {
            config,
            directory,
            screen: Screen::Login,
            signup: SignupForm::new(),
            login: LoginForm::new(),
            current_user: UserSlot::Loading,
            periods: PeriodStore::default(),
            name_edit: None,
            saving_name: false,
            resend_notice: None,
            runtime,
            signup_result: None,
            login_result: None,
            user_result: None,
            save_name_result: None,
            resend_result: None,
            signout_result: None,
        };
        state.load_current_user();
        state
    }

    /// Whether any async operation is still pending.
    pub fn has_pending_work(&self) -> bool {
        self.signup_result.is_some()
            || self.login_result.is_some()
            || self.user_result.is_some()
            || self.save_name_result.is_some()
            || self.resend_result.is_some()
            || self.signout_result.is_some()
    }

    /// Drain finished async work and apply the transitions. Called once per
    /// frame.
    pub fn poll_results(&mut self) {
        if let Some(rx) = &self.signup_result {
            if let Ok(result) = rx.try_recv() {
                self.signup_result = None;
                self.signup.finish(result.as_ref().map(|_| ()));
                if result.is_ok() {
                    self.load_current_user();
                }
            }
        }

        if let Some(rx) = &self.login_result {
            if let Ok(result) = rx.try_recv() {
                self.login_result = None;
                if self.login.finish(result.as_ref().map(|_| ())) {
                    self.screen = Screen::Entry;
                    self.load_current_user();
                }
            }
        }

        if let Some(rx) = &self.user_result {
            if let Ok(result) = rx.try_recv() {
                self.user_result = None;
                match result {
                    Ok(user) => self.current_user = UserSlot::Ready(user),
                    Err(e) => {
                        tracing::warn!("loading current user failed: {e}");
                        self.current_user = UserSlot::Ready(None);
                    }
                }
            }
        }

        if let Some(rx) = &self.save_name_result {
            if let Ok(result) = rx.try_recv() {
                self.save_name_result = None;
                self.saving_name = false;
                if let Err(e) = result {
                    tracing::warn!("saving display name failed: {e}");
                }
                // Settle: re-read so the header reconciles with the service.
                self.load_current_user();
            }
        }

        if let Some(rx) = &self.resend_result {
            if let Ok(result) = rx.try_recv() {
                self.resend_result = None;
                self.resend_notice = Some(match result {
                    Ok(()) => MSG_RESEND_SENT.to_string(),
                    Err(e) => e.message(),
                });
            }
        }

        if let Some(rx) = &self.signout_result {
            if let Ok(()) = rx.try_recv() {
                self.signout_result = None;
                self.navigate_to_login();
            }
        }
    }

    /// Kick off (or re-run) the current-user read.
    pub fn load_current_user(&mut self) {
        if self.user_result.is_some() {
            return;
        }
        let directory = Arc::clone(&self.directory);
        let (tx, rx) = channel();
        self.runtime.spawn(async move {
            let result = directory.current_user().await;
            let _ = tx.send(result);
        });
        self.user_result = Some(rx);
    }

    /// Submit the signup form, if it validates.
    pub fn handle_signup(&mut self) {
        let Some(data) = self.signup.begin_submit() else {
            return;
        };
        let directory = Arc::clone(&self.directory);
        let (tx, rx) = channel();
        self.runtime.spawn(async move {
            let result = directory.register(data).await;
            let _ = tx.send(result);
        });
        self.signup_result = Some(rx);
    }

    /// Submit the login form, if it validates.
    pub fn handle_login(&mut self) {
        let Some((email, password)) = self.login.begin_submit() else {
            return;
        };
        let directory = Arc::clone(&self.directory);
        let (tx, rx) = channel();
        self.runtime.spawn(async move {
            let result = directory.sign_in(&email, &password).await.map(|_| ());
            let _ = tx.send(result);
        });
        self.login_result = Some(rx);
    }

    /// Terminate the session and navigate to the login screen.
    pub fn handle_sign_out(&mut self) {
        let directory = Arc::clone(&self.directory);
        let (tx, rx) = channel();
        self.runtime.spawn(async move {
            directory.sign_out().await;
            let _ = tx.send(());
        });
        self.signout_result = Some(rx);
    }

    /// Re-send the confirmation email shown on the signup success screen.
    pub fn handle_resend(&mut self, email: String) {
        let directory = Arc::clone(&self.directory);
        let (tx, rx) = channel();
        self.runtime.spawn(async move {
            let result = directory.resend_confirmation(&email).await;
            let _ = tx.send(result);
        });
        self.resend_result = Some(rx);
    }

    /// Open the inline name editor, seeded with the current name.
    pub fn begin_name_edit(&mut self) {
        let current = match &self.current_user {
            UserSlot::Ready(Some(user)) => user.name.clone(),
            _ => String::new(),
        };
        self.name_edit = Some(current);
    }

    pub fn cancel_name_edit(&mut self) {
        self.name_edit = None;
    }

    /// Save the edited name.
    ///
    /// The header reflects the new name immediately; the queries layer runs
    /// the same optimistic merge on its cache before the call goes out.
    pub fn save_name(&mut self) {
        let Some(name) = self.name_edit.take() else {
            return;
        };
        let name = name.trim().to_string();
        if name.is_empty() {
            return;
        }

        if let UserSlot::Ready(Some(user)) = &mut self.current_user {
            user.name = name.clone();
        }

        self.saving_name = true;
        let directory = Arc::clone(&self.directory);
        let (tx, rx) = channel();
        self.runtime.spawn(async move {
            let result = directory.update_user(UserUpdate::name(name)).await;
            let _ = tx.send(result);
        });
        self.save_name_result = Some(rx);
    }

    fn navigate_to_login(&mut self) {
        self.screen = Screen::Login;
        self.current_user = UserSlot::Ready(None);
        self.signup = SignupForm::new();
        self.login = LoginForm::new();
        self.name_edit = None;
        self.resend_notice = None;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
