//! Signup form state machine.
//!
//! States: idle → submitting → success | error. Validation runs client-side
//! in a fixed order; the first failing rule sets a localized message and
//! aborts submission, so invalid input never reaches the network. Known
//! provider error messages are mapped to localized text, everything else is
//! shown as reported.

use crate::service::ServiceError;
use crate::shared::SignupData;

pub const MSG_NAME_REQUIRED: &str = "이름을 입력해주세요.";
pub const MSG_EMAIL_REQUIRED: &str = "이메일을 입력해주세요.";
pub const MSG_PASSWORD_TOO_SHORT: &str = "비밀번호는 6자 이상 입력해주세요.";
pub const MSG_PASSWORD_MISMATCH: &str = "비밀번호가 일치하지 않습니다.";
pub const MSG_ALREADY_REGISTERED: &str = "이미 가입된 이메일 주소입니다.";
pub const MSG_NETWORK: &str = "네트워크 오류가 발생했습니다. 잠시 후 다시 시도해주세요.";

const MIN_PASSWORD_LEN: usize = 6;

/// Where the form is in its lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum SignupPhase {
    Idle,
    Submitting,
    /// Registration done; the confirmation screen shows this address
    Success { email: String },
    Error(String),
}

/// Signup form fields and phase.
#[derive(Debug)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
    pub phase: SignupPhase,
}

impl SignupForm {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            confirm: String::new(),
            phase: SignupPhase::Idle,
        }
    }

    /// First failing validation rule, in priority order.
    pub fn validate(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            return Some(MSG_NAME_REQUIRED);
        }
        if self.email.trim().is_empty() {
            return Some(MSG_EMAIL_REQUIRED);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Some(MSG_PASSWORD_TOO_SHORT);
        }
        if self.password != self.confirm {
            return Some(MSG_PASSWORD_MISMATCH);
        }
        None
    }

    /// Validate and move to `Submitting`.
    ///
    /// Returns the registration input when the form may be sent. On a
    /// validation failure the phase carries the message and nothing is sent.
    pub fn begin_submit(&mut self) -> Option<SignupData> {
        if let Some(message) = self.validate() {
            self.phase = SignupPhase::Error(message.to_string());
            return None;
        }
        self.phase = SignupPhase::Submitting;
        Some(SignupData {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            name: self.name.trim().to_string(),
        })
    }

    /// Apply the registration outcome.
    pub fn finish(&mut self, result: Result<(), &ServiceError>) {
        self.phase = match result {
            Ok(()) => SignupPhase::Success {
                email: self.email.trim().to_string(),
            },
            Err(error) => SignupPhase::Error(map_signup_error(error)),
        };
    }

    /// The message to display, if the form is in the error state.
    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            SignupPhase::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SignupPhase::Submitting
    }
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a registration failure to user-facing text.
pub fn map_signup_error(error: &ServiceError) -> String {
    if error.is_network() {
        return MSG_NETWORK.to_string();
    }
    let message = error.message();
    if message.contains("already registered") {
        MSG_ALREADY_REGISTERED.to_string()
    } else if message.contains("Password") {
        MSG_PASSWORD_TOO_SHORT.to_string()
    } else {
        message
    }
}
