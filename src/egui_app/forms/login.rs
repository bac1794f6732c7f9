//! Login form state machine.

use crate::service::ServiceError;

use super::signup::MSG_NETWORK;

pub const MSG_CREDENTIALS_REQUIRED: &str = "이메일과 비밀번호를 입력해주세요.";
pub const MSG_INVALID_CREDENTIALS: &str = "이메일 또는 비밀번호가 올바르지 않습니다.";

#[derive(Debug, Clone, PartialEq)]
pub enum LoginPhase {
    Idle,
    Submitting,
    Error(String),
}

#[derive(Debug)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub phase: LoginPhase,
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            phase: LoginPhase::Idle,
        }
    }

    /// Validate and move to `Submitting`; returns the credentials to send.
    pub fn begin_submit(&mut self) -> Option<(String, String)> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            self.phase = LoginPhase::Error(MSG_CREDENTIALS_REQUIRED.to_string());
            return None;
        }
        self.phase = LoginPhase::Submitting;
        Some((self.email.trim().to_string(), self.password.clone()))
    }

    /// Apply the sign-in outcome; returns whether it succeeded.
    pub fn finish(&mut self, result: Result<(), &ServiceError>) -> bool {
        match result {
            Ok(()) => {
                self.password.clear();
                self.phase = LoginPhase::Idle;
                true
            }
            Err(error) => {
                self.phase = LoginPhase::Error(map_login_error(error));
                false
            }
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            LoginPhase::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == LoginPhase::Submitting
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

fn map_login_error(error: &ServiceError) -> String {
    if error.is_network() {
        return MSG_NETWORK.to_string();
    }
    let message = error.message();
    if message.contains("Invalid login credentials") {
        MSG_INVALID_CREDENTIALS.to_string()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_credentials_do_not_submit() {
        let mut form = LoginForm::new();
        assert!(form.begin_submit().is_none());
        assert_eq!(form.error(), Some(MSG_CREDENTIALS_REQUIRED));
    }

    #[test]
    fn test_invalid_credentials_localized() {
        let mut form = LoginForm::new();
        form.email = "kimbap@example.com".to_string();
        form.password = "wrong".to_string();
        form.begin_submit();

        let failed = form.finish(Err(&ServiceError::service(400, "Invalid login credentials")));
        assert!(!failed);
        assert_eq!(form.error(), Some(MSG_INVALID_CREDENTIALS));
    }

    #[test]
    fn test_success_clears_password() {
        let mut form = LoginForm::new();
        form.email = "kimbap@example.com".to_string();
        form.password = "secret".to_string();
        form.begin_submit();

        assert!(form.finish(Ok(())));
        assert!(form.password.is_empty());
        assert_eq!(form.phase, LoginPhase::Idle);
    }
}
