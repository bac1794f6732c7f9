//! Request-processing middleware.

pub mod session_gate;

pub use session_gate::{session_gate, CurrentUser, ALLOW_LIST, LOGIN_PATH, SESSION_COOKIE};
