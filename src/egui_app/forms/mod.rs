//! Form state machines for the auth screens.
//!
//! The state and validation logic live here, independent of the rendering
//! layer, so the transition rules can be tested without a UI.

pub mod login;
pub mod signup;

pub use login::{LoginForm, LoginPhase};
pub use signup::{SignupForm, SignupPhase};
