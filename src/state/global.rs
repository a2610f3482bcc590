//! Global Application State
//!
//! Reactive state shared across screens using Leptos signals. Screens keep
//! their own form and result state; only the toast messages and the
//! authenticated flag cross screen boundaries.

use leptos::*;

use crate::api::ApiError;
use crate::auth::session;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Whether a session token is currently held
    pub authenticated: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        authenticated: create_rw_signal(session::token().is_some()),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Re-read the session store into the authenticated flag.
    pub fn refresh_auth(&self) {
        self.authenticated.set(session::token().is_some());
    }

    /// Revoke the session and flip the flag. Wired to the sign-out control.
    pub fn sign_out(&self) {
        session::clear_token();
        self.authenticated.set(false);
    }

    /// Surface a gateway failure, keeping the authenticated flag honest
    /// when the backend rejected the token.
    pub fn report_api_error(&self, err: &ApiError) {
        if matches!(err, ApiError::AuthRejected(_)) {
            self.refresh_auth();
        }
        self.show_error(&err.to_string());
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}
