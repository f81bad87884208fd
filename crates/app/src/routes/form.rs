use crate::routes::{login_target, Route};
use dioxus::prelude::*;
use shared_types::AppError;
use std::collections::HashMap;

/// Submission state shared by the portal's forms.
#[derive(Clone, Copy, PartialEq)]
pub struct FormStatus {
    pub error: Signal<Option<String>>,
    pub field_errors: Signal<HashMap<String, String>>,
    pub busy: Signal<bool>,
}

pub fn use_form_status() -> FormStatus {
    FormStatus {
        error: use_signal(|| None),
        field_errors: use_signal(HashMap::new),
        busy: use_signal(|| false),
    }
}

impl FormStatus {
    pub fn start(&mut self) {
        self.busy.set(true);
        self.error.set(None);
        self.field_errors.set(HashMap::new());
    }

    /// Show per-field messages when the error carries them, otherwise a
    /// single banner.
    pub fn fail(&mut self, error: AppError) {
        self.busy.set(false);
        if error.field_errors.is_empty() {
            self.error.set(Some(error.friendly_message()));
        } else {
            self.field_errors.set(error.field_errors);
        }
    }

    pub fn finish(&mut self) {
        self.busy.set(false);
    }

    /// Like `fail`, except a rejected session leaves the form for the
    /// login page. The API client has already cleared the token.
    pub fn fail_or_sign_in(&mut self, error: AppError) {
        let login = &session::config::config().session.login_route;
        match sign_in_redirect(&error, login) {
            Some(route) => {
                self.finish();
                tracing::info!("Session rejected, redirecting to login");
                navigator().push(route);
            }
            None => self.fail(error),
        }
    }
}

/// Login page for errors that mean the session is gone.
pub fn sign_in_redirect(error: &AppError, login_route: &str) -> Option<Route> {
    error
        .is_unauthorized()
        .then(|| login_target(login_route))
}

/// Banner for a form-level error.
#[component]
pub fn FormError(status: FormStatus) -> Element {
    rsx! {
        if let Some(err) = status.error.read().clone() {
            div { class: "form-error", role: "alert", "{err}" }
        }
    }
}

/// Inline message under the input named `field`.
#[component]
pub fn FieldError(status: FormStatus, field: String) -> Element {
    let message = status.field_errors.read().get(&field).cloned();
    rsx! {
        if let Some(msg) = message {
            span { class: "field-error", "{msg}" }
        }
    }
}
