//! Authentication view model

use freelo_core::{Error, LocaleConfig, Route, SignUpOutcome, SignUpRequest};
use tracing::error;

use super::{Notification, Response};
use crate::state::AppState;

pub fn login(state: &mut AppState, email: &str, password: &str) -> Response {
    match state.auth.sign_in(email, password) {
        Ok(session) => {
            if let Err(e) = state.remember_session(Some(session.session_id)) {
                error!("Failed to remember session: {}", e);
            }
            state.rebind_wizard();
            Response::notify(Notification::success(state.locale(), "login.success"))
                .and_goto(Route::Home)
        }
        Err(e) => Response::notify(failure(state.locale(), "login.error", &e)),
    }
}

pub fn signup(state: &mut AppState, request: &SignUpRequest) -> Response {
    match state.auth.sign_up(request) {
        Ok(SignUpOutcome::SignedIn(session)) => {
            if let Err(e) = state.remember_session(Some(session.session_id)) {
                error!("Failed to remember session: {}", e);
            }
            state.rebind_wizard();
            Response::notify(Notification::success(state.locale(), "signup.success"))
                .and_goto(Route::Home)
        }
        Ok(SignUpOutcome::PendingConfirmation) => Response::notify(Notification::info(
            state.locale(),
            "signup.emailConfirmation",
        )),
        Err(e) => Response::notify(failure(state.locale(), "signup.error", &e)),
    }
}

pub fn logout(state: &mut AppState) -> Response {
    if let Err(e) = state.auth.sign_out() {
        return Response::notify(Notification::error(state.locale(), "common.error").with_detail(e));
    }
    if let Err(e) = state.remember_session(None) {
        error!("Failed to forget session: {}", e);
    }
    state.rebind_wizard();
    Response::notify(Notification::success(state.locale(), "logout.success")).and_goto(Route::Home)
}

fn failure(locale: &LocaleConfig, fallback_key: &str, err: &Error) -> Notification {
    match err {
        Error::Authentication(auth) => Notification::error(locale, auth.message_key()),
        other => {
            error!("Authentication backend error: {}", other);
            Notification::error(locale, fallback_key).with_detail(other)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewmodel::NotificationLevel;
    use freelo_core::AppConfig;

    fn request() -> SignUpRequest {
        SignUpRequest {
            name: "Dana".into(),
            email: "dana@example.com".into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
            agree_terms: true,
            age18: true,
        }
    }

    #[test]
    fn test_signup_then_logout() {
        let mut state = AppState::in_memory(AppConfig::default()).unwrap();

        let response = signup(&mut state, &request());
        let note = response.notification.unwrap();
        assert_eq!(note.level, NotificationLevel::Success);
        assert_eq!(note.message, "Account created");
        assert_eq!(response.route, Some(Route::Home));
        assert!(state.auth.is_signed_in());

        let response = logout(&mut state);
        assert_eq!(response.notification.unwrap().message, "Signed out");
        assert!(!state.auth.is_signed_in());
    }

    #[test]
    fn test_form_errors_are_localized() {
        let mut state = AppState::in_memory(AppConfig::default()).unwrap();

        let mut req = request();
        req.confirm_password = "different".into();
        let note = signup(&mut state, &req).notification.unwrap();
        assert!(note.is_error());
        assert_eq!(note.message, "Passwords do not match");

        let response = login(&mut state, "", "");
        assert_eq!(
            response.notification.unwrap().message,
            "Please enter your email and password"
        );
        assert_eq!(response.route, None);
    }

    #[test]
    fn test_pending_confirmation_is_info() {
        let mut config = AppConfig::default();
        config.auth.require_email_confirmation = true;
        let mut state = AppState::in_memory(config).unwrap();

        let note = signup(&mut state, &request()).notification.unwrap();
        assert_eq!(note.level, NotificationLevel::Info);
        assert!(!state.auth.is_signed_in());
    }
}
