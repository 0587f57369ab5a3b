//! Language toggle

use freelo_core::Locale;

use super::{Notification, Response};
use crate::state::AppState;

/// Flip between the two interface languages
pub fn toggle(state: &mut AppState) -> Response {
    let next = state.locale().locale.toggled();
    set(state, next)
}

pub fn set(state: &mut AppState, locale: Locale) -> Response {
    match state.set_locale(locale) {
        Ok(()) => Response::notify(Notification::success(state.locale(), "language.switched")),
        Err(e) => Response::notify(Notification::error(state.locale(), "common.error").with_detail(e)),
    }
}

/// Parse a language code from the shell
pub fn set_code(state: &mut AppState, code: &str) -> Response {
    match code.parse::<Locale>() {
        Ok(locale) => set(state, locale),
        Err(e) => Response::notify(Notification::error(state.locale(), "common.invalidValue").with_detail(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use freelo_core::{AppConfig, Direction};

    #[test]
    fn test_toggle_flips_direction() {
        let mut state = AppState::in_memory(AppConfig::default()).unwrap();

        toggle(&mut state);
        assert_eq!(state.locale().locale, Locale::He);
        assert_eq!(state.locale().direction, Direction::Rtl);

        toggle(&mut state);
        assert_eq!(state.locale().direction, Direction::Ltr);
    }

    #[test]
    fn test_unknown_code_rejected() {
        let mut state = AppState::in_memory(AppConfig::default()).unwrap();
        let note = set_code(&mut state, "fr").notification.unwrap();
        assert!(note.is_error());
        assert_eq!(state.locale().locale, Locale::En);
    }
}
