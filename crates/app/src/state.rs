//! Application state management

use std::sync::{Arc, Mutex};

use freelo_core::{
    AppConfig, AuthService, Database, Error, Locale, LocaleConfig, Result, SimulatedPublisher,
    SqliteDraftStore, Wizard,
};
use uuid::Uuid;

pub const DB_FILE_NAME: &str = "freelo.db";

/// Preference key remembering the signed-in session between runs
const SESSION_KEY: &str = "session";

pub type AppWizard = Wizard<SqliteDraftStore, SimulatedPublisher>;

/// Main application state
pub struct AppState {
    pub db: Arc<Mutex<Database>>,
    pub config: AppConfig,
    pub auth: AuthService,
    locale: LocaleConfig,
    wizard: AppWizard,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        let data_dir = config.data_dir()?;
        std::fs::create_dir_all(&data_dir)?;

        let db = Database::open(data_dir.join(DB_FILE_NAME))?;
        Self::with_database(db, config)
    }

    /// State backed by an in-memory database
    pub fn in_memory(config: AppConfig) -> Result<Self> {
        Self::with_database(Database::open_in_memory()?, config)
    }

    fn with_database(db: Database, config: AppConfig) -> Result<Self> {
        let stored_language = db.preferences().language()?;
        let locale = LocaleConfig::new(stored_language.unwrap_or(config.locale.default));

        let db = Arc::new(Mutex::new(db));
        let auth = AuthService::new(db.clone(), config.auth.clone());
        let wizard = Wizard::new(
            SqliteDraftStore::anonymous(db.clone()),
            SimulatedPublisher::from_config(&config.publish),
        );

        let mut state = Self {
            db,
            config,
            auth,
            locale,
            wizard,
        };
        state.restore_session()?;
        Ok(state)
    }

    pub fn locale(&self) -> &LocaleConfig {
        &self.locale
    }

    /// Switch the interface language and remember the choice
    pub fn set_locale(&mut self, locale: Locale) -> Result<()> {
        self.with_db(|db| db.preferences().set_language(locale))?;
        self.locale = self.locale.switch_to(locale);
        tracing::info!(locale = %locale, "Language switched");
        Ok(())
    }

    pub fn wizard(&self) -> &AppWizard {
        &self.wizard
    }

    pub fn wizard_mut(&mut self) -> &mut AppWizard {
        &mut self.wizard
    }

    /// Point the wizard at the draft slot of whoever is signed in
    pub fn rebind_wizard(&mut self) {
        let store = match self.auth.current() {
            Some(session) => SqliteDraftStore::new(self.db.clone(), session.user_id),
            None => SqliteDraftStore::anonymous(self.db.clone()),
        };
        tracing::debug!(slot = store.slot_key(), "Wizard bound to draft slot");
        self.wizard = Wizard::new(store, SimulatedPublisher::from_config(&self.config.publish));
    }

    /// Persist or forget the current session id
    pub fn remember_session(&self, session_id: Option<Uuid>) -> Result<()> {
        self.with_db(|db| match session_id {
            Some(id) => db.preferences().set(SESSION_KEY, &id.to_string()),
            None => db.preferences().remove(SESSION_KEY),
        })
    }

    fn restore_session(&mut self) -> Result<()> {
        let stored = self.with_db(|db| db.preferences().get(SESSION_KEY))?;
        let Some(session_id) = stored.and_then(|s| Uuid::parse_str(&s).ok()) else {
            return Ok(());
        };

        match self.auth.restore(session_id)? {
            Some(session) => {
                tracing::info!(user_id = %session.user_id, "Session restored");
                self.rebind_wizard();
            }
            None => self.remember_session(None)?,
        }
        Ok(())
    }

    fn with_db<T>(&self, f: impl FnOnce(&Database) -> Result<T>) -> Result<T> {
        let db = self
            .db
            .lock()
            .map_err(|_| Error::InvalidOperation("database lock poisoned".into()))?;
        f(&db)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use freelo_core::{SignUpOutcome, SignUpRequest};

    fn config_in(dir: &std::path::Path) -> AppConfig {
        let mut config = AppConfig::default();
        config.storage.data_dir = Some(dir.to_path_buf());
        config.publish.delay_ms = 0;
        config
    }

    fn sign_up(state: &AppState) -> Uuid {
        let request = SignUpRequest {
            name: "Dana".into(),
            email: "dana@example.com".into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
            agree_terms: true,
            age18: true,
        };
        match state.auth.sign_up(&request).unwrap() {
            SignUpOutcome::SignedIn(session) => session.session_id,
            SignUpOutcome::PendingConfirmation => panic!("expected sign in"),
        }
    }

    #[test]
    fn test_language_survives_restart() {
        let dir = tempfile::tempdir().unwrap();

        let mut state = AppState::new(config_in(dir.path())).unwrap();
        assert_eq!(state.locale().locale, Locale::En);
        state.set_locale(Locale::He).unwrap();
        drop(state);

        let state = AppState::new(config_in(dir.path())).unwrap();
        assert_eq!(state.locale().locale, Locale::He);
        assert!(state.locale().direction.is_rtl());
    }

    #[test]
    fn test_config_default_locale_used_without_preference() {
        let mut config = AppConfig::default();
        config.locale.default = Locale::He;
        let state = AppState::in_memory(config).unwrap();
        assert_eq!(state.locale().locale, Locale::He);
    }

    #[test]
    fn test_session_restored_on_restart() {
        let dir = tempfile::tempdir().unwrap();

        let mut state = AppState::new(config_in(dir.path())).unwrap();
        let session_id = sign_up(&state);
        state.remember_session(Some(session_id)).unwrap();
        state.rebind_wizard();
        let slot = state.wizard().store().slot_key().to_string();
        drop(state);

        let state = AppState::new(config_in(dir.path())).unwrap();
        assert_eq!(state.auth.current().unwrap().session_id, session_id);
        assert_eq!(state.wizard().store().slot_key(), slot);
    }

    #[test]
    fn test_wizard_slot_follows_session() {
        let mut state = AppState::in_memory(AppConfig::default()).unwrap();
        assert_eq!(state.wizard().store().slot_key(), freelo_core::DRAFT_KEY);

        sign_up(&state);
        state.rebind_wizard();
        assert_ne!(state.wizard().store().slot_key(), freelo_core::DRAFT_KEY);
    }
}
