//! Account sign-in, sign-up and session tracking
//!
//! Form checks run in the order the auth page reports them, before any
//! database access. Listeners follow the signed-in session through
//! `subscribe()`.

use std::sync::{Arc, Mutex};

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use tokio::sync::watch;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::error::{AuthError, Error, Result};
use crate::models::{AuthSession, Session, User};
use crate::storage::Database;

/// Fields of the sign-up form
#[derive(Debug, Clone, Default)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub agree_terms: bool,
    pub age18: bool,
}

impl SignUpRequest {
    /// Form-level checks, first failure wins
    pub fn check(&self) -> std::result::Result<(), AuthError> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() || self.password.is_empty()
        {
            return Err(AuthError::MissingSignUpFields);
        }
        if self.password != self.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }
        if !self.agree_terms || !self.age18 {
            return Err(AuthError::AgreementRequired);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignUpOutcome {
    SignedIn(AuthSession),
    /// Account created; the email must be confirmed before signing in
    PendingConfirmation,
}

pub struct AuthService {
    db: Arc<Mutex<Database>>,
    config: AuthConfig,
    session_tx: watch::Sender<Option<AuthSession>>,
}

impl AuthService {
    pub fn new(db: Arc<Mutex<Database>>, config: AuthConfig) -> Self {
        let (session_tx, _) = watch::channel(None);
        Self {
            db,
            config,
            session_tx,
        }
    }

    /// Session-change notifications
    pub fn subscribe(&self) -> watch::Receiver<Option<AuthSession>> {
        self.session_tx.subscribe()
    }

    pub fn current(&self) -> Option<AuthSession> {
        self.session_tx.borrow().clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.session_tx.borrow().is_some()
    }

    #[instrument(skip(self, password))]
    pub fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials.into());
        }

        let auth = self.with_db(|db| {
            let users = db.users();
            let user = users
                .find_by_email(email)?
                .ok_or(AuthError::InvalidCredentials)?;

            verify_password(password, &user.password_hash)?;
            if !user.confirmed {
                return Err(AuthError::EmailNotConfirmed.into());
            }

            users.update_last_login(user.id)?;
            let session = Session::new(user.id, self.config.session_hours);
            users.create_session(&session)?;
            Ok(AuthSession::new(&session, &user))
        });

        match auth {
            Ok(auth) => {
                info!(user_id = %auth.user_id, "Signed in");
                self.publish(Some(auth.clone()));
                Ok(auth)
            }
            Err(e) => {
                warn!(error = %e, "Sign in rejected");
                Err(e)
            }
        }
    }

    #[instrument(skip(self, request), fields(email = %request.email))]
    pub fn sign_up(&self, request: &SignUpRequest) -> Result<SignUpOutcome> {
        request.check()?;
        if request.password.chars().count() < self.config.min_password_len {
            return Err(AuthError::PasswordTooShort(self.config.min_password_len).into());
        }

        let email = request.email.trim();
        let password_hash = hash_password(&request.password)?;
        let mut user = User::new(
            email.to_string(),
            request.name.trim().to_string(),
            password_hash,
        );
        if self.config.require_email_confirmation {
            user = user.unconfirmed();
        }

        let session = self.with_db(|db| {
            let users = db.users();
            if users.find_by_email(email)?.is_some() {
                return Err(AuthError::EmailTaken.into());
            }
            users.create(&user)?;

            if !user.confirmed {
                return Ok(None);
            }
            let session = Session::new(user.id, self.config.session_hours);
            users.create_session(&session)?;
            Ok(Some(session))
        })?;

        match session {
            Some(session) => {
                let auth = AuthSession::new(&session, &user);
                info!(user_id = %user.id, "Account created");
                self.publish(Some(auth.clone()));
                Ok(SignUpOutcome::SignedIn(auth))
            }
            None => {
                info!(user_id = %user.id, "Account created, awaiting confirmation");
                Ok(SignUpOutcome::PendingConfirmation)
            }
        }
    }

    /// Mark an account's email as confirmed
    pub fn confirm_email(&self, email: &str) -> Result<()> {
        self.with_db(|db| {
            let users = db.users();
            let user = users
                .find_by_email(email.trim())?
                .ok_or_else(|| Error::NotFound(format!("user {}", email)))?;
            users.confirm(user.id)
        })
    }

    #[instrument(skip(self))]
    pub fn sign_out(&self) -> Result<()> {
        if let Some(current) = self.current() {
            self.with_db(|db| db.users().delete_session(current.session_id))?;
            info!(user_id = %current.user_id, "Signed out");
        }
        self.publish(None);
        Ok(())
    }

    /// Resume a stored session if it is still valid
    #[instrument(skip(self))]
    pub fn restore(&self, session_id: Uuid) -> Result<Option<AuthSession>> {
        let restored = self.with_db(|db| {
            let users = db.users();
            let Some(session) = users.find_valid_session(session_id)? else {
                return Ok(None);
            };
            Ok(users
                .find_by_id(session.user_id)?
                .map(|user| AuthSession::new(&session, &user)))
        })?;

        if restored.is_some() {
            self.publish(restored.clone());
        }
        Ok(restored)
    }

    fn publish(&self, session: Option<AuthSession>) {
        self.session_tx.send_replace(session);
    }

    fn with_db<T>(&self, f: impl FnOnce(&Database) -> Result<T>) -> Result<T> {
        let db = self
            .db
            .lock()
            .map_err(|_| Error::InvalidOperation("database lock poisoned".into()))?;
        f(&db)
    }
}

fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::Hashing(e.to_string()).into())
}

fn verify_password(password: &str, stored: &str) -> Result<()> {
    let parsed = PasswordHash::new(stored).map_err(|e| AuthError::Hashing(e.to_string()))?;
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| AuthError::InvalidCredentials.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(config: AuthConfig) -> AuthService {
        let db = Database::open_in_memory().unwrap();
        AuthService::new(Arc::new(Mutex::new(db)), config)
    }

    fn request(email: &str) -> SignUpRequest {
        SignUpRequest {
            name: "Dana".into(),
            email: email.into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
            agree_terms: true,
            age18: true,
        }
    }

    fn auth_err(result: Result<impl std::fmt::Debug>) -> AuthError {
        match result {
            Err(Error::Authentication(e)) => e,
            other => panic!("expected auth error, got {:?}", other),
        }
    }

    #[test]
    fn test_sign_up_checks_run_in_order() {
        let auth = service(AuthConfig::default());

        let mut req = request("a@b.c");
        req.name.clear();
        req.confirm_password = "other".into();
        assert_eq!(auth_err(auth.sign_up(&req)), AuthError::MissingSignUpFields);

        let mut req = request("a@b.c");
        req.confirm_password = "other".into();
        req.agree_terms = false;
        assert_eq!(auth_err(auth.sign_up(&req)), AuthError::PasswordMismatch);

        let mut req = request("a@b.c");
        req.age18 = false;
        assert_eq!(auth_err(auth.sign_up(&req)), AuthError::AgreementRequired);

        let mut req = request("a@b.c");
        req.password = "abc".into();
        req.confirm_password = "abc".into();
        assert_eq!(auth_err(auth.sign_up(&req)), AuthError::PasswordTooShort(6));
        assert!(auth.current().is_none());
    }

    #[test]
    fn test_sign_up_signs_in_and_notifies() {
        let auth = service(AuthConfig::default());
        let rx = auth.subscribe();

        let outcome = auth.sign_up(&request("dana@example.com")).unwrap();
        let SignUpOutcome::SignedIn(session) = outcome else {
            panic!("expected signed in");
        };
        assert_eq!(session.display_name, "Dana");
        assert_eq!(rx.borrow().as_ref(), Some(&session));
        assert_eq!(auth.current(), Some(session));
    }

    #[test]
    fn test_duplicate_email_rejected() {
        let auth = service(AuthConfig::default());
        auth.sign_up(&request("dana@example.com")).unwrap();
        assert_eq!(
            auth_err(auth.sign_up(&request("DANA@example.com"))),
            AuthError::EmailTaken
        );
    }

    #[test]
    fn test_sign_in_round_trip() {
        let auth = service(AuthConfig::default());
        auth.sign_up(&request("dana@example.com")).unwrap();
        auth.sign_out().unwrap();
        assert!(!auth.is_signed_in());

        assert_eq!(
            auth_err(auth.sign_in("dana@example.com", "wrong")),
            AuthError::InvalidCredentials
        );
        assert_eq!(auth_err(auth.sign_in("", "")), AuthError::MissingCredentials);

        let session = auth.sign_in("dana@example.com", "secret1").unwrap();
        assert_eq!(auth.current(), Some(session));
    }

    #[test]
    fn test_confirmation_required() {
        let auth = service(AuthConfig {
            require_email_confirmation: true,
            ..AuthConfig::default()
        });

        let outcome = auth.sign_up(&request("new@example.com")).unwrap();
        assert_eq!(outcome, SignUpOutcome::PendingConfirmation);
        assert!(auth.current().is_none());
        assert_eq!(
            auth_err(auth.sign_in("new@example.com", "secret1")),
            AuthError::EmailNotConfirmed
        );

        auth.confirm_email("new@example.com").unwrap();
        assert!(auth.sign_in("new@example.com", "secret1").is_ok());
    }

    #[test]
    fn test_restore_and_sign_out() {
        let auth = service(AuthConfig::default());
        let SignUpOutcome::SignedIn(session) = auth.sign_up(&request("dana@example.com")).unwrap()
        else {
            panic!("expected signed in");
        };

        auth.sign_out().unwrap();
        assert!(auth.restore(session.session_id).unwrap().is_none());

        let session = auth.sign_in("dana@example.com", "secret1").unwrap();
        let fresh = service(AuthConfig::default());
        assert!(fresh.restore(session.session_id).unwrap().is_none());
        assert_eq!(auth.restore(session.session_id).unwrap(), Some(session));
    }
}
