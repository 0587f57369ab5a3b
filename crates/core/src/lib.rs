//! Freelo Core Library
//!
//! Event authoring wizard, publish tiers, accounts, locale handling and
//! storage for the Freelo events marketplace.

pub mod auth;
pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod invariants;
pub mod models;
pub mod publish;
pub mod routes;
pub mod storage;
pub mod wizard;

pub use auth::{AuthService, SignUpOutcome, SignUpRequest};
pub use config::AppConfig;
pub use error::{AuthError, DraftError, Error, PublishError, Result};
pub use i18n::{Direction, Locale, LocaleConfig, Translator};
pub use models::*;
pub use publish::{EventPublisher, RecordingPublisher, SimulatedPublisher};
pub use routes::Route;
pub use storage::{
    Database, DraftSlotStore, DraftStore, MemoryDraftStore, PreferencesStore, SqliteDraftStore,
    UserStore, DRAFT_KEY,
};
pub use wizard::{DraftComposer, LinkField, PublishOutcome, Stage, TierSelector, Wizard};
