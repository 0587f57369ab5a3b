//! Event authoring wizard
//!
//! Two stages share one draft store: the composer writes the draft on
//! submit, the tier selector reads it back, and a successful publish clears
//! it. A failed publish leaves the store alone so the user can retry.
//!
//! ```text
//! Composing --submit(valid)--> Selecting(free)
//! Selecting --confirm ok-----> Published   (store cleared, /events)
//! Selecting --confirm err----> Selecting   (store kept)
//! Selecting --back-----------> Composing   (store kept, links dropped)
//! open selector, empty store -> Composing  (/add-event)
//! ```

mod composer;
mod selector;

pub use composer::DraftComposer;
pub use selector::{LinkField, TierSelector};

use tracing::{info, instrument, warn};

use crate::error::{Error, PublishError, Result};
use crate::models::{EventId, FinalizedEvent};
use crate::publish::EventPublisher;
use crate::routes::Route;
use crate::storage::DraftStore;

/// Where the wizard currently is
#[derive(Debug, Clone)]
pub enum Stage {
    Composing(DraftComposer),
    Selecting(TierSelector),
    Published(EventId),
}

impl Stage {
    pub fn route(&self) -> Route {
        match self {
            Stage::Composing(_) => Route::AddEvent,
            Stage::Selecting(_) => Route::PublishOptions,
            Stage::Published(_) => Route::Events,
        }
    }
}

/// Result of confirming on the publish page
#[derive(Debug, Clone)]
pub enum PublishOutcome {
    Published { id: EventId, event: FinalizedEvent },
    /// The draft is still stored; confirm can be retried
    Failed(PublishError),
}

impl PublishOutcome {
    /// Page to show next
    pub fn route(&self) -> Route {
        match self {
            PublishOutcome::Published { .. } => Route::Events,
            PublishOutcome::Failed(_) => Route::PublishOptions,
        }
    }

    pub fn is_published(&self) -> bool {
        matches!(self, PublishOutcome::Published { .. })
    }
}

/// Drives one authoring session across the composer and the publish page
pub struct Wizard<S, P> {
    store: S,
    publisher: P,
    stage: Stage,
}

impl<S: DraftStore, P: EventPublisher> Wizard<S, P> {
    pub fn new(store: S, publisher: P) -> Self {
        Self {
            store,
            publisher,
            stage: Stage::Composing(DraftComposer::new()),
        }
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn route(&self) -> Route {
        self.stage.route()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn publisher(&self) -> &P {
        &self.publisher
    }

    pub fn composer(&self) -> Option<&DraftComposer> {
        match &self.stage {
            Stage::Composing(composer) => Some(composer),
            _ => None,
        }
    }

    pub fn composer_mut(&mut self) -> Option<&mut DraftComposer> {
        match &mut self.stage {
            Stage::Composing(composer) => Some(composer),
            _ => None,
        }
    }

    pub fn selector(&self) -> Option<&TierSelector> {
        match &self.stage {
            Stage::Selecting(selector) => Some(selector),
            _ => None,
        }
    }

    pub fn selector_mut(&mut self) -> Option<&mut TierSelector> {
        match &mut self.stage {
            Stage::Selecting(selector) => Some(selector),
            _ => None,
        }
    }

    /// Load the add-event page with an empty form
    pub fn open_composer(&mut self) -> Route {
        self.stage = Stage::Composing(DraftComposer::new());
        Route::AddEvent
    }

    /// Load the publish page. Without a stored draft this redirects to the
    /// composer and leaves the store untouched.
    pub fn open_selector(&mut self) -> Result<Route> {
        match self.store.load()? {
            Some(draft) => {
                info!(name = %draft.name, "Publish options opened");
                self.stage = Stage::Selecting(TierSelector::new(draft));
                Ok(Route::PublishOptions)
            }
            None => {
                warn!("No stored draft, redirecting to composer");
                Ok(self.open_composer())
            }
        }
    }

    /// Handle navigation to a wizard page; other routes pass through
    pub fn navigate(&mut self, route: &Route) -> Result<Route> {
        match route {
            Route::AddEvent => Ok(self.open_composer()),
            Route::PublishOptions => self.open_selector(),
            other => Ok(other.clone()),
        }
    }

    /// Store the composed draft and move to the publish page
    #[instrument(skip(self))]
    pub fn submit_draft(&mut self) -> Result<Route> {
        let composer = self
            .composer()
            .ok_or_else(|| Error::InvalidOperation("not on the add-event page".into()))?;
        composer.validate()?;

        let draft = composer.snapshot();
        self.store.save(&draft)?;
        info!(name = %draft.name, "Draft stored");

        // The publish page only ever sees what went through the store
        self.open_selector()
    }

    /// Return to the composer. The stored draft is kept and reloaded into the
    /// form; extra links entered on the publish page are dropped.
    pub fn back(&mut self) -> Result<Route> {
        if !matches!(self.stage, Stage::Selecting(_)) {
            return Err(Error::InvalidOperation("not on the publish page".into()));
        }
        let composer = match self.store.load()? {
            Some(draft) => DraftComposer::from_draft(draft),
            None => DraftComposer::new(),
        };
        self.stage = Stage::Composing(composer);
        Ok(Route::AddEvent)
    }

    /// Finalize and publish. On success the store is cleared; on failure the
    /// stage and store are left as they were. A stored draft that is missing
    /// required fields is rejected before anything is sent.
    #[instrument(skip(self))]
    pub async fn confirm(&mut self) -> Result<PublishOutcome> {
        let selector = match &self.stage {
            Stage::Selecting(selector) => selector,
            _ => return Err(Error::InvalidOperation("not on the publish page".into())),
        };
        selector.draft().validate()?;

        let event = selector.finalize();
        match self.publisher.submit_draft(&event).await {
            Ok(id) => {
                self.store.clear()?;
                info!(event_id = %id, tier = %event.publishing_type, "Event finalized");
                self.stage = Stage::Published(id);
                Ok(PublishOutcome::Published { id, event })
            }
            Err(e) => {
                warn!(error = %e, "Publish failed, draft kept for retry");
                Ok(PublishOutcome::Failed(e))
            }
        }
    }
}
