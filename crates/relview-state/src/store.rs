//! The state store and its backend seam

use crate::entities::{Account, Engine, ModelCatalog, Notification, Permission, User, Worksheet};
use crate::error::BackendResult;
use crate::reducer::{Action, ConsoleState, Payload, ResourceKind, reduce};
use relview_models::ModelTree;

/// Console API as seen by the store
pub trait ConsoleBackend {
    fn list_accounts(&self) -> BackendResult<Vec<Account>>;

    fn list_engines(&self) -> BackendResult<Vec<Engine>>;

    fn list_worksheets(&self) -> BackendResult<Vec<Worksheet>>;

    fn list_models(&self) -> BackendResult<ModelCatalog>;

    fn list_users(&self) -> BackendResult<Vec<User>>;

    fn list_notifications(&self) -> BackendResult<Vec<Notification>>;

    fn list_permissions(&self) -> BackendResult<Vec<Permission>>;
}

fn request(backend: &dyn ConsoleBackend, kind: ResourceKind) -> BackendResult<Payload> {
    Ok(match kind {
        ResourceKind::Accounts => Payload::Accounts(backend.list_accounts()?),
        ResourceKind::Engines => Payload::Engines(backend.list_engines()?),
        ResourceKind::Worksheets => Payload::Worksheets(backend.list_worksheets()?),
        ResourceKind::Models => Payload::Models(backend.list_models()?),
        ResourceKind::Users => Payload::Users(backend.list_users()?),
        ResourceKind::Notifications => Payload::Notifications(backend.list_notifications()?),
        ResourceKind::Permissions => Payload::Permissions(backend.list_permissions()?),
    })
}

/// Owner of the console state
#[derive(Debug, Default)]
pub struct Store {
    state: ConsoleState,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: ConsoleState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &ConsoleState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) {
        self.state = reduce(std::mem::take(&mut self.state), action);
    }

    /// Load one resource through `backend`
    ///
    /// Returns `false` without contacting the backend when a request for the
    /// same resource is already in flight. Backend errors are recorded on the
    /// resource.
    pub fn fetch(&mut self, kind: ResourceKind, backend: &dyn ConsoleBackend) -> bool {
        if self.state.is_loading(kind) {
            tracing::debug!(resource = %kind, "request already in flight, skipping");
            return false;
        }

        self.dispatch(Action::Requested(kind));
        match request(backend, kind) {
            Ok(payload) => {
                tracing::debug!(resource = %kind, "resource loaded");
                self.dispatch(Action::Loaded(payload));
            }
            Err(e) => {
                tracing::warn!(resource = %kind, error = %e, "resource request failed");
                self.dispatch(Action::Failed(kind, e.to_string()));
            }
        }
        true
    }

    /// Fetch every resource kind, returning how many requests were issued
    pub fn refresh_all(&mut self, backend: &dyn ConsoleBackend) -> usize {
        ResourceKind::ALL
            .into_iter()
            .filter(|kind| self.fetch(*kind, backend))
            .count()
    }

    /// Folder tree of the loaded models; empty until models are loaded
    pub fn model_tree(&self) -> ModelTree {
        self.state
            .models
            .data()
            .map(ModelCatalog::tree)
            .unwrap_or_else(|| ModelTree::from_models(&[]))
    }
}
