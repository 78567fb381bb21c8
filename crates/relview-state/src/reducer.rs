//! Console state and its transitions

use crate::entities::{
    Account, Engine, ModelCatalog, Notification, Permission, User, Worksheet,
};
use crate::resource::Resource;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The remote collections held in [`ConsoleState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Accounts,
    Engines,
    Worksheets,
    Models,
    Users,
    Notifications,
    Permissions,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 7] = [
        ResourceKind::Accounts,
        ResourceKind::Engines,
        ResourceKind::Worksheets,
        ResourceKind::Models,
        ResourceKind::Users,
        ResourceKind::Notifications,
        ResourceKind::Permissions,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Accounts => "accounts",
            ResourceKind::Engines => "engines",
            ResourceKind::Worksheets => "worksheets",
            ResourceKind::Models => "models",
            ResourceKind::Users => "users",
            ResourceKind::Notifications => "notifications",
            ResourceKind::Permissions => "permissions",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A successfully loaded collection
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Accounts(Vec<Account>),
    Engines(Vec<Engine>),
    Worksheets(Vec<Worksheet>),
    Models(ModelCatalog),
    Users(Vec<User>),
    Notifications(Vec<Notification>),
    Permissions(Vec<Permission>),
}

impl Payload {
    pub fn kind(&self) -> ResourceKind {
        match self {
            Payload::Accounts(_) => ResourceKind::Accounts,
            Payload::Engines(_) => ResourceKind::Engines,
            Payload::Worksheets(_) => ResourceKind::Worksheets,
            Payload::Models(_) => ResourceKind::Models,
            Payload::Users(_) => ResourceKind::Users,
            Payload::Notifications(_) => ResourceKind::Notifications,
            Payload::Permissions(_) => ResourceKind::Permissions,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Requested(ResourceKind),
    Loaded(Payload),
    Failed(ResourceKind, String),
    NotificationRead(Uuid),
    WorksheetUpdated(Worksheet),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConsoleState {
    pub accounts: Resource<Vec<Account>>,
    pub engines: Resource<Vec<Engine>>,
    pub worksheets: Resource<Vec<Worksheet>>,
    pub models: Resource<ModelCatalog>,
    pub users: Resource<Vec<User>>,
    pub notifications: Resource<Vec<Notification>>,
    pub permissions: Resource<Vec<Permission>>,
}

impl ConsoleState {
    pub fn is_loading(&self, kind: ResourceKind) -> bool {
        match kind {
            ResourceKind::Accounts => self.accounts.loading,
            ResourceKind::Engines => self.engines.loading,
            ResourceKind::Worksheets => self.worksheets.loading,
            ResourceKind::Models => self.models.loading,
            ResourceKind::Users => self.users.loading,
            ResourceKind::Notifications => self.notifications.loading,
            ResourceKind::Permissions => self.permissions.loading,
        }
    }

    pub fn error(&self, kind: ResourceKind) -> Option<&str> {
        match kind {
            ResourceKind::Accounts => self.accounts.error(),
            ResourceKind::Engines => self.engines.error(),
            ResourceKind::Worksheets => self.worksheets.error(),
            ResourceKind::Models => self.models.error(),
            ResourceKind::Users => self.users.error(),
            ResourceKind::Notifications => self.notifications.error(),
            ResourceKind::Permissions => self.permissions.error(),
        }
    }

    pub fn unread_notifications(&self) -> usize {
        self.notifications
            .data()
            .map(|items| items.iter().filter(|n| !n.read).count())
            .unwrap_or(0)
    }

    pub fn can(&self, resource: &str, action: &str) -> bool {
        self.permissions.data().is_some_and(|permissions| {
            permissions
                .iter()
                .any(|p| p.resource == resource && p.action == action)
        })
    }

    pub fn worksheet(&self, id: Uuid) -> Option<&Worksheet> {
        self.worksheets.data()?.iter().find(|w| w.id == id)
    }

    fn start(&mut self, kind: ResourceKind) {
        match kind {
            ResourceKind::Accounts => self.accounts.start(),
            ResourceKind::Engines => self.engines.start(),
            ResourceKind::Worksheets => self.worksheets.start(),
            ResourceKind::Models => self.models.start(),
            ResourceKind::Users => self.users.start(),
            ResourceKind::Notifications => self.notifications.start(),
            ResourceKind::Permissions => self.permissions.start(),
        }
    }

    fn fail(&mut self, kind: ResourceKind, error: String) {
        match kind {
            ResourceKind::Accounts => self.accounts.fail(error),
            ResourceKind::Engines => self.engines.fail(error),
            ResourceKind::Worksheets => self.worksheets.fail(error),
            ResourceKind::Models => self.models.fail(error),
            ResourceKind::Users => self.users.fail(error),
            ResourceKind::Notifications => self.notifications.fail(error),
            ResourceKind::Permissions => self.permissions.fail(error),
        }
    }

    fn load(&mut self, payload: Payload) {
        match payload {
            Payload::Accounts(data) => self.accounts.succeed(data),
            Payload::Engines(data) => self.engines.succeed(data),
            Payload::Worksheets(data) => self.worksheets.succeed(data),
            Payload::Models(data) => self.models.succeed(data),
            Payload::Users(data) => self.users.succeed(data),
            Payload::Notifications(data) => self.notifications.succeed(data),
            Payload::Permissions(data) => self.permissions.succeed(data),
        }
    }
}

/// Apply one action, returning the next state
pub fn reduce(mut state: ConsoleState, action: Action) -> ConsoleState {
    match action {
        Action::Requested(kind) => state.start(kind),
        Action::Loaded(payload) => state.load(payload),
        Action::Failed(kind, error) => state.fail(kind, error),
        Action::NotificationRead(id) => {
            let notification = state
                .notifications
                .data
                .as_mut()
                .and_then(|items| items.iter_mut().find(|n| n.id == id));
            match notification {
                Some(notification) => notification.read = true,
                None => tracing::debug!(notification_id = %id, "read of unknown notification ignored"),
            }
        }
        Action::WorksheetUpdated(worksheet) => {
            let worksheets = state.worksheets.data.get_or_insert_with(Vec::new);
            match worksheets.iter_mut().find(|w| w.id == worksheet.id) {
                Some(existing) => *existing = worksheet,
                None => worksheets.push(worksheet),
            }
        }
    }
    state
}
