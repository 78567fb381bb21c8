//! Records returned by the console backend

use chrono::{DateTime, Utc};
use relview_models::{IdbEntry, Model, ModelTree};
use relview_output::DisplayMode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineState {
    Provisioning,
    Ready,
    Suspended,
    Deleting,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engine {
    pub name: String,
    pub size: String,
    pub state: EngineState,
    pub created_by: Option<String>,
}

impl Engine {
    pub fn is_ready(&self) -> bool {
        self.state == EngineState::Ready
    }
}

/// A saved query with the display preferences of its result pane
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worksheet {
    pub id: Uuid,
    pub name: String,
    pub database: String,
    pub engine: Option<String>,
    pub query: String,
    #[serde(default)]
    pub display_mode: DisplayMode,
    pub updated_at: DateTime<Utc>,
}

impl Worksheet {
    pub fn new(name: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            database: database.into(),
            engine: None,
            query: String::new(),
            display_mode: DisplayMode::default(),
            updated_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Active,
    Inactive,
    Invited,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub status: UserStatus,
    #[serde(default)]
    pub roles: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub read: bool,
}

impl Notification {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            body: body.into(),
            created_at: Utc::now(),
            read: false,
        }
    }
}

/// An action the current user may perform on a resource
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Permission {
    pub resource: String,
    pub action: String,
}

impl Permission {
    pub fn new(resource: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            action: action.into(),
        }
    }
}

/// The models of a database, with Idb annotations keyed by model name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelCatalog {
    pub models: Vec<Model>,
    #[serde(default)]
    pub idbs: HashMap<String, Vec<IdbEntry>>,
}

impl ModelCatalog {
    pub fn new(models: Vec<Model>) -> Self {
        Self {
            models,
            idbs: HashMap::new(),
        }
    }

    pub fn tree(&self) -> ModelTree {
        ModelTree::build(&self.models, &self.idbs)
    }
}
