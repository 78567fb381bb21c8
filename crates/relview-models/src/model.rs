use serde::{Deserialize, Serialize};

/// A named model source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    /// `/`-delimited path, e.g. `lib/finance/revenue`
    pub name: String,
    pub value: String,
}

impl Model {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Non-empty path segments of the name
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.name.split('/').filter(|segment| !segment.is_empty())
    }
}
