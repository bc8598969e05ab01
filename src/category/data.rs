use serde::{Deserialize, Serialize};

pub type CategoryID = i64;

/// Category every todo falls back to; conventionally named "All".
pub const DEFAULT_CATEGORY_ID: CategoryID = 1;
pub const DEFAULT_CATEGORY_NAME: &str = "All";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryID,
    pub name: String,
}

#[derive(Deserialize, Debug, Default)]
pub struct CategoryRequest {
    #[serde(default)]
    pub name: Option<String>,
}

#[cfg(test)]
impl CategoryRequest {
    pub fn named(name: &str) -> CategoryRequest {
        CategoryRequest {
            name: Some(name.to_string()),
        }
    }
}
