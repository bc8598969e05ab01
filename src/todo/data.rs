use serde::{Deserialize, Deserializer, Serialize};

use crate::category::data::CategoryID;

pub type TodoID = i64;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoID,
    pub title: String,
    pub description: String,
    pub due_date: Option<String>,
    /// Set once on creation; doubles as the optimistic-concurrency token.
    pub created_date: String,
    pub category_id: CategoryID,
    pub completed: bool,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub category_id: Option<CategoryID>,
}

/// Partial update. Absent fields are left untouched.
///
/// `title` and `due_date` keep an explicit `null` apart from an absent
/// field: `Some(None)` means the caller sent `null`.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoRequest {
    #[serde(default, deserialize_with = "deserialize_present")]
    pub title: Option<Option<String>>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub due_date: Option<Option<String>>,
    #[serde(default)]
    pub completed: Option<bool>,
    #[serde(default)]
    pub category_id: Option<CategoryID>,
    #[serde(default)]
    pub created_date: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MoveTodoRequest {
    pub category_id: CategoryID,
    pub created_date: String,
}

fn deserialize_present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}
