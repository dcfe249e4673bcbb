use serde::{Deserialize, Serialize};

/// A post as served by the upstream API. Never persisted.
///
/// Every field is optional: a null or missing value upstream is relayed as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: Option<i64>,
    pub id: Option<i64>,
    pub title: Option<String>,
    pub body: Option<String>,
}
