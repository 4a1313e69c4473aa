use serde::Serialize;

use super::content_node::ContentNode;

/// One pricing tier as served to the front end.
///
/// Built fresh from the Notion database on every request; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub features: Vec<String>,
    pub recommended: bool,
    pub service_details: Vec<ContentNode>,
}
