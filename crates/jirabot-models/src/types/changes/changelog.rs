use serde::{Deserialize, Serialize};

use super::JiraChangeItem;

/// Jira changelog, attached to issue update events.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct JiraChangelog {
    /// ID.
    pub id: Option<String>,
    /// Changed fields, in order.
    #[serde(default)]
    pub items: Vec<JiraChangeItem>,
}
