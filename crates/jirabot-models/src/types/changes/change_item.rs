use serde::{Deserialize, Serialize};

/// Jira changelog item: one modified field.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct JiraChangeItem {
    /// Field name.
    pub field: String,
    /// Field type (`jira` or `custom`).
    #[serde(rename = "fieldtype")]
    pub field_type: Option<String>,
    /// Previous value, human readable.
    #[serde(rename = "fromString")]
    pub from_value: Option<String>,
    /// New value, human readable.
    #[serde(rename = "toString")]
    pub to_value: Option<String>,
}

impl JiraChangeItem {
    /// Is this a description change?
    pub fn is_description(&self) -> bool {
        self.field == "description"
    }
}
