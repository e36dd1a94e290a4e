use serde_json::Value;

use super::JiraEventKind;

/// Minimal view on a webhook payload, used to classify it before a full parse.
///
/// Built from any JSON value: parts with an unexpected shape read as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JiraEventEnvelope {
    /// Event kind.
    pub webhook_event: Option<JiraEventKind>,
    /// Issue key.
    pub issue_key: Option<String>,
    /// Acting user identifier: username, or account ID when there is none.
    pub user_id: Option<String>,
    /// Is a comment attached?
    pub has_comment: bool,
    /// Changed fields, in payload order.
    pub changed_fields: Vec<String>,
}

fn str_at<'v>(value: &'v Value, key: &str) -> Option<&'v str> {
    value.get(key).and_then(Value::as_str)
}

impl From<&Value> for JiraEventEnvelope {
    fn from(value: &Value) -> Self {
        let user = value.get("user");
        let changed_fields = value
            .get("changelog")
            .and_then(|c| c.get("items"))
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|i| str_at(i, "field"))
                    .map(ToOwned::to_owned)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            webhook_event: str_at(value, "webhookEvent").map(JiraEventKind::from),
            issue_key: value
                .get("issue")
                .and_then(|i| str_at(i, "key"))
                .map(ToOwned::to_owned),
            user_id: user
                .and_then(|u| str_at(u, "name").or_else(|| str_at(u, "accountId")))
                .map(ToOwned::to_owned),
            has_comment: value.get("comment").map_or(false, |c| !c.is_null()),
            changed_fields,
        }
    }
}

impl JiraEventEnvelope {
    /// Does the payload carry an issue with a key?
    pub fn has_issue(&self) -> bool {
        self.issue_key.as_deref().map_or(false, |k| !k.is_empty())
    }

    /// Changed fields, in payload order.
    pub fn changed_fields(&self) -> impl Iterator<Item = &str> {
        self.changed_fields.iter().map(String::as_str)
    }

    /// Identifier of the acting user, if any.
    pub fn user_identifier(&self) -> Option<&str> {
        self.user_id.as_deref()
    }
}
