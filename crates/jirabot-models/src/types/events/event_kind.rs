use serde::{Deserialize, Serialize};

/// Jira webhook event kind, from the `webhookEvent` tag.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum JiraEventKind {
    /// Issue created.
    IssueCreated,
    /// Issue updated.
    IssueUpdated,
    /// Issue deleted.
    IssueDeleted,
    /// Comment created.
    CommentCreated,
    /// Comment updated.
    CommentUpdated,
    /// Comment deleted.
    CommentDeleted,
    /// Issue link created.
    IssueLinkCreated,
    /// Issue link deleted.
    IssueLinkDeleted,
    /// Any other tag.
    Unknown(String),
}

impl JiraEventKind {
    /// Get the raw event tag.
    pub fn as_str(&self) -> &str {
        match self {
            Self::IssueCreated => "jira:issue_created",
            Self::IssueUpdated => "jira:issue_updated",
            Self::IssueDeleted => "jira:issue_deleted",
            Self::CommentCreated => "comment_created",
            Self::CommentUpdated => "comment_updated",
            Self::CommentDeleted => "comment_deleted",
            Self::IssueLinkCreated => "issuelink_created",
            Self::IssueLinkDeleted => "issuelink_deleted",
            Self::Unknown(tag) => tag,
        }
    }

    /// Is it an issue link event?
    pub fn is_issue_link(&self) -> bool {
        matches!(self, Self::IssueLinkCreated | Self::IssueLinkDeleted)
    }
}

impl std::fmt::Display for JiraEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for JiraEventKind {
    fn from(value: &str) -> Self {
        match value {
            "jira:issue_created" => Self::IssueCreated,
            "jira:issue_updated" => Self::IssueUpdated,
            "jira:issue_deleted" => Self::IssueDeleted,
            "comment_created" => Self::CommentCreated,
            "comment_updated" => Self::CommentUpdated,
            "comment_deleted" => Self::CommentDeleted,
            "issuelink_created" => Self::IssueLinkCreated,
            "issuelink_deleted" => Self::IssueLinkDeleted,
            other => Self::Unknown(other.to_owned()),
        }
    }
}

impl From<String> for JiraEventKind {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<JiraEventKind> for String {
    fn from(kind: JiraEventKind) -> Self {
        kind.as_str().to_owned()
    }
}
