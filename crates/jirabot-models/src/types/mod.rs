//! Jira webhook types.

mod changes;
mod comments;
mod common;
mod events;
mod issues;

pub use changes::{JiraChangeItem, JiraChangelog};
pub use comments::JiraComment;
pub use common::{JiraAvatarUrls, JiraUser};
pub use events::{
    IncomingRequest, JiraEventEnvelope, JiraEventKind, JiraWebhookEvent,
};
pub use issues::{JiraIssue, JiraIssueFields, JiraIssueType, JiraPriority, JiraProject};
