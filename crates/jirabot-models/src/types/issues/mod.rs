mod issue;
mod issue_fields;

pub use issue::JiraIssue;
pub use issue_fields::{JiraIssueFields, JiraIssueType, JiraPriority, JiraProject};
