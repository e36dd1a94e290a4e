//! Jira webhook payloads and chat message models.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod messages;
pub mod types;
