//! Processing outcomes.

use jirabot_models::messages::{ChatMessage, HookResponse};

/// Why an event was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// No issue in payload.
    MissingIssue,
    /// Event sent by the excluded source user.
    ExcludedSource,
    /// Issue update without changes nor comment.
    NoChangelogItems,
    /// Unsupported event kind.
    NoHandler,
    /// Rendering produced nothing.
    NothingToRender,
}

impl IgnoreReason {
    /// Convert reason to static str.
    pub fn to_str(self) -> &'static str {
        match self {
            Self::MissingIssue => "Not enough info on issue.",
            Self::ExcludedSource => "Event sent by excluded source user.",
            Self::NoChangelogItems => "No change log items.",
            Self::NoHandler => "No handler for the event.",
            Self::NothingToRender => "Nothing to render.",
        }
    }
}

impl std::fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}

/// Event classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventClassification {
    /// Render the event.
    Proceed,
    /// Acknowledge without message.
    Acknowledge,
    /// Drop the event.
    Ignore(IgnoreReason),
}

/// Outcome of an incoming request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookOutcome {
    /// Message to post.
    Message(ChatMessage),
    /// Acknowledged, nothing to post.
    Acknowledged,
    /// Ignored.
    Ignored(IgnoreReason),
    /// Failed, with a message for diagnostics.
    Failed(String),
}

impl HookOutcome {
    /// Convert outcome to the hook response. Ignored events have none.
    pub fn into_response(self) -> Option<HookResponse> {
        match self {
            Self::Message(content) => Some(HookResponse::Content { content }),
            Self::Acknowledged => Some(HookResponse::Acknowledged {}),
            Self::Ignored(_) => None,
            Self::Failed(message) => Some(HookResponse::error(message)),
        }
    }
}
