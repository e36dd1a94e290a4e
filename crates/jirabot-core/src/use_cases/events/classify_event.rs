use jirabot_models::types::{JiraEventEnvelope, JiraEventKind};
use shaku::{Component, Interface};

use crate::{
    outcome::{EventClassification, IgnoreReason},
    CoreContext,
};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
pub trait ClassifyEventInterface: Interface {
    fn run<'a>(&self, ctx: &CoreContext<'a>, envelope: &JiraEventEnvelope) -> EventClassification;
}

#[derive(Component)]
#[shaku(interface = ClassifyEventInterface)]
pub(crate) struct ClassifyEvent;

impl ClassifyEventInterface for ClassifyEvent {
    #[tracing::instrument(
        skip(self, ctx, envelope),
        fields(
            event = ?envelope.webhook_event,
            user = ?envelope.user_identifier()
        ),
        ret
    )]
    fn run<'a>(&self, ctx: &CoreContext<'a>, envelope: &JiraEventEnvelope) -> EventClassification {
        let kind = match &envelope.webhook_event {
            Some(kind) => kind,
            None if !envelope.has_issue() => {
                return EventClassification::Ignore(IgnoreReason::MissingIssue)
            }
            None => return EventClassification::Ignore(IgnoreReason::NoHandler),
        };

        // Link payloads never carry an issue
        if kind.is_issue_link() {
            return EventClassification::Acknowledge;
        }

        if !envelope.has_issue() {
            return EventClassification::Ignore(IgnoreReason::MissingIssue);
        }

        if envelope.user_identifier() == Some(ctx.config.excluded_source_user.as_str()) {
            return EventClassification::Ignore(IgnoreReason::ExcludedSource);
        }

        match kind {
            JiraEventKind::Unknown(_) => EventClassification::Ignore(IgnoreReason::NoHandler),
            JiraEventKind::IssueUpdated => {
                let has_changes = envelope
                    .changed_fields()
                    .any(|field| ctx.config.renders_changelog_field(field));

                if has_changes || envelope.has_comment {
                    EventClassification::Proceed
                } else {
                    EventClassification::Ignore(IgnoreReason::NoChangelogItems)
                }
            }
            _ => EventClassification::Proceed,
        }
    }
}
