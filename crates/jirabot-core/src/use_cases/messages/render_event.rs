use jirabot_models::{
    messages::ChatMessage,
    types::{JiraEventKind, JiraProject, JiraWebhookEvent},
};
use shaku::{Component, HasComponent, Interface};

use super::{
    attachment::prepare_attachment, BuildIssueSummaryInterface, CommentAction,
    RenderChangelogInterface, RenderCommentInterface,
};
use crate::{utils::truncate, CoreContext, DomainError, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
pub trait RenderEventInterface: Interface {
    fn run<'a>(&self, ctx: &CoreContext<'a>, event: &JiraWebhookEvent) -> Result<ChatMessage>;
}

#[derive(Component)]
#[shaku(interface = RenderEventInterface)]
pub(crate) struct RenderEvent;

impl RenderEventInterface for RenderEvent {
    #[tracing::instrument(skip(self, ctx, event), fields(
        event = %event.webhook_event,
        issue_key = %event.issue.key
    ))]
    fn run<'a>(&self, ctx: &CoreContext<'a>, event: &JiraWebhookEvent) -> Result<ChatMessage> {
        let issue = &event.issue;
        let user = event.user.as_ref();

        let build_issue_summary: &dyn BuildIssueSummaryInterface = ctx.core_module.resolve_ref();
        let issue_summary = build_issue_summary.run(ctx, event)?;

        let icon_url = issue
            .fields
            .project
            .as_ref()
            .and_then(JiraProject::large_avatar_url)
            .unwrap_or(ctx.config.render.fallback_icon_url.as_str());
        let mut message = ChatMessage::new(icon_url);

        match &event.webhook_event {
            JiraEventKind::IssueCreated => {
                let text = format!(
                    "*Created* {}:\n{}",
                    issue_summary,
                    truncate(
                        issue.fields.description.as_deref(),
                        ctx.config.render.description_max_length
                    )
                );
                message
                    .attachments
                    .push(prepare_attachment(issue, user, Some(&text))?);
            }
            JiraEventKind::IssueDeleted => {
                let text = format!("*Deleted* {}", issue_summary);
                message
                    .attachments
                    .push(prepare_attachment(issue, user, Some(&text))?);
            }
            JiraEventKind::IssueUpdated => {
                if let Some(changelog) = &event.changelog {
                    let render_changelog: &dyn RenderChangelogInterface =
                        ctx.core_module.resolve_ref();
                    if let Some(text) = render_changelog.run(ctx, &issue_summary, changelog) {
                        message
                            .attachments
                            .push(prepare_attachment(issue, user, Some(&text))?);
                    }
                }

                if let Some(comment) = &event.comment {
                    let render_comment: &dyn RenderCommentInterface =
                        ctx.core_module.resolve_ref();
                    let text = render_comment.run(
                        ctx,
                        &issue_summary,
                        comment,
                        CommentAction::from_timestamps(comment),
                    );
                    message
                        .attachments
                        .push(prepare_attachment(issue, user, Some(&text))?);
                }
            }
            JiraEventKind::CommentCreated
            | JiraEventKind::CommentUpdated
            | JiraEventKind::CommentDeleted => {
                let action = match event.webhook_event {
                    JiraEventKind::CommentCreated => CommentAction::Created,
                    JiraEventKind::CommentUpdated => CommentAction::Updated,
                    _ => CommentAction::Deleted,
                };
                let comment = event
                    .comment
                    .as_ref()
                    .ok_or_else(|| DomainError::MissingField {
                        field: "comment".into(),
                    })?;

                let render_comment: &dyn RenderCommentInterface = ctx.core_module.resolve_ref();
                let text = render_comment.run(ctx, &issue_summary, comment, action);

                // Comment author takes over attribution.
                message.attachments.push(prepare_attachment(
                    issue,
                    comment.author.as_ref(),
                    Some(&text),
                )?);
            }
            JiraEventKind::IssueLinkCreated
            | JiraEventKind::IssueLinkDeleted
            | JiraEventKind::Unknown(_) => (),
        }

        Ok(message)
    }
}
