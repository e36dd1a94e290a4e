use jirabot_models::types::JiraComment;
use shaku::{Component, Interface};

use crate::{utils::truncate, CoreContext};

/// Comment action, as shown in the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentAction {
    /// Created.
    Created,
    /// Updated.
    Updated,
    /// Deleted.
    Deleted,
}

impl CommentAction {
    /// Convert action to static str.
    pub fn to_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Deleted => "deleted",
        }
    }

    /// Action for a comment attached to an issue update.
    pub fn from_timestamps(comment: &JiraComment) -> Self {
        if comment.is_edited() {
            Self::Updated
        } else {
            Self::Created
        }
    }
}

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
pub trait RenderCommentInterface: Interface {
    fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        issue_summary: &str,
        comment: &JiraComment,
        action: CommentAction,
    ) -> String;
}

#[derive(Component)]
#[shaku(interface = RenderCommentInterface)]
pub(crate) struct RenderComment;

impl RenderCommentInterface for RenderComment {
    #[tracing::instrument(skip(self, ctx, comment), fields(comment_id = ?comment.id))]
    fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        issue_summary: &str,
        comment: &JiraComment,
        action: CommentAction,
    ) -> String {
        let authoring = match &comment.author {
            Some(author) if !author.display_name.is_empty() => {
                format!(" by {}", author.display_name)
            }
            _ => String::new(),
        };

        format!(
            "Comment {action} for {issue_summary}:\n```\n{body}\n```\n{authoring}",
            action = action.to_str(),
            body = truncate(
                comment.body.as_deref(),
                ctx.config.render.description_max_length
            ),
        )
    }
}
