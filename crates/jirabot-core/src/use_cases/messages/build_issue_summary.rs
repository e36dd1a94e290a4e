use jirabot_models::types::JiraWebhookEvent;
use shaku::{Component, Interface};

use crate::{utils::strip_priority_prefix, CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
pub trait BuildIssueSummaryInterface: Interface {
    fn run<'a>(&self, ctx: &CoreContext<'a>, event: &JiraWebhookEvent) -> Result<String>;
}

#[derive(Component)]
#[shaku(interface = BuildIssueSummaryInterface)]
pub(crate) struct BuildIssueSummary;

impl BuildIssueSummaryInterface for BuildIssueSummary {
    #[tracing::instrument(skip(self, _ctx, event), fields(issue_key = %event.issue.key), ret)]
    fn run<'a>(&self, _ctx: &CoreContext<'a>, event: &JiraWebhookEvent) -> Result<String> {
        let issue = &event.issue;
        let user_identifier = event.user.as_ref().and_then(|u| u.identifier());

        let assigned_to = match &issue.fields.assignee {
            Some(assignee) if assignee.identifier() != user_identifier => {
                format!(", assigned to {}", assignee.display_name)
            }
            _ => String::new(),
        };

        Ok(format!(
            "[{key}]({url}) {summary} _({priority}{assigned_to})_",
            key = issue.key,
            url = issue.browse_url(),
            summary = issue.fields.summary,
            priority = strip_priority_prefix(&issue.fields.priority.name)?
        ))
    }
}
