use jirabot_models::{
    messages::ChatAttachment,
    types::{JiraIssue, JiraUser},
};

use crate::{utils::render_template, Result};

/// Build an attachment attributed to `user`, with placeholders resolved in `text`.
pub(crate) fn prepare_attachment(
    issue: &JiraIssue,
    user: Option<&JiraUser>,
    text: Option<&str>,
) -> Result<ChatAttachment> {
    let text = match text {
        Some(t) if !t.is_empty() => Some(render_template(t, user, issue)?),
        _ => None,
    };

    Ok(ChatAttachment {
        author_name: user.map(|u| u.display_name.clone()).unwrap_or_default(),
        author_icon: user
            .and_then(JiraUser::small_avatar_url)
            .unwrap_or_default()
            .to_owned(),
        thumb_url: issue.fields.issue_type.icon_url.clone(),
        ts: issue.fields.created.clone(),
        text,
    })
}
