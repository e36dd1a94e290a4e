use jirabot_models::types::{JiraIssue, JiraUser};
use regex::Regex;

use crate::{DomainError, Result};

const PLACEHOLDER_PATTERN: &str = r"\{\{(user|issue)\.([A-Za-z_0-9]+)\}\}";

fn user_field(user: &JiraUser, field: &str) -> Result<Option<String>> {
    Ok(match field {
        "name" => user.name.clone(),
        "key" => user.key.clone(),
        "accountId" => user.account_id.clone(),
        "displayName" => Some(user.display_name.clone()),
        "emailAddress" => user.email_address.clone(),
        _ => return Err(unknown_placeholder("user", field)),
    })
}

fn issue_field(issue: &JiraIssue, field: &str) -> Result<Option<String>> {
    Ok(match field {
        "id" => issue.id.clone(),
        "key" => Some(issue.key.clone()),
        "self" => Some(issue.self_url.clone()),
        "summary" => Some(issue.fields.summary.clone()),
        "description" => issue.fields.description.clone(),
        _ => return Err(unknown_placeholder("issue", field)),
    })
}

fn unknown_placeholder(entity: &str, field: &str) -> DomainError {
    DomainError::UnknownPlaceholder {
        entity: entity.into(),
        field: field.into(),
    }
}

/// Replace `{{user.<field>}}` and `{{issue.<field>}}` placeholders.
///
/// Unknown fields and fields without value are errors.
pub fn render_template(text: &str, user: Option<&JiraUser>, issue: &JiraIssue) -> Result<String> {
    let rgx = Regex::new(PLACEHOLDER_PATTERN)?;
    let mut output = String::with_capacity(text.len());
    let mut last_end = 0;

    for captures in rgx.captures_iter(text) {
        let (whole, entity, field) = match (captures.get(0), captures.get(1), captures.get(2)) {
            (Some(w), Some(e), Some(f)) => (w, e.as_str(), f.as_str()),
            _ => continue,
        };

        let value = match (entity, user) {
            ("user", Some(user)) => user_field(user, field)?,
            ("user", None) => None,
            _ => issue_field(issue, field)?,
        };

        let value = value.ok_or_else(|| DomainError::MissingPlaceholderValue {
            entity: entity.into(),
            field: field.into(),
        })?;

        output.push_str(&text[last_end..whole.start()]);
        output.push_str(&value);
        last_end = whole.end();
    }

    output.push_str(&text[last_end..]);
    Ok(output)
}
