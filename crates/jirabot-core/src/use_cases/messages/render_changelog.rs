use jirabot_models::types::{JiraChangeItem, JiraChangelog};
use shaku::{Component, Interface};

use crate::{utils::truncate, CoreContext};

const EMPTY_VALUE: &str = "_none_";

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
pub trait RenderChangelogInterface: Interface {
    /// Render the changelog as a bullet list, or nothing when no item is rendered.
    fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        issue_summary: &str,
        changelog: &JiraChangelog,
    ) -> Option<String>;
}

#[derive(Component)]
#[shaku(interface = RenderChangelogInterface)]
pub(crate) struct RenderChangelog;

impl RenderChangelogInterface for RenderChangelog {
    #[tracing::instrument(skip(self, ctx, changelog), fields(items = changelog.items.len()))]
    fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        issue_summary: &str,
        changelog: &JiraChangelog,
    ) -> Option<String> {
        let lines: Vec<String> = changelog
            .items
            .iter()
            .filter(|item| ctx.config.renders_changelog_field(&item.field))
            .map(|item| Self::render_item(ctx, item))
            .collect();

        if lines.is_empty() {
            None
        } else {
            Some(format!(
                "*Updated* {}:\n  - {}",
                issue_summary,
                lines.join("\n  - ")
            ))
        }
    }
}

impl RenderChangelog {
    fn render_item(ctx: &CoreContext, item: &JiraChangeItem) -> String {
        if item.is_description() {
            format!(
                "Changed *description* to:\n```\n{}\n```",
                truncate(
                    item.to_value.as_deref(),
                    ctx.config.render.description_max_length
                )
            )
        } else {
            format!(
                "*{}* changed from {} to *{}*",
                item.field,
                item.from_value.as_deref().unwrap_or(EMPTY_VALUE),
                item.to_value.as_deref().unwrap_or(EMPTY_VALUE)
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::context::tests::CoreContextTest;

    fn item(field: &str, from: Option<&str>, to: Option<&str>) -> JiraChangeItem {
        JiraChangeItem {
            field: field.into(),
            field_type: Some("jira".into()),
            from_value: from.map(Into::into),
            to_value: to.map(Into::into),
        }
    }

    #[test]
    fn run_empty_changelog() {
        let ctx = CoreContextTest::new();

        assert_eq!(
            RenderChangelog.run(&ctx.as_context(), "SUMMARY", &JiraChangelog::default()),
            None
        );
    }

    #[test]
    fn run_single_item() {
        let ctx = CoreContextTest::new();
        let changelog = JiraChangelog {
            id: None,
            items: vec![item("status", Some("Open"), Some("Done"))],
        };

        assert_eq!(
            RenderChangelog.run(&ctx.as_context(), "SUMMARY", &changelog),
            Some("*Updated* SUMMARY:\n  - *status* changed from Open to *Done*".into())
        );
    }

    #[test]
    fn run_multiple_items() {
        let ctx = CoreContextTest::new();
        let long_description = "d".repeat(300);
        let changelog = JiraChangelog {
            id: None,
            items: vec![
                item("assignee", None, Some("Bob Smith")),
                item("description", Some("old"), Some(&long_description)),
                item("labels", Some("backend"), Some("backend frontend")),
            ],
        };

        assert_eq!(
            RenderChangelog.run(&ctx.as_context(), "SUMMARY", &changelog),
            Some(format!(
                "*Updated* SUMMARY:\n  \
                - *assignee* changed from _none_ to *Bob Smith*\n  \
                - Changed *description* to:\n```\n{}...\n```\n  \
                - *labels* changed from backend to *backend frontend*",
                "d".repeat(137)
            ))
        );
    }

    #[test]
    fn run_with_field_filter() {
        let mut ctx = CoreContextTest::new();
        ctx.config.render.changelog_fields = vec!["status".into(), "resolution".into()];

        let changelog = JiraChangelog {
            id: None,
            items: vec![
                item("labels", Some("a"), Some("b")),
                item("resolution", None, Some("Fixed")),
            ],
        };

        assert_eq!(
            RenderChangelog.run(&ctx.as_context(), "SUMMARY", &changelog),
            Some("*Updated* SUMMARY:\n  - *resolution* changed from _none_ to *Fixed*".into())
        );

        let changelog = JiraChangelog {
            id: None,
            items: vec![item("labels", Some("a"), Some("b"))],
        };
        assert_eq!(
            RenderChangelog.run(&ctx.as_context(), "SUMMARY", &changelog),
            None
        );
    }
}
