use std::{
    io::{Read, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use jirabot_core::use_cases::events::ProcessIncomingRequestInterface;
use jirabot_models::types::IncomingRequest;
use shaku::HasComponent;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

const STDIN_PATH: &str = "-";

/// Render a webhook request and print the hook response
#[derive(Parser)]
pub(crate) struct RenderCommand {
    /// Request file, stdin when omitted or `-`
    path: Option<PathBuf>,
    /// Input is a bare Jira event, not wrapped in `{"content": ...}`
    #[arg(long)]
    content: bool,
    /// Pretty-print the response
    #[arg(long)]
    pretty: bool,
}

impl RenderCommand {
    fn read_input(&self, ctx: &mut CommandContext) -> Result<String> {
        match &self.path {
            Some(path) if path.as_os_str() != STDIN_PATH => std::fs::read_to_string(path)
                .with_context(|| format!("Could not read request file {}", path.display())),
            _ => {
                let mut input = String::new();
                ctx.reader
                    .read_to_string(&mut input)
                    .context("Could not read request from stdin")?;
                Ok(input)
            }
        }
    }

    fn parse_request(&self, input: &str) -> Result<IncomingRequest> {
        let request = if self.content {
            IncomingRequest {
                content: serde_json::from_str(input)?,
            }
        } else {
            serde_json::from_str(input)?
        };

        Ok(request)
    }
}

impl Command for RenderCommand {
    fn execute(self, mut ctx: CommandContext) -> Result<()> {
        let input = self.read_input(&mut ctx)?;
        let request = self
            .parse_request(&input)
            .context("Input is not valid JSON")?;

        let process_incoming_request: &dyn ProcessIncomingRequestInterface =
            ctx.core_module.resolve_ref();
        let response = process_incoming_request
            .run(&ctx.as_core_context(), &request)
            .into_response();

        let output = if self.pretty {
            serde_json::to_string_pretty(&response)?
        } else {
            serde_json::to_string(&response)?
        };

        writeln!(ctx.writer()?, "{}", output)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    use crate::testutils::{test_command, test_command_with_input, CommandContextTest};

    const CREATED_EVENT: &str = r#"{
        "webhookEvent": "jira:issue_created",
        "user": {"name": "alice", "displayName": "Alice"},
        "issue": {
            "self": "https://jira.local/rest/api/2/issue/10001",
            "key": "PRJ-1",
            "fields": {
                "summary": "Fix login",
                "priority": {"name": "1. High"},
                "issuetype": {"iconUrl": "https://jira.local/bug.png"},
                "description": "Login fails"
            }
        }
    }"#;

    #[test]
    fn test_render_request_from_stdin() {
        let input = format!(r#"{{"content": {}}}"#, CREATED_EVENT);
        let output = test_command_with_input(CommandContextTest::new(), &["render"], &input);

        let response: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            response["content"]["attachments"][0]["text"],
            json!("*Created* [PRJ-1](https://jira.local/browse/PRJ-1) Fix login _(High)_:\nLogin fails")
        );
        assert_eq!(response["content"]["attachments"][0]["author_name"], json!("Alice"));
    }

    #[test]
    fn test_render_bare_content() {
        let output = test_command_with_input(
            CommandContextTest::new(),
            &["render", "-", "--content"],
            CREATED_EVENT,
        );

        let response: Value = serde_json::from_str(&output).unwrap();
        assert!(response["content"]["icon_url"]
            .as_str()
            .unwrap()
            .starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_render_ignored() {
        let output = test_command_with_input(
            CommandContextTest::new(),
            &["render", "--content"],
            r#"{"webhookEvent": "jira:issue_created"}"#,
        );

        assert_eq!(output, "null\n");
    }

    #[test]
    fn test_render_issue_link_pretty() {
        let output = test_command_with_input(
            CommandContextTest::new(),
            &["render", "--content", "--pretty"],
            r#"{"webhookEvent": "issuelink_deleted"}"#,
        );

        assert_eq!(output, "{}\n");
    }

    #[test]
    fn test_render_missing_file() {
        let result = test_command(
            CommandContextTest::new(),
            &["render", "/nonexistent/jirabot/request.json"],
        );

        assert!(result.is_err());
    }
}
