use jirabot_models::types::{IncomingRequest, JiraEventEnvelope, JiraEventKind, JiraWebhookEvent};
use serde_json::Value;
use shaku::{Component, HasComponent, Interface};
use tracing::{debug, error, info};

use super::ClassifyEventInterface;
use crate::{
    outcome::{EventClassification, HookOutcome, IgnoreReason},
    use_cases::messages::RenderEventInterface,
    CoreContext, Result,
};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
pub trait ProcessIncomingRequestInterface: Interface {
    /// Turn an incoming request into an outcome. Never fails: faults become [`HookOutcome::Failed`].
    fn run<'a>(&self, ctx: &CoreContext<'a>, request: &IncomingRequest) -> HookOutcome;
}

#[derive(Component)]
#[shaku(interface = ProcessIncomingRequestInterface)]
pub(crate) struct ProcessIncomingRequest;

impl ProcessIncomingRequestInterface for ProcessIncomingRequest {
    #[tracing::instrument(skip_all)]
    fn run<'a>(&self, ctx: &CoreContext<'a>, request: &IncomingRequest) -> HookOutcome {
        match self.process(ctx, &request.content) {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(error = %e, message = "Could not process Jira event");
                HookOutcome::Failed(format!("{} {}", e, request.content))
            }
        }
    }
}

impl ProcessIncomingRequest {
    fn process(&self, ctx: &CoreContext, content: &Value) -> Result<HookOutcome> {
        let envelope = JiraEventEnvelope::from(content);
        let tag = envelope.webhook_event.as_ref();

        let classify_event: &dyn ClassifyEventInterface = ctx.core_module.resolve_ref();
        match classify_event.run(ctx, &envelope) {
            EventClassification::Acknowledge => return Ok(HookOutcome::Acknowledged),
            EventClassification::Ignore(reason) => {
                Self::log_ignored(ctx, tag, reason, content);
                return Ok(HookOutcome::Ignored(reason));
            }
            EventClassification::Proceed => (),
        }

        let event: JiraWebhookEvent = serde_json::from_value(content.clone())?;

        let render_event: &dyn RenderEventInterface = ctx.core_module.resolve_ref();
        let message = render_event.run(ctx, &event)?;

        if message.is_empty() {
            Self::log_ignored(ctx, tag, IgnoreReason::NothingToRender, content);
            Ok(HookOutcome::Ignored(IgnoreReason::NothingToRender))
        } else {
            Ok(HookOutcome::Message(message))
        }
    }

    fn log_ignored(
        ctx: &CoreContext,
        tag: Option<&JiraEventKind>,
        reason: IgnoreReason,
        content: &Value,
    ) {
        if !ctx.config.logging.log_ignored_events {
            return;
        }

        info!(
            reason = ?reason,
            message = %ignore_message(tag, reason)
        );

        if ctx.config.logging.log_ignored_payloads {
            debug!(
                payload = %serde_json::to_string_pretty(content).unwrap_or_default(),
                message = "Ignored payload"
            );
        }
    }
}

fn ignore_message(tag: Option<&JiraEventKind>, reason: IgnoreReason) -> String {
    match tag {
        Some(tag) => format!("Jira event {}. {} Event ignored.", tag, reason),
        None => format!("{} Event ignored.", reason),
    }
}

#[cfg(test)]
mod tests {
    use jirabot_models::messages::{ChatAttachment, ChatMessage};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::{
        context::tests::CoreContextTest,
        use_cases::{events::MockClassifyEventInterface, messages::MockRenderEventInterface},
        CoreModule, DomainError,
    };

    fn request(content: Value) -> IncomingRequest {
        IncomingRequest { content }
    }

    fn created_payload() -> Value {
        json!({
            "webhookEvent": "jira:issue_created",
            "issue": {
                "self": "https://jira.local/rest/api/2/issue/10001",
                "key": "PRJ-1",
                "fields": {
                    "summary": "Fix login",
                    "priority": {"name": "1. High"},
                    "issuetype": {"iconUrl": "https://jira.local/bug.png"}
                }
            }
        })
    }

    #[test]
    fn test_ignore_message() {
        assert_eq!(
            ignore_message(
                Some(&JiraEventKind::IssueUpdated),
                IgnoreReason::NoChangelogItems
            ),
            "Jira event jira:issue_updated. No change log items. Event ignored."
        );
        assert_eq!(
            ignore_message(None, IgnoreReason::MissingIssue),
            "Not enough info on issue. Event ignored."
        );
    }

    #[test]
    fn run_acknowledge_skips_rendering() {
        let mut ctx = CoreContextTest::new();

        let classify_event = {
            let mut mock = MockClassifyEventInterface::new();
            mock.expect_run()
                .once()
                .return_once(|_, _| EventClassification::Acknowledge);
            mock
        };
        let render_event = {
            let mut mock = MockRenderEventInterface::new();
            mock.expect_run().never();
            mock
        };

        ctx.core_module = CoreModule::builder()
            .with_component_override::<dyn ClassifyEventInterface>(Box::new(classify_event))
            .with_component_override::<dyn RenderEventInterface>(Box::new(render_event))
            .build();

        assert_eq!(
            ProcessIncomingRequest.run(
                &ctx.as_context(),
                &request(json!({"webhookEvent": "issuelink_created"}))
            ),
            HookOutcome::Acknowledged
        );
    }

    #[test]
    fn run_ignore_skips_rendering() {
        let mut ctx = CoreContextTest::new();
        ctx.config.logging.log_ignored_payloads = true;

        let classify_event = {
            let mut mock = MockClassifyEventInterface::new();
            mock.expect_run()
                .once()
                .return_once(|_, _| EventClassification::Ignore(IgnoreReason::ExcludedSource));
            mock
        };
        let render_event = {
            let mut mock = MockRenderEventInterface::new();
            mock.expect_run().never();
            mock
        };

        ctx.core_module = CoreModule::builder()
            .with_component_override::<dyn ClassifyEventInterface>(Box::new(classify_event))
            .with_component_override::<dyn RenderEventInterface>(Box::new(render_event))
            .build();

        assert_eq!(
            ProcessIncomingRequest.run(&ctx.as_context(), &request(created_payload())),
            HookOutcome::Ignored(IgnoreReason::ExcludedSource)
        );
    }

    #[test]
    fn run_proceed() {
        let mut ctx = CoreContextTest::new();

        let render_event = {
            let mut mock = MockRenderEventInterface::new();
            mock.expect_run()
                .once()
                .withf(|_, event| event.issue.key == "PRJ-1")
                .return_once(|_, _| {
                    Ok(ChatMessage {
                        icon_url: "icon".into(),
                        text: None,
                        attachments: vec![ChatAttachment {
                            text: Some("Hello".into()),
                            ..Default::default()
                        }],
                    })
                });
            mock
        };

        ctx.core_module = CoreModule::builder()
            .with_component_override::<dyn RenderEventInterface>(Box::new(render_event))
            .build();

        let outcome = ProcessIncomingRequest.run(&ctx.as_context(), &request(created_payload()));
        match outcome {
            HookOutcome::Message(message) => {
                assert_eq!(message.attachments[0].text.as_deref(), Some("Hello"))
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn run_empty_message_is_ignored() {
        let mut ctx = CoreContextTest::new();

        let render_event = {
            let mut mock = MockRenderEventInterface::new();
            mock.expect_run()
                .once()
                .return_once(|_, _| Ok(ChatMessage::new("icon")));
            mock
        };

        ctx.core_module = CoreModule::builder()
            .with_component_override::<dyn RenderEventInterface>(Box::new(render_event))
            .build();

        assert_eq!(
            ProcessIncomingRequest.run(&ctx.as_context(), &request(created_payload())),
            HookOutcome::Ignored(IgnoreReason::NothingToRender)
        );
    }

    #[test]
    fn run_render_error() {
        let mut ctx = CoreContextTest::new();

        let render_event = {
            let mut mock = MockRenderEventInterface::new();
            mock.expect_run().once().return_once(|_, _| {
                Err(DomainError::MissingField {
                    field: "comment".into(),
                })
            });
            mock
        };

        ctx.core_module = CoreModule::builder()
            .with_component_override::<dyn RenderEventInterface>(Box::new(render_event))
            .build();

        let payload = created_payload();
        assert_eq!(
            ProcessIncomingRequest.run(&ctx.as_context(), &request(payload.clone())),
            HookOutcome::Failed(format!("Missing field in payload: comment {}", payload))
        );
    }

    #[test]
    fn run_shape_mismatch() {
        let ctx = CoreContextTest::new();

        // Proceeds past classification, then fails the full parse
        let payload = json!({
            "webhookEvent": "jira:issue_created",
            "issue": {"key": "PRJ-1"}
        });

        match ProcessIncomingRequest.run(&ctx.as_context(), &request(payload)) {
            HookOutcome::Failed(message) => {
                assert!(message.starts_with("Could not parse Jira payload: "));
                assert!(message.ends_with(
                    r#"{"webhookEvent":"jira:issue_created","issue":{"key":"PRJ-1"}}"#
                ));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn run_null_content() {
        let ctx = CoreContextTest::new();

        assert_eq!(
            ProcessIncomingRequest.run(&ctx.as_context(), &request(Value::Null)),
            HookOutcome::Ignored(IgnoreReason::MissingIssue)
        );
    }

    #[test]
    fn run_malformed_payload_without_issue() {
        let ctx = CoreContextTest::new();

        for content in [
            json!("not an object"),
            json!([1, 2]),
            json!({"webhookEvent": "jira:issue_created", "user": {"name": "x", "displayName": null}}),
            json!({"webhookEvent": "user_created", "user": {"name": 42}}),
        ] {
            assert_eq!(
                ProcessIncomingRequest.run(&ctx.as_context(), &request(content)),
                HookOutcome::Ignored(IgnoreReason::MissingIssue)
            );
        }
    }
}
