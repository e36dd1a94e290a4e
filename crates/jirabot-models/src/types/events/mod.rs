mod envelope;
mod event_kind;
mod request;
mod webhook_event;

pub use envelope::JiraEventEnvelope;
pub use event_kind::JiraEventKind;
pub use request::IncomingRequest;
pub use webhook_event::JiraWebhookEvent;
