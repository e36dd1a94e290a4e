//! Logic module.

#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

mod context;
pub mod errors;
pub mod outcome;
pub mod use_cases;
pub mod utils;


pub use context::CoreContext;
pub use errors::{DomainError, Result};
pub use outcome::{EventClassification, HookOutcome, IgnoreReason};
use shaku::module;
use use_cases::{
    events::{
        classify_event::ClassifyEvent, process_incoming_request::ProcessIncomingRequest,
    },
    messages::{
        build_issue_summary::BuildIssueSummary, render_changelog::RenderChangelog,
        render_comment::RenderComment, render_event::RenderEvent,
    },
};

module! {
    pub CoreModule {
        components = [
            BuildIssueSummary, RenderChangelog, RenderComment, RenderEvent,
            ClassifyEvent, ProcessIncomingRequest
        ],
        providers = []
    }
}
