pub(crate) mod attachment;
pub(crate) mod build_issue_summary;
pub(crate) mod render_changelog;
pub(crate) mod render_comment;
pub(crate) mod render_event;

pub use build_issue_summary::BuildIssueSummaryInterface;
pub use render_changelog::RenderChangelogInterface;
pub use render_comment::{CommentAction, RenderCommentInterface};
pub use render_event::RenderEventInterface;

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    build_issue_summary::MockBuildIssueSummaryInterface,
    render_changelog::MockRenderChangelogInterface, render_comment::MockRenderCommentInterface,
    render_event::MockRenderEventInterface,
};
