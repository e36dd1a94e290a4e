//! Chat messages and hook responses.

mod attachment;
mod message;
mod response;

pub use attachment::ChatAttachment;
pub use message::ChatMessage;
pub use response::{HookError, HookResponse};
