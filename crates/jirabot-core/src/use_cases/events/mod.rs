pub(crate) mod classify_event;
pub(crate) mod process_incoming_request;

pub use classify_event::ClassifyEventInterface;
pub use process_incoming_request::ProcessIncomingRequestInterface;

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    classify_event::MockClassifyEventInterface,
    process_incoming_request::MockProcessIncomingRequestInterface,
};
