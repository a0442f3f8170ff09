//! Core of the relay: decode a GitLab merge-request webhook, decide whether
//! it is worth a chat message, and render that message.

pub mod action;
pub mod dispatcher;
pub mod formatter;
pub mod model;

pub use action::MergeRequestAction;
pub use dispatcher::{Dispatch, dispatch};
pub use model::MergeRequestEvent;
