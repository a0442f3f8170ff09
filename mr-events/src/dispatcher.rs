//! Routes a decoded event to its template and hands the text to a notifier.

use bot_notifier::{DeliveryError, Notifier};
use tracing::{debug, info};

use crate::action::MergeRequestAction;
use crate::formatter;
use crate::model::MergeRequestEvent;

/// What the dispatcher did with one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// A message was formatted and delivered.
    Sent(MergeRequestAction),
    /// Nothing to announce for this action.
    Ignored(MergeRequestAction),
}

/// Classifies `event` and sends at most one message through `notifier`.
///
/// `open`, `approved` and `merge` produce exactly one send. Every other
/// action, known or not, is a successful no-op. A failed send is returned as
/// is.
pub async fn dispatch<N>(event: &MergeRequestEvent, notifier: &N) -> Result<Dispatch, DeliveryError>
where
    N: Notifier,
{
    let action = event.action();
    let message = match action {
        MergeRequestAction::Open => formatter::opened_message(event),
        MergeRequestAction::Approved => formatter::approved_message(event),
        MergeRequestAction::Merge => formatter::merged_message(event),
        MergeRequestAction::Close | MergeRequestAction::Update => {
            // TODO: decide what a closed/updated MR should announce.
            debug!(%action, "no template for action yet");
            return Ok(Dispatch::Ignored(action));
        }
        _ => {
            debug!(%action, "action not announced");
            return Ok(Dispatch::Ignored(action));
        }
    };

    notifier.send_text(&message).await?;

    info!(
        %action,
        project = %event.project.name,
        iid = event.object_attributes.iid.unwrap_or_default(),
        "merge request event relayed"
    );
    Ok(Dispatch::Sent(action))
}
