use bot_notifier::WeComClient;

/// Shared state for all HTTP handlers.
///
/// Built once at startup and handed to the router; handlers only read it.
pub struct AppState {
    /// Bot client every relayed message goes through.
    pub notifier: WeComClient,
}

impl AppState {
    pub fn new(notifier: WeComClient) -> Self {
        Self { notifier }
    }
}
