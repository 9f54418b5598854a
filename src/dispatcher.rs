use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::action::{Action, Command};
use crate::gateway::Gateway;

/// Runs commands on background tasks and reports each outcome as exactly
/// one action on the loop's channel.
pub struct Dispatcher {
    gateway: Arc<dyn Gateway>,
    action_tx: mpsc::UnboundedSender<Action>,
}

impl Dispatcher {
    pub fn new(gateway: Arc<dyn Gateway>, action_tx: mpsc::UnboundedSender<Action>) -> Self {
        Self { gateway, action_tx }
    }

    pub fn dispatch(&self, command: Command) -> JoinHandle<()> {
        let tx = self.action_tx.clone();
        let gateway = Arc::clone(&self.gateway);
        tracing::debug!(?command, "dispatching");
        tokio::spawn(async move {
            let action = execute(gateway.as_ref(), command).await;
            // The loop may already be gone on quit.
            tx.send(action).ok();
        })
    }
}

/// Run one command against the gateway and turn the result into an action.
pub async fn execute(gateway: &dyn Gateway, command: Command) -> Action {
    match command {
        Command::FetchNotifications => match gateway.fetch_notifications().await {
            Ok(notifications) => Action::FetchCompleted(notifications),
            Err(e) => {
                tracing::debug!(error = %e, "fetch failed");
                Action::FetchFailed(e.to_string())
            }
        },
        Command::MarkRead(id) => match gateway.mark_read(&id).await {
            Ok(()) => Action::MarkReadCompleted(id),
            Err(e) => {
                tracing::debug!(%id, error = %e, "mark read failed");
                Action::MarkReadFailed(format!("failed to mark as read: {}", e))
            }
        },
        Command::Open(notification) => match gateway.open_external(&notification).await {
            Ok(()) => Action::OpenCompleted,
            Err(e) => {
                tracing::debug!(id = %notification.id, error = %e, "open failed");
                Action::OpenFailed(format!("failed to open in browser: {}", e))
            }
        },
    }
}
