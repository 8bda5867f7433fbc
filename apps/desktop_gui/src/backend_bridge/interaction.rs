//! Confirmation, alerts and navigation routed to the UI thread.

use async_trait::async_trait;
use client_core::{Navigator, UserInteraction};
use crossbeam_channel::Sender;
use tokio::sync::oneshot;

use crate::controller::events::UiEvent;

pub struct GuiInteraction {
    pub ui_tx: Sender<UiEvent>,
}

#[async_trait]
impl UserInteraction for GuiInteraction {
    async fn confirm(&self, message: &str) -> bool {
        let (reply, answer) = oneshot::channel();
        let request = UiEvent::ConfirmRequested {
            message: message.to_string(),
            reply,
        };
        if self.ui_tx.try_send(request).is_err() {
            tracing::warn!("ui queue unavailable; treating confirmation as declined");
            return false;
        }
        answer.await.unwrap_or(false)
    }

    /// Returns once the alert has been dismissed.
    async fn notify(&self, message: &str) {
        let (ack, dismissed) = oneshot::channel();
        let alert = UiEvent::Alert {
            message: message.to_string(),
            ack,
        };
        if self.ui_tx.try_send(alert).is_err() {
            tracing::warn!(%message, "ui queue unavailable; alert dropped");
            return;
        }
        let _ = dismissed.await;
    }
}

pub struct GuiNavigator {
    pub ui_tx: Sender<UiEvent>,
}

impl Navigator for GuiNavigator {
    fn navigate(&self, path: &str) {
        if self
            .ui_tx
            .try_send(UiEvent::Navigate(path.to_string()))
            .is_err()
        {
            tracing::warn!(%path, "ui queue unavailable; navigation dropped");
        }
    }
}
