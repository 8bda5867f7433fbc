//! Screen state owned by the UI thread and the transitions backend events drive.

use std::collections::VecDeque;

use client_core::{routes::Route, ListSnapshot};
use tokio::sync::oneshot;

use crate::{
    backend_bridge::commands::BackendCommand,
    controller::events::{UiError, UiEvent},
};

/// A delete confirmation waiting for the user's answer.
pub struct PendingConfirm {
    pub message: String,
    reply: Option<oneshot::Sender<bool>>,
}

pub struct PendingAlert {
    pub message: String,
    ack: Option<oneshot::Sender<()>>,
}

pub struct ScreenState {
    pub route: Route,
    pub list: ListSnapshot,
    pub confirmations: VecDeque<PendingConfirm>,
    pub alerts: VecDeque<PendingAlert>,
    pub status: String,
    pub last_error: Option<UiError>,
}

impl Default for ScreenState {
    fn default() -> Self {
        Self {
            route: Route::UserList,
            list: ListSnapshot::default(),
            confirmations: VecDeque::new(),
            alerts: VecDeque::new(),
            status: String::new(),
            last_error: None,
        }
    }
}

impl ScreenState {
    /// Applies one backend event. Returns the commands the UI has to queue in
    /// response.
    pub fn apply(&mut self, event: UiEvent) -> Vec<BackendCommand> {
        match event {
            UiEvent::Info(message) => {
                self.status = message;
            }
            UiEvent::ListUpdated(snapshot) => {
                if self.route == Route::UserList {
                    self.list = snapshot;
                }
            }
            UiEvent::Error(err) => {
                self.status = err.summary();
                self.last_error = Some(err);
            }
            UiEvent::ConfirmRequested { message, reply } => {
                self.confirmations.push_back(PendingConfirm {
                    message,
                    reply: Some(reply),
                });
            }
            UiEvent::Alert { message, ack } => {
                self.alerts.push_back(PendingAlert {
                    message,
                    ack: Some(ack),
                });
            }
            UiEvent::Navigate(path) => match Route::parse(&path) {
                Some(route) => return self.navigate(route),
                None => {
                    tracing::warn!(%path, "navigation to unknown route");
                    self.status = format!("Ruta desconocida: {path}");
                }
            },
        }
        Vec::new()
    }

    /// Entering the list screen always starts from a fresh list state.
    pub fn navigate(&mut self, route: Route) -> Vec<BackendCommand> {
        if route == self.route {
            return Vec::new();
        }
        tracing::info!(path = %route.path(), "route changed");
        self.route = route;
        if route == Route::UserList {
            self.list = ListSnapshot::default();
            return vec![BackendCommand::MountList];
        }
        Vec::new()
    }

    pub fn answer_confirmation(&mut self, accepted: bool) {
        if let Some(mut pending) = self.confirmations.pop_front() {
            if let Some(reply) = pending.reply.take() {
                let _ = reply.send(accepted);
            }
        }
    }

    pub fn dismiss_alert(&mut self) {
        if let Some(mut alert) = self.alerts.pop_front() {
            if let Some(ack) = alert.ack.take() {
                let _ = ack.send(());
            }
        }
    }

    /// Modal dialogs block the screen underneath.
    pub fn is_modal(&self) -> bool {
        !self.confirmations.is_empty() || !self.alerts.is_empty()
    }
}
