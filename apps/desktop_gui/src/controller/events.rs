//! UI/backend events and error modeling for the desktop GUI.

use client_core::ListSnapshot;
use tokio::sync::oneshot;

pub enum UiEvent {
    Info(String),
    ListUpdated(ListSnapshot),
    Error(UiError),
    ConfirmRequested {
        message: String,
        reply: oneshot::Sender<bool>,
    },
    /// Blocking notice; `ack` fires when the user dismisses it.
    Alert {
        message: String,
        ack: oneshot::Sender<()>,
    },
    Navigate(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    Server,
    Validation,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    Filter,
    Pagination,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("invalid")
            || message_lower.contains("unknown filter")
            || message_lower.contains("page numbers")
        {
            UiErrorCategory::Validation
        } else if message_lower.contains("server responded") {
            UiErrorCategory::Server
        } else if message_lower.contains("request failed")
            || message_lower.contains("connection")
            || message_lower.contains("timed out")
            || message_lower.contains("dns")
        {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// One-line text for the status bar.
    pub fn summary(&self) -> String {
        let what = match self.context {
            UiErrorContext::BackendStartup => "No se pudo iniciar",
            UiErrorContext::Filter => "Filtro no válido",
            UiErrorContext::Pagination => "Página no válida",
        };
        let hint = match self.category {
            UiErrorCategory::Transport => " (servidor inaccesible)",
            UiErrorCategory::Server => " (error del servidor)",
            UiErrorCategory::Validation | UiErrorCategory::Unknown => "",
        };
        format!("{what}{hint}: {}", self.message)
    }
}
