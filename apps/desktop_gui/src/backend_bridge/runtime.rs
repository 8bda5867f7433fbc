//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::{
    config::ClientSettings, HttpUsuariosApi, ListEvent, UserListController, UsuariosApi,
};
use crossbeam_channel::{Receiver, Sender};
use tokio::{sync::broadcast, task::JoinHandle};

use crate::backend_bridge::{
    commands::{BackendCommand, ListCommand},
    interaction::{GuiInteraction, GuiNavigator},
};
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, settings: ClientSettings) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("failed to build backend runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(run(cmd_rx, ui_tx, settings));
    });
}

async fn run(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, settings: ClientSettings) {
    let api: Arc<dyn UsuariosApi> = match HttpUsuariosApi::new(&settings.api_base_url) {
        Ok(api) => Arc::new(api),
        Err(err) => {
            let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                UiErrorContext::BackendStartup,
                err.to_string(),
            )));
            tracing::error!(error = %err, "invalid API configuration");
            return;
        }
    };
    let interaction = Arc::new(GuiInteraction {
        ui_tx: ui_tx.clone(),
    });
    let navigator = Arc::new(GuiNavigator {
        ui_tx: ui_tx.clone(),
    });
    let _ = ui_tx.try_send(UiEvent::Info(format!(
        "API: {}",
        settings.api_base_url
    )));

    let mut active: Option<Arc<UserListController>> = None;
    let mut event_task: Option<JoinHandle<()>> = None;

    // `recv` blocks this thread only; every command runs as its own task.
    while let Ok(cmd) = cmd_rx.recv() {
        let cmd = match cmd {
            BackendCommand::MountList => {
                if let Some(task) = event_task.take() {
                    task.abort();
                }
                let controller = UserListController::with_ordering(
                    api.clone(),
                    interaction.clone(),
                    navigator.clone(),
                    settings.response_ordering,
                );
                event_task = Some(forward_list_events(controller.subscribe(), ui_tx.clone()));
                active = Some(controller.clone());
                tokio::spawn(async move {
                    controller.mount().await;
                });
                continue;
            }
            BackendCommand::List(cmd) => cmd,
        };

        let Some(controller) = active.clone() else {
            tracing::warn!(command = cmd.name(), "no list screen mounted; dropping command");
            continue;
        };
        let ui_tx = ui_tx.clone();
        tokio::spawn(async move {
            run_command(&controller, cmd, &ui_tx).await;
        });
    }
}

async fn run_command(controller: &UserListController, cmd: ListCommand, ui_tx: &Sender<UiEvent>) {
    match cmd {
        ListCommand::Paginate { page } => {
            if let Err(err) = controller.paginate(page).await {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::Pagination,
                    err.to_string(),
                )));
            }
        }
        ListCommand::Filter { raw } => {
            if let Err(err) = controller.handle_filter(&raw).await {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::Filter,
                    err.to_string(),
                )));
            }
        }
        ListCommand::DeleteUser { user_id } => {
            controller.handle_delete_user(user_id).await;
        }
        ListCommand::CreateUser => controller.redirect_to_create(),
        ListCommand::EditUser { user_id } => controller.redirect_to_edit(user_id),
    }
}

fn forward_list_events(
    mut events: broadcast::Receiver<ListEvent>,
    ui_tx: Sender<UiEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(ListEvent::StateChanged(snapshot)) => {
                    let _ = ui_tx.try_send(UiEvent::ListUpdated(snapshot));
                }
                // Read failures are logged by the controller and never shown.
                Ok(ListEvent::FetchStarted(_) | ListEvent::FetchFailed { .. }) => {}
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "list event forwarder lagged");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    })
}
