//! The list screen controller.
//!
//! Owns the [`ListState`] for one screen lifetime and turns view intents into
//! state transitions and API calls. The state lock is never held while a
//! request is in flight, so overlapping fetches are possible; which response
//! ends up on screen is decided by [`ResponseOrdering`].

use std::sync::Arc;

use shared::domain::{UserFilter, UserId};
use tokio::sync::{broadcast, Mutex};
use tracing::{debug, error, info, warn};

use crate::{
    error::ControllerError,
    list_state::{FetchTicket, ListQuery, ListSnapshot, ListState, ResponseOrdering},
    routes, Navigator, UserInteraction, UsuariosApi,
};

pub const DELETE_CONFIRMATION: &str = "¿Está seguro de que desea eliminar este usuario?";
pub const DELETE_SUCCESS: &str = "Usuario eliminado correctamente";
pub const DELETE_FAILURE: &str = "Error al eliminar el usuario";

#[derive(Debug, Clone)]
pub enum ListEvent {
    FetchStarted(ListQuery),
    StateChanged(ListSnapshot),
    FetchFailed { query: ListQuery, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    /// Resolved after a newer fetch was issued and dropped by the ordering policy.
    Discarded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Declined,
    Deleted,
    Failed,
}

pub struct UserListController {
    api: Arc<dyn UsuariosApi>,
    interaction: Arc<dyn UserInteraction>,
    navigator: Arc<dyn Navigator>,
    ordering: ResponseOrdering,
    state: Mutex<ListState>,
    events: broadcast::Sender<ListEvent>,
}

impl UserListController {
    pub fn new(
        api: Arc<dyn UsuariosApi>,
        interaction: Arc<dyn UserInteraction>,
        navigator: Arc<dyn Navigator>,
    ) -> Arc<Self> {
        Self::with_ordering(api, interaction, navigator, ResponseOrdering::default())
    }

    pub fn with_ordering(
        api: Arc<dyn UsuariosApi>,
        interaction: Arc<dyn UserInteraction>,
        navigator: Arc<dyn Navigator>,
        ordering: ResponseOrdering,
    ) -> Arc<Self> {
        let (events, _) = broadcast::channel(256);
        Arc::new(Self {
            api,
            interaction,
            navigator,
            ordering,
            state: Mutex::new(ListState::new()),
            events,
        })
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ListEvent> {
        self.events.subscribe()
    }

    pub async fn snapshot(&self) -> ListSnapshot {
        self.state.lock().await.snapshot()
    }

    /// First render: fetch page 1 with no filter.
    pub async fn mount(&self) -> FetchOutcome {
        info!(ordering = ?self.ordering, "mounting user list");
        self.publish_state().await;
        self.load_user_data().await
    }

    /// Fetches the current `(page, filter)` pair.
    pub async fn load_user_data(&self) -> FetchOutcome {
        let ticket = self.state.lock().await.issue_fetch();
        self.run_fetch(ticket).await
    }

    /// Returns `None` when the page did not change and nothing was fetched.
    pub async fn paginate(&self, page: u32) -> Result<Option<FetchOutcome>, ControllerError> {
        let ticket = self.state.lock().await.paginate(page)?;
        self.follow_transition(ticket).await
    }

    /// `raw` is the selector value: `all`, `1` or `0` (and their spelled-out forms).
    pub async fn handle_filter(&self, raw: &str) -> Result<Option<FetchOutcome>, ControllerError> {
        let filter = raw.parse::<UserFilter>().map_err(|err| {
            warn!(raw = %raw, "rejecting filter selection");
            ControllerError::from(err)
        })?;
        let ticket = self.state.lock().await.apply_filter(filter);
        self.follow_transition(ticket).await
    }

    pub async fn handle_delete_user(&self, user_id: UserId) -> DeleteOutcome {
        if !self.interaction.confirm(DELETE_CONFIRMATION).await {
            debug!(%user_id, "delete declined");
            return DeleteOutcome::Declined;
        }

        match self.api.delete_user(user_id).await {
            Ok(()) => {
                info!(%user_id, "user deleted");
                self.load_user_data().await;
                self.interaction.notify(DELETE_SUCCESS).await;
                DeleteOutcome::Deleted
            }
            Err(err) => {
                error!(%user_id, error = %err, "error deleting user");
                self.interaction.notify(DELETE_FAILURE).await;
                DeleteOutcome::Failed
            }
        }
    }

    pub fn redirect_to_create(&self) {
        info!(path = routes::CREATE_USER_PATH, "navigating");
        self.navigator.navigate(routes::CREATE_USER_PATH);
    }

    pub fn redirect_to_edit(&self, user_id: UserId) {
        let path = routes::edit_user_path(user_id);
        info!(%path, "navigating");
        self.navigator.navigate(&path);
    }

    async fn follow_transition(
        &self,
        ticket: Option<FetchTicket>,
    ) -> Result<Option<FetchOutcome>, ControllerError> {
        let Some(ticket) = ticket else {
            return Ok(None);
        };
        self.publish_state().await;
        Ok(Some(self.run_fetch(ticket).await))
    }

    async fn run_fetch(&self, ticket: FetchTicket) -> FetchOutcome {
        let query = ticket.query;
        debug!(
            generation = ticket.generation,
            page = query.page,
            filter = %query.filter,
            "fetching users"
        );
        let _ = self.events.send(ListEvent::FetchStarted(query));

        match self.api.list_users(query).await {
            Ok(page) => {
                let snapshot = {
                    let mut state = self.state.lock().await;
                    if !state.apply_page(ticket, page, self.ordering) {
                        debug!(generation = ticket.generation, "discarding stale listing response");
                        return FetchOutcome::Discarded;
                    }
                    state.snapshot()
                };
                let _ = self.events.send(ListEvent::StateChanged(snapshot));
                FetchOutcome::Applied
            }
            Err(err) => {
                error!(page = query.page, filter = %query.filter, error = %err, "error fetching users");
                let _ = self.events.send(ListEvent::FetchFailed {
                    query,
                    message: err.to_string(),
                });
                FetchOutcome::Failed
            }
        }
    }

    async fn publish_state(&self) {
        let snapshot = self.state.lock().await.snapshot();
        let _ = self.events.send(ListEvent::StateChanged(snapshot));
    }
}
