//! Client side of the user administration screen: API access, list state and
//! the controller the views drive.

use async_trait::async_trait;
use shared::{domain::UserId, protocol::UserPage};

pub mod config;
pub mod controller;
pub mod error;
pub mod list_state;
pub mod routes;
pub mod transport;

pub use controller::{DeleteOutcome, FetchOutcome, ListEvent, UserListController};
pub use error::{ClientError, ControllerError};
pub use list_state::{ListQuery, ListSnapshot, ListState, ResponseOrdering};
pub use transport::HttpUsuariosApi;

#[async_trait]
pub trait UsuariosApi: Send + Sync {
    async fn list_users(&self, query: ListQuery) -> Result<UserPage, ClientError>;
    async fn delete_user(&self, user_id: UserId) -> Result<(), ClientError>;
}

/// Blocking yes/no confirmation and acknowledgement alerts.
#[async_trait]
pub trait UserInteraction: Send + Sync {
    async fn confirm(&self, message: &str) -> bool;
    async fn notify(&self, message: &str);
}

pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

#[cfg(test)]
#[path = "tests/list_state_tests.rs"]
mod list_state_tests;

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod controller_tests;

#[cfg(test)]
#[path = "tests/transport_tests.rs"]
mod transport_tests;

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod config_tests;
