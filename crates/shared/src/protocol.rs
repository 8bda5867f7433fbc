use serde::{Deserialize, Serialize};

use crate::domain::User;

/// Envelope every `/usuario` response is wrapped in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub message: String,
    pub data: T,
}

/// One page of the user listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPage {
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
    pub total: u64,
    pub usuarios: Vec<User>,
}

pub type UserListResponse = ApiEnvelope<UserPage>;
