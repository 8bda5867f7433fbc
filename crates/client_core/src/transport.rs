//! reqwest-backed implementation of [`UsuariosApi`].

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Serialize;
use shared::{domain::UserId, error::ApiError, protocol::UserListResponse, protocol::UserPage};
use tracing::debug;
use url::Url;

use crate::{error::ClientError, list_state::ListQuery, UsuariosApi};

#[derive(Debug, Serialize)]
struct ListUsersQuery {
    page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    activo: Option<u8>,
}

impl From<ListQuery> for ListUsersQuery {
    fn from(query: ListQuery) -> Self {
        Self {
            page: query.page,
            activo: query.filter.activo(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpUsuariosApi {
    http: Client,
    base_url: String,
}

impl HttpUsuariosApi {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: &str) -> Result<Self, ClientError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        Url::parse(trimmed).map_err(|source| ClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })?;
        Ok(Self {
            http,
            base_url: trimmed.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl UsuariosApi for HttpUsuariosApi {
    async fn list_users(&self, query: ListQuery) -> Result<UserPage, ClientError> {
        let params = ListUsersQuery::from(query);
        debug!(page = params.page, activo = ?params.activo, "GET /usuario");
        let response = self
            .http
            .get(format!("{}/usuario", self.base_url))
            .query(&params)
            .send()
            .await?;
        let body: UserListResponse = check_status(response).await?.json().await?;
        Ok(body.data)
    }

    async fn delete_user(&self, user_id: UserId) -> Result<(), ClientError> {
        debug!(%user_id, "DELETE /usuario");
        let response = self
            .http
            .delete(format!("{}/usuario/{}", self.base_url, user_id.0))
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }
}

async fn check_status(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ApiError>(&body) {
        Ok(err) => err.message,
        Err(_) if body.trim().is_empty() => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string(),
        Err(_) => body,
    };
    Err(ClientError::Status { status, message })
}
