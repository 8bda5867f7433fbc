use std::sync::Arc;

use shared::{
    domain::{User, UserFilter, UserId},
    error::{ApiError, ErrorCode},
    protocol::UserPage,
};
use tokio::sync::RwLock;

const NOMBRES: [&str; 8] = [
    "Ana", "Luis", "María", "Jorge", "Lucía", "Pedro", "Sofía", "Diego",
];
const APELLIDOS: [&str; 6] = ["García", "Martínez", "López", "Pérez", "Gómez", "Díaz"];
const ROLES: [&str; 3] = ["admin", "operador", "supervisor"];

#[derive(Debug, Clone)]
struct StoredUser {
    user: User,
    activo: bool,
}

/// In-memory user table backing the fixture API.
#[derive(Clone)]
pub struct UserDirectory {
    users: Arc<RwLock<Vec<StoredUser>>>,
}

impl UserDirectory {
    /// Deterministic records with ids `1..=count`; every third user is inactive.
    pub fn seeded(count: u32) -> Self {
        let users = (1..=i64::from(count))
            .map(|id| {
                let idx = (id - 1) as usize;
                let nombre = NOMBRES[idx % NOMBRES.len()];
                let apellido = APELLIDOS[idx % APELLIDOS.len()];
                StoredUser {
                    user: User {
                        id: UserId(id),
                        nombre: nombre.to_string(),
                        apellido: apellido.to_string(),
                        email: format!(
                            "{}.{}{id}@example.com",
                            nombre.to_lowercase(),
                            apellido.to_lowercase()
                        ),
                        rol: ROLES[idx % ROLES.len()].to_string(),
                    },
                    activo: id % 3 != 0,
                }
            })
            .collect();
        Self {
            users: Arc::new(RwLock::new(users)),
        }
    }

    pub async fn page(
        &self,
        page: u32,
        filter: UserFilter,
        page_size: u32,
    ) -> Result<UserPage, ApiError> {
        if page == 0 {
            return Err(ApiError::new(
                ErrorCode::Validation,
                "page must be 1 or greater",
            ));
        }
        let page_size = page_size.max(1);
        let guard = self.users.read().await;
        let matching: Vec<&StoredUser> = guard
            .iter()
            .filter(|stored| match filter {
                UserFilter::All => true,
                UserFilter::Active => stored.activo,
                UserFilter::Inactive => !stored.activo,
            })
            .collect();

        let total = matching.len() as u64;
        let total_pages = total_pages(total, page_size);
        let start = (page as usize - 1) * page_size as usize;
        let usuarios = matching
            .into_iter()
            .skip(start)
            .take(page_size as usize)
            .map(|stored| stored.user.clone())
            .collect();

        Ok(UserPage {
            total_pages,
            total,
            usuarios,
        })
    }

    pub async fn remove(&self, user_id: UserId) -> Result<(), ApiError> {
        let mut guard = self.users.write().await;
        let before = guard.len();
        guard.retain(|stored| stored.user.id != user_id);
        if guard.len() == before {
            return Err(ApiError::new(ErrorCode::NotFound, "usuario no encontrado"));
        }
        Ok(())
    }
}

pub fn total_pages(total: u64, page_size: u32) -> u32 {
    let pages = total.div_ceil(u64::from(page_size.max(1)));
    u32::try_from(pages).unwrap_or(u32::MAX).max(1)
}

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;
