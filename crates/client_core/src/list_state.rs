//! Mutable state behind the user list screen.
//!
//! Every mutation goes through a named transition. Transitions that change
//! the `(page, filter)` pair hand back a [`FetchTicket`]; the controller
//! issues exactly one fetch per ticket.

use std::str::FromStr;

use serde::Deserialize;
use shared::{
    domain::{User, UserFilter},
    protocol::UserPage,
};
use thiserror::Error;

use crate::error::ControllerError;

/// Request parameters derived from the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListQuery {
    pub page: u32,
    pub filter: UserFilter,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            filter: UserFilter::All,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub query: ListQuery,
}

/// Which listing responses are written into the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseOrdering {
    /// Every successful response is applied; the one that resolves last wins,
    /// even when it was issued earlier.
    #[default]
    LastResolved,
    /// Only the response to the most recently issued fetch is applied.
    LatestIssued,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown response ordering '{0}' (expected last_resolved or latest_issued)")]
pub struct UnknownOrdering(pub String);

impl FromStr for ResponseOrdering {
    type Err = UnknownOrdering;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "last_resolved" => Ok(Self::LastResolved),
            "latest_issued" => Ok(Self::LatestIssued),
            _ => Err(UnknownOrdering(raw.to_string())),
        }
    }
}

/// Read-only copy handed to the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSnapshot {
    pub users: Vec<User>,
    pub current_page: u32,
    pub total_pages: u32,
    pub filter: UserFilter,
}

impl Default for ListSnapshot {
    fn default() -> Self {
        ListState::new().snapshot()
    }
}

#[derive(Debug)]
pub struct ListState {
    users: Vec<User>,
    current_page: u32,
    total_pages: u32,
    filter: UserFilter,
    issued: u64,
}

impl Default for ListState {
    fn default() -> Self {
        Self::new()
    }
}

impl ListState {
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            current_page: 1,
            total_pages: 1,
            filter: UserFilter::All,
            issued: 0,
        }
    }

    pub fn query(&self) -> ListQuery {
        ListQuery {
            page: self.current_page,
            filter: self.filter,
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn filter(&self) -> UserFilter {
        self.filter
    }

    pub fn snapshot(&self) -> ListSnapshot {
        ListSnapshot {
            users: self.users.clone(),
            current_page: self.current_page,
            total_pages: self.total_pages,
            filter: self.filter,
        }
    }

    /// Ticket for the current query regardless of whether it changed. Used on
    /// mount and for the reload after a delete.
    pub fn issue_fetch(&mut self) -> FetchTicket {
        self.issued += 1;
        FetchTicket {
            generation: self.issued,
            query: self.query(),
        }
    }

    pub fn paginate(&mut self, page: u32) -> Result<Option<FetchTicket>, ControllerError> {
        if page == 0 {
            return Err(ControllerError::InvalidPage);
        }
        Ok(self.transition(|state| state.current_page = page))
    }

    /// Selecting a filter always goes back to the first page.
    pub fn apply_filter(&mut self, filter: UserFilter) -> Option<FetchTicket> {
        self.transition(|state| {
            state.filter = filter;
            state.current_page = 1;
        })
    }

    /// Writes a resolved page into the state. Returns `false` when the
    /// ordering policy discards it.
    pub fn apply_page(
        &mut self,
        ticket: FetchTicket,
        page: UserPage,
        ordering: ResponseOrdering,
    ) -> bool {
        if ordering == ResponseOrdering::LatestIssued && ticket.generation != self.issued {
            return false;
        }
        self.users = page.usuarios;
        self.total_pages = page.total_pages.max(1);
        true
    }

    fn transition(&mut self, change: impl FnOnce(&mut Self)) -> Option<FetchTicket> {
        let before = self.query();
        change(self);
        (self.query() != before).then(|| self.issue_fetch())
    }
}
