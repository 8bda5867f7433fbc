//! Backend commands queued from UI to backend worker.

use shared::domain::UserId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    /// Start a fresh list screen: new state, first fetch.
    MountList,
    /// Intent for the currently mounted list screen.
    List(ListCommand),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListCommand {
    Paginate { page: u32 },
    Filter { raw: String },
    DeleteUser { user_id: UserId },
    CreateUser,
    EditUser { user_id: UserId },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::MountList => "mount_list",
            Self::List(cmd) => cmd.name(),
        }
    }
}

impl ListCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Paginate { .. } => "paginate",
            Self::Filter { .. } => "filter",
            Self::DeleteUser { .. } => "delete_user",
            Self::CreateUser => "create_user",
            Self::EditUser { .. } => "edit_user",
        }
    }
}

impl From<ListCommand> for BackendCommand {
    fn from(cmd: ListCommand) -> Self {
        Self::List(cmd)
    }
}
