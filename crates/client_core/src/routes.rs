use shared::domain::UserId;

pub const USER_LIST_PATH: &str = "/usuarios";
pub const CREATE_USER_PATH: &str = "/usuarios/nuevo";

pub fn edit_user_path(user_id: UserId) -> String {
    format!("{USER_LIST_PATH}/{}", user_id.0)
}

/// Screens reachable from the user list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    UserList,
    CreateUser,
    EditUser(UserId),
}

impl Route {
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.trim_end_matches('/');
        if path == USER_LIST_PATH {
            return Some(Self::UserList);
        }
        if path == CREATE_USER_PATH {
            return Some(Self::CreateUser);
        }
        path.strip_prefix(USER_LIST_PATH)
            .and_then(|rest| rest.strip_prefix('/'))
            .and_then(|id| id.parse::<i64>().ok())
            .map(|id| Self::EditUser(UserId(id)))
    }

    pub fn path(&self) -> String {
        match self {
            Self::UserList => USER_LIST_PATH.to_string(),
            Self::CreateUser => CREATE_USER_PATH.to_string(),
            Self::EditUser(user_id) => edit_user_path(*user_id),
        }
    }
}
