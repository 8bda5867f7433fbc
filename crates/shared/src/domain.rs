use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(UserId);

/// A user record as served by the `/usuario` endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    pub rol: String,
}

/// Active/inactive selector narrowing the listing query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UserFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl UserFilter {
    /// Value of the `activo` query parameter, `None` when it must be omitted.
    pub fn activo(self) -> Option<u8> {
        match self {
            Self::All => None,
            Self::Active => Some(1),
            Self::Inactive => Some(0),
        }
    }

    pub fn from_activo(activo: Option<u8>) -> Result<Self, UnknownFilter> {
        match activo {
            None => Ok(Self::All),
            Some(1) => Ok(Self::Active),
            Some(0) => Ok(Self::Inactive),
            Some(other) => Err(UnknownFilter(other.to_string())),
        }
    }

    /// Selector value the view submits for this option.
    pub fn selector_value(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "1",
            Self::Inactive => "0",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "Todos",
            Self::Active => "Activos",
            Self::Inactive => "Inactivos",
        }
    }

    pub const OPTIONS: [UserFilter; 3] = [Self::All, Self::Active, Self::Inactive];
}

impl fmt::Display for UserFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown filter value '{0}'")]
pub struct UnknownFilter(pub String);

impl FromStr for UserFilter {
    type Err = UnknownFilter;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "all" | "todos" => Ok(Self::All),
            "1" | "true" | "active" | "activos" => Ok(Self::Active),
            "0" | "false" | "inactive" | "inactivos" => Ok(Self::Inactive),
            _ => Err(UnknownFilter(raw.to_string())),
        }
    }
}
