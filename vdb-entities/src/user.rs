use num_derive::{FromPrimitive, ToPrimitive};
use strum::{AsRefStr, Display, EnumString};

use crate::id::*;

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
    Guest = 0,
    User  = 1,
    Admin = 2,
}

impl Default for Role {
    fn default() -> Role {
        Role::Guest
    }
}

/// The authenticated identity on whose behalf an operation runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub id: Id,
    pub role: Role,
}

impl Actor {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id    : Id,
    pub name  : Option<String>,
    pub email : Option<String>,
}

/// Public projection of a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    pub id: Id,
    pub name: Option<String>,
}

impl From<User> for UserSummary {
    fn from(from: User) -> Self {
        let User { id, name, .. } = from;
        Self { id, name }
    }
}
