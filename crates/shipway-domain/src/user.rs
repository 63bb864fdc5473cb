//! User domain types.

use serde::{Deserialize, Serialize};

/// Privilege level of an authenticated user.
///
/// The auth edge puts the numeric value in the `x-shipway-user-role`
/// header; everything behind the edge works with the enum. Ordering
/// follows privilege, so `role >= UserRole::Staff` reads as "staff or
/// higher".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum UserRole {
    Basic = 0,
    Staff = 1,
    Admin = 2,
}

impl UserRole {
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::try_from(value).ok()
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn is_admin(self) -> bool {
        self == Self::Admin
    }
}

impl TryFrom<u8> for UserRole {
    type Error = UnknownRole;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Basic),
            1 => Ok(Self::Staff),
            2 => Ok(Self::Admin),
            other => Err(UnknownRole(other)),
        }
    }
}

impl From<UserRole> for u8 {
    fn from(role: UserRole) -> Self {
        role as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown user role {0}")]
pub struct UnknownRole(pub u8);
