//! Enumerazioni - Tipi enumerati utilizzati nelle entità

use serde::{Deserialize, Serialize};

/// Permesso di un membro (o del bot) all'interno di un gruppo
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    Owner,
    Admin,
    Member,
}

impl UserRole {
    /// Owner e Admin possono gestire gli annunci del gruppo
    pub fn is_operator(&self) -> bool {
        matches!(self, UserRole::Owner | UserRole::Admin)
    }

    pub(crate) fn as_u8(self) -> u8 {
        match self {
            UserRole::Owner => 0,
            UserRole::Admin => 1,
            UserRole::Member => 2,
        }
    }

    pub(crate) fn from_u8(value: u8) -> Self {
        match value {
            0 => UserRole::Owner,
            1 => UserRole::Admin,
            _ => UserRole::Member,
        }
    }
}
