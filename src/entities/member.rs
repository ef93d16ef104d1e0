//! NormalMember entity - Membro di un gruppo

use super::enums::UserRole;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NormalMember {
    pub id: i64,
    pub name_card: String,
    pub role: UserRole,
}

impl NormalMember {
    pub fn new(id: i64, name_card: impl Into<String>, role: UserRole) -> Self {
        Self {
            id,
            name_card: name_card.into(),
            role,
        }
    }
}
