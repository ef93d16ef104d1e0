//! Bot entity - Identità locale del client

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Bot {
    pub id: i64,
    pub nick: String,
}

impl Bot {
    pub fn new(id: i64, nick: impl Into<String>) -> Self {
        Self {
            id,
            nick: nick.into(),
        }
    }
}
