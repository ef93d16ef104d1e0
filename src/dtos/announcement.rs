//! Announcement DTOs - Rappresentazione degli annunci scambiata col server

use crate::core::AppResult;
use crate::entities::{
    AnnouncementParameters, Group, OfflineAnnouncement, OnlineAnnouncement, ReadStatus,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

/// Annuncio così come restituito dal server
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Validate)]
pub struct AnnouncementDTO {
    #[validate(length(min = 1, message = "fid must not be empty"))]
    pub fid: String,
    pub sender_id: i64,
    pub content: String,
    #[serde(default)]
    pub parameters: AnnouncementParameters,
    #[validate(range(min = 0, message = "publish_time must be a valid epoch second"))]
    pub publish_time: i64,
    // letture o conferme, in base a parameters.need_confirm
    pub read_member_number: u32,
    pub expected_member_number: u32,
}

impl AnnouncementDTO {
    /// Valida il payload e lo trasforma in un'entità legata a `group`
    pub fn into_online(self, group: Arc<Group>) -> AppResult<OnlineAnnouncement> {
        self.validate()?;
        Ok(OnlineAnnouncement::new(
            group,
            self.fid,
            self.sender_id,
            OfflineAnnouncement::new(self.content, self.parameters),
            ReadStatus::new(self.read_member_number, self.expected_member_number),
            self.publish_time,
        ))
    }
}

/// Query string per l'elenco dei membri che hanno (o non hanno) letto
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct MembersQuery {
    pub confirmed: bool,
}
