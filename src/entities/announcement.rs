//! Announcement - Contenuto e parametri di pubblicazione di un annuncio

use serde::{Deserialize, Serialize};

/// Parametri con cui un annuncio è stato pubblicato
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AnnouncementParameters {
    /// URL dell'immagine allegata, se presente
    pub image: Option<String>,
    pub send_to_new_member: bool,
    pub is_pinned: bool,
    pub show_edit_card: bool,
    pub show_popup: bool,
    /// I membri devono confermare esplicitamente, non basta la lettura
    pub need_confirm: bool,
}

/// Dati comuni a tutti gli annunci, pubblicati o meno
pub trait Announcement {
    fn content(&self) -> &str;

    fn parameters(&self) -> &AnnouncementParameters;
}

/// Annuncio locale, non ancora presente sul server
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OfflineAnnouncement {
    pub content: String,
    #[serde(default)]
    pub parameters: AnnouncementParameters,
}

impl OfflineAnnouncement {
    pub fn new(content: impl Into<String>, parameters: AnnouncementParameters) -> Self {
        Self {
            content: content.into(),
            parameters,
        }
    }
}

impl Announcement for OfflineAnnouncement {
    fn content(&self) -> &str {
        &self.content
    }

    fn parameters(&self) -> &AnnouncementParameters {
        &self.parameters
    }
}
