//! Client State - Stato condiviso del client
//!
//! Contiene l'identità del bot, la configurazione e il collection manager
//! degli annunci condiviso da tutti i gruppi aperti.

use crate::core::{AppResult, Config};
use crate::entities::{Bot, Group, UserRole};
use crate::repositories::{Announcements, RemoteAnnouncements};
use std::sync::Arc;
use tracing::{info, instrument};

pub struct ClientState {
    pub config: Config,

    /// Identità locale del client
    pub bot: Arc<Bot>,

    /// Collection manager usato da tutti i gruppi
    pub announcements: Arc<dyn Announcements>,
}

impl ClientState {
    /// Crea lo stato usando il manager remoto configurato da `config`
    pub fn from_config(config: Config) -> AppResult<Self> {
        config.print_info();
        let bot = Arc::new(Bot::new(config.bot_id, config.bot_nick.clone()));
        let remote = RemoteAnnouncements::from_config(&config)?;
        Ok(Self::with_manager(config, bot, Arc::new(remote)))
    }

    /// Crea lo stato con un manager qualsiasi (es. `InMemoryAnnouncements`)
    pub fn with_manager(
        config: Config,
        bot: Arc<Bot>,
        announcements: Arc<dyn Announcements>,
    ) -> Self {
        Self {
            config,
            bot,
            announcements,
        }
    }

    /// Costruisce un gruppo collegato al bot e al manager di questo stato
    #[instrument(skip(self, name), fields(group_id = %id))]
    pub fn open_group(&self, id: i64, name: impl Into<String>, bot_role: UserRole) -> Arc<Group> {
        info!("Opening group with bot role {:?}", bot_role);
        Arc::new(Group::new(
            id,
            name,
            self.bot.clone(),
            bot_role,
            self.announcements.clone(),
        ))
    }
}
