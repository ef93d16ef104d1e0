//! OnlineAnnouncement entity - Annuncio già pubblicato e presente sul server
//!
//! Le istanze vengono create solo dai collection manager (`Announcements::get`,
//! `Announcements::list`) e rappresentano lo stato del server al momento del fetch.
//! Dopo un `delete` riuscito l'istanza non ha più significato: è compito del
//! chiamante scartarla.

use super::announcement::{Announcement, AnnouncementParameters, OfflineAnnouncement};
use super::bot::Bot;
use super::group::Group;
use super::member::NormalMember;
use crate::core::AppResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

mod sealed {
    pub trait Sealed {}
}

/// Stato di lettura riportato dal server al momento del fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadStatus {
    /// Membri che hanno letto, o confermato se `need_confirm`
    pub read_member_number: u32,
    /// Membri che devono leggere (o confermare) perché l'annuncio sia letto da tutti
    pub expected_member_number: u32,
    all_read: bool,
}

impl ReadStatus {
    /// Stato ricavato dai soli contatori
    // >= e non ==: il contatore non viene corretto quando un lettore esce dal gruppo
    pub fn new(read_member_number: u32, expected_member_number: u32) -> Self {
        Self::with_all_read(
            read_member_number,
            expected_member_number,
            read_member_number >= expected_member_number,
        )
    }

    /// Stato in cui `all_read` è già stato calcolato sui membri attuali del gruppo
    pub fn with_all_read(
        read_member_number: u32,
        expected_member_number: u32,
        all_read: bool,
    ) -> Self {
        Self {
            read_member_number,
            expected_member_number,
            all_read,
        }
    }

    pub fn is_all_read(&self) -> bool {
        self.all_read
    }
}

/// Annuncio presente sul server, identificato da `fid` all'interno del suo gruppo.
///
/// Il trait è sigillato: l'unica implementazione è [`OnlineAnnouncement`].
#[async_trait]
pub trait Online: Announcement + sealed::Sealed + Send + Sync {
    /// Gruppo a cui appartiene l'annuncio
    fn group(&self) -> &Arc<Group>;

    /// Id del membro che ha pubblicato l'annuncio
    fn sender_id(&self) -> i64;

    /// Membro che ha pubblicato l'annuncio, `None` se ha lasciato il gruppo.
    ///
    /// Risolto una sola volta alla creazione dell'istanza, non viene aggiornato.
    fn sender(&self) -> Option<&Arc<NormalMember>>;

    /// Identificativo univoco dell'annuncio nel gruppo
    fn fid(&self) -> &str;

    /// Tutti hanno letto, o confermato se `need_confirm` è attivo
    fn is_all_read(&self) -> bool;

    /// Membri che hanno letto, o confermato se `need_confirm` è attivo
    fn read_member_number(&self) -> u32;

    /// Istante di pubblicazione in secondi dalla epoch
    fn publish_time(&self) -> i64;

    /// Istante di pubblicazione come `DateTime`, `None` se fuori dal range di chrono
    fn published_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.publish_time(), 0)
    }

    /// Bot proprietario, sempre uguale a `group().bot()`
    fn bot(&self) -> &Arc<Bot> {
        self.group().bot()
    }

    /// Elimina l'annuncio dal server. Richiede il ruolo di Admin o Owner.
    ///
    /// # Returns
    /// * `Ok(true)` - Annuncio eliminato
    /// * `Ok(false)` - Annuncio già eliminato
    /// * `Err(AppError)` - `PermissionDenied` se il bot non ha i permessi,
    ///   altrimenti l'errore del collection manager così com'è
    async fn delete(&self) -> AppResult<bool>;
}

#[derive(Debug, Clone)]
pub struct OnlineAnnouncement {
    group: Arc<Group>,
    sender_id: i64,
    sender: Option<Arc<NormalMember>>,
    fid: String,
    announcement: OfflineAnnouncement,
    read_status: ReadStatus,
    publish_time: i64,
}

impl OnlineAnnouncement {
    /// Materializza un annuncio letto dal server. Il mittente viene risolto
    /// subito contro i membri attuali del gruppo.
    pub fn new(
        group: Arc<Group>,
        fid: impl Into<String>,
        sender_id: i64,
        announcement: OfflineAnnouncement,
        read_status: ReadStatus,
        publish_time: i64,
    ) -> Self {
        let sender = group.get_member(sender_id);
        Self {
            group,
            sender_id,
            sender,
            fid: fid.into(),
            announcement,
            read_status,
            publish_time,
        }
    }
}

impl sealed::Sealed for OnlineAnnouncement {}

impl Announcement for OnlineAnnouncement {
    fn content(&self) -> &str {
        &self.announcement.content
    }

    fn parameters(&self) -> &AnnouncementParameters {
        &self.announcement.parameters
    }
}

#[async_trait]
impl Online for OnlineAnnouncement {
    fn group(&self) -> &Arc<Group> {
        &self.group
    }

    fn sender_id(&self) -> i64 {
        self.sender_id
    }

    fn sender(&self) -> Option<&Arc<NormalMember>> {
        self.sender.as_ref()
    }

    fn fid(&self) -> &str {
        &self.fid
    }

    fn is_all_read(&self) -> bool {
        self.read_status.is_all_read()
    }

    fn read_member_number(&self) -> u32 {
        self.read_status.read_member_number
    }

    fn publish_time(&self) -> i64 {
        self.publish_time
    }

    async fn delete(&self) -> AppResult<bool> {
        self.group
            .announcements()
            .delete(&self.group, &self.fid)
            .await
    }
}
