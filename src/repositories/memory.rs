//! InMemoryAnnouncements - Collection manager in memoria
//!
//! Tiene gli annunci di tutti i gruppi in una `DashMap` indicizzata da
//! `(group_id, fid)`. Applica gli stessi controlli di permesso del server.

use super::Announcements;
use crate::core::{AppError, AppResult, require_operator};
use crate::entities::{
    Group, NormalMember, OfflineAnnouncement, OnlineAnnouncement, ReadStatus,
};
use async_trait::async_trait;
use dashmap::DashMap;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Record di un annuncio come lo conserva il "server"
#[derive(Debug, Clone)]
pub struct StoredAnnouncement {
    pub fid: String,
    pub sender_id: i64,
    pub announcement: OfflineAnnouncement,
    pub publish_time: i64,
    /// Membri che hanno letto. Nessuno viene mai rimosso, neanche se esce dal gruppo
    readers: HashSet<i64>,
    confirmers: HashSet<i64>,
    reminders: u32,
}

impl StoredAnnouncement {
    pub fn new(
        fid: impl Into<String>,
        sender_id: i64,
        announcement: OfflineAnnouncement,
        publish_time: i64,
    ) -> Self {
        Self {
            fid: fid.into(),
            sender_id,
            announcement,
            publish_time,
            readers: HashSet::new(),
            confirmers: HashSet::new(),
            reminders: 0,
        }
    }

    fn need_confirm(&self) -> bool {
        self.announcement.parameters.need_confirm
    }

    /// Insieme che conta per `read_member_number`: conferme se `need_confirm`, letture altrimenti
    fn counted(&self) -> &HashSet<i64> {
        if self.need_confirm() {
            &self.confirmers
        } else {
            &self.readers
        }
    }

    /// Tutti i membri attuali, bot compreso, hanno letto (o confermato).
    /// Chi ha letto ed è uscito non copre chi è entrato dopo
    fn all_current_members_counted(&self, group: &Group) -> bool {
        let counted = self.counted();
        counted.contains(&group.bot().id)
            && group.member_ids().iter().all(|id| counted.contains(id))
    }

    fn materialize(&self, group: &Arc<Group>) -> OnlineAnnouncement {
        let status = ReadStatus::with_all_read(
            self.counted().len() as u32,
            group.member_count() as u32,
            self.all_current_members_counted(group),
        );
        OnlineAnnouncement::new(
            group.clone(),
            self.fid.clone(),
            self.sender_id,
            self.announcement.clone(),
            status,
            self.publish_time,
        )
    }
}

pub struct InMemoryAnnouncements {
    records: DashMap<(i64, String), StoredAnnouncement>,
}

impl Default for InMemoryAnnouncements {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryAnnouncements {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    /// Inserisce un annuncio già pubblicato. Ritorna `false` se il `fid`
    /// esiste già nel gruppo, in tal caso il record esistente non viene toccato.
    #[instrument(skip(self, record), fields(group_id = %group_id, fid = %record.fid))]
    pub fn insert(&self, group_id: i64, record: StoredAnnouncement) -> bool {
        let key = (group_id, record.fid.clone());
        if self.records.contains_key(&key) {
            warn!("Announcement fid already present in group");
            return false;
        }
        self.records.insert(key, record);
        debug!("Announcement stored");
        true
    }

    /// Registra la lettura di un membro del gruppo (o del bot)
    #[instrument(skip(self, group), fields(group_id = %group.id(), fid = %fid, member_id = %member_id))]
    pub fn mark_read(&self, group: &Group, fid: &str, member_id: i64) -> AppResult<()> {
        Self::require_member(group, member_id)?;
        let mut record = self
            .records
            .get_mut(&(group.id(), fid.to_string()))
            .ok_or_else(|| AppError::not_found("Announcement not found"))?;
        record.readers.insert(member_id);
        Ok(())
    }

    /// Registra la conferma di un membro del gruppo (implica la lettura)
    #[instrument(skip(self, group), fields(group_id = %group.id(), fid = %fid, member_id = %member_id))]
    pub fn mark_confirmed(&self, group: &Group, fid: &str, member_id: i64) -> AppResult<()> {
        Self::require_member(group, member_id)?;
        let mut record = self
            .records
            .get_mut(&(group.id(), fid.to_string()))
            .ok_or_else(|| AppError::not_found("Announcement not found"))?;
        record.readers.insert(member_id);
        record.confirmers.insert(member_id);
        Ok(())
    }

    fn require_member(group: &Group, member_id: i64) -> AppResult<()> {
        if member_id == group.bot().id || group.contains(member_id) {
            return Ok(());
        }
        warn!("Member {} is not part of the group", member_id);
        Err(AppError::not_found("Member not found in group")
            .with_details(format!("member_id = {member_id}")))
    }

    /// Numero di promemoria inviati per un annuncio, `None` se non esiste
    pub fn reminders(&self, group_id: i64, fid: &str) -> Option<u32> {
        self.records
            .get(&(group_id, fid.to_string()))
            .map(|r| r.reminders)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl Announcements for InMemoryAnnouncements {
    #[instrument(skip(self, group), fields(group_id = %group.id(), fid = %fid))]
    async fn get(&self, group: &Arc<Group>, fid: &str) -> AppResult<Option<OnlineAnnouncement>> {
        debug!("Reading announcement by fid");
        let found = self
            .records
            .get(&(group.id(), fid.to_string()))
            .map(|r| r.materialize(group));

        if found.is_none() {
            debug!("Announcement not found");
        }
        Ok(found)
    }

    #[instrument(skip(self, group), fields(group_id = %group.id()))]
    async fn list(&self, group: &Arc<Group>) -> AppResult<Vec<OnlineAnnouncement>> {
        let mut records: Vec<StoredAnnouncement> = self
            .records
            .iter()
            .filter(|r| r.key().0 == group.id())
            .map(|r| r.value().clone())
            .collect();
        records.sort_by(|a, b| {
            b.publish_time
                .cmp(&a.publish_time)
                .then_with(|| a.fid.cmp(&b.fid))
        });

        debug!("Found {} announcements", records.len());
        Ok(records.iter().map(|r| r.materialize(group)).collect())
    }

    #[instrument(skip(self, group), fields(group_id = %group.id(), fid = %fid))]
    async fn delete(&self, group: &Group, fid: &str) -> AppResult<bool> {
        require_operator(group)?;

        let removed = self.records.remove(&(group.id(), fid.to_string())).is_some();
        if removed {
            info!("Announcement deleted");
        } else {
            debug!("Announcement already absent");
        }
        Ok(removed)
    }

    #[instrument(skip(self, group), fields(group_id = %group.id(), fid = %fid))]
    async fn members(
        &self,
        group: &Group,
        fid: &str,
        confirmed: bool,
    ) -> AppResult<Vec<Arc<NormalMember>>> {
        let record = self
            .records
            .get(&(group.id(), fid.to_string()))
            .ok_or_else(|| AppError::not_found("Announcement not found"))?;
        let counted = record.counted();

        let mut ids: Vec<i64> = group
            .member_ids()
            .into_iter()
            .filter(|id| counted.contains(id) == confirmed)
            .collect();
        ids.sort_unstable();

        Ok(ids.into_iter().filter_map(|id| group.get_member(id)).collect())
    }

    #[instrument(skip(self, group), fields(group_id = %group.id(), fid = %fid))]
    async fn remind(&self, group: &Group, fid: &str) -> AppResult<()> {
        require_operator(group)?;

        let mut record = self
            .records
            .get_mut(&(group.id(), fid.to_string()))
            .ok_or_else(|| AppError::not_found("Announcement not found"))?;

        if !record.need_confirm() {
            debug!("Reminder sent for announcement without confirmation");
        }
        record.reminders += 1;
        info!("Reminder sent");
        Ok(())
    }
}
