//! Group entity - Gruppo visto dal client

use super::bot::Bot;
use super::enums::UserRole;
use super::member::NormalMember;
use crate::repositories::Announcements;
use dashmap::DashMap;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

pub struct Group {
    id: i64,
    name: String,
    bot: Arc<Bot>,
    /// Ruolo del bot nel gruppo, può cambiare nel tempo (promozioni, retrocessioni)
    bot_role: AtomicU8,
    /// Membri attualmente nel gruppo, escluso il bot. Key: member id
    members: DashMap<i64, Arc<NormalMember>>,
    /// Collection manager degli annunci, condiviso tra i gruppi dello stesso client
    announcements: Arc<dyn Announcements>,
}

impl Group {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        bot: Arc<Bot>,
        bot_role: UserRole,
        announcements: Arc<dyn Announcements>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            bot,
            bot_role: AtomicU8::new(bot_role.as_u8()),
            members: DashMap::new(),
            announcements,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bot(&self) -> &Arc<Bot> {
        &self.bot
    }

    pub fn bot_role(&self) -> UserRole {
        UserRole::from_u8(self.bot_role.load(Ordering::Acquire))
    }

    pub fn set_bot_role(&self, role: UserRole) {
        self.bot_role.store(role.as_u8(), Ordering::Release);
    }

    pub fn announcements(&self) -> &Arc<dyn Announcements> {
        &self.announcements
    }

    /// Risolve un membro per id. `None` se il membro non è (più) nel gruppo
    pub fn get_member(&self, id: i64) -> Option<Arc<NormalMember>> {
        self.members.get(&id).map(|m| m.value().clone())
    }

    pub fn contains(&self, id: i64) -> bool {
        self.members.contains_key(&id)
    }

    pub fn add_member(&self, member: NormalMember) -> Arc<NormalMember> {
        let member = Arc::new(member);
        self.members.insert(member.id, member.clone());
        member
    }

    pub fn remove_member(&self, id: i64) -> Option<Arc<NormalMember>> {
        self.members.remove(&id).map(|(_, m)| m)
    }

    /// Numero di membri attuali, bot incluso
    pub fn member_count(&self) -> usize {
        self.members.len() + 1
    }

    pub fn member_ids(&self) -> Vec<i64> {
        self.members.iter().map(|m| *m.key()).collect()
    }
}

impl fmt::Debug for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Group")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("bot", &self.bot.id)
            .field("bot_role", &self.bot_role())
            .field("members", &self.members.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::InMemoryAnnouncements;

    fn group(role: UserRole) -> Group {
        Group::new(
            100,
            "Rustaceans",
            Arc::new(Bot::new(1, "bot")),
            role,
            Arc::new(InMemoryAnnouncements::new()),
        )
    }

    #[test]
    fn test_member_lifecycle() {
        let g = group(UserRole::Member);
        g.add_member(NormalMember::new(2, "alice", UserRole::Member));
        g.add_member(NormalMember::new(3, "bob", UserRole::Admin));

        assert_eq!(g.member_count(), 3);
        assert!(g.contains(2));
        assert_eq!(g.get_member(3).unwrap().name_card, "bob");

        let removed = g.remove_member(2).unwrap();
        assert_eq!(removed.id, 2);
        assert!(g.get_member(2).is_none());
        assert_eq!(g.member_count(), 2);
    }

    #[test]
    fn test_bot_role_can_change() {
        let g = group(UserRole::Member);
        assert_eq!(g.bot_role(), UserRole::Member);
        g.set_bot_role(UserRole::Admin);
        assert_eq!(g.bot_role(), UserRole::Admin);
        g.set_bot_role(UserRole::Owner);
        assert_eq!(g.bot_role(), UserRole::Owner);
    }
}
