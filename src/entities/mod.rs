//! Entities module - Entità del dominio
//!
//! Questo modulo contiene le entità viste dal client: il bot, i gruppi con i loro
//! membri e gli annunci di gruppo.

pub mod announcement;
pub mod bot;
pub mod enums;
pub mod group;
pub mod member;
pub mod online_announcement;

// Re-exports per facilitare l'import
pub use announcement::{Announcement, AnnouncementParameters, OfflineAnnouncement};
pub use bot::Bot;
pub use enums::UserRole;
pub use group::Group;
pub use member::NormalMember;
pub use online_announcement::{Online, OnlineAnnouncement, ReadStatus};
