//! Announcements library - annunci di gruppo visti da un client connesso
//!
//! Espone l'entità `OnlineAnnouncement` e i collection manager che la producono
//! e la eliminano sul server.

pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{AppError, AppResult, ClientState, Config, ErrorKind, init_tracing};
pub use entities::{
    Announcement, AnnouncementParameters, Bot, Group, NormalMember, OfflineAnnouncement, Online,
    OnlineAnnouncement, ReadStatus, UserRole,
};
pub use repositories::{Announcements, InMemoryAnnouncements, RemoteAnnouncements};
