//! DTOs module - Data Transfer Objects
//!
//! I DTOs separano la rappresentazione del server (JSON) dalle entità del client.

pub mod announcement;

pub use announcement::{AnnouncementDTO, MembersQuery};
