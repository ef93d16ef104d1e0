//! Repositories module - Collection manager degli annunci
//!
//! Il trait `Announcements` è l'unico punto da cui passano fetch e cancellazioni.
//! - `memory`: implementazione in memoria, usata localmente e nei test
//! - `remote`: implementazione HTTP verso il server degli annunci

pub mod memory;
pub mod remote;
pub mod traits;

// Re-esportazione per facilitare l'import
pub use memory::{InMemoryAnnouncements, StoredAnnouncement};
pub use remote::RemoteAnnouncements;
pub use traits::Announcements;
