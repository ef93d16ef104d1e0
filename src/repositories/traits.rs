//! Collection manager trait
//!
//! This module defines the interface used by groups to fetch and delete
//! announcements stored on the server.

use crate::core::AppResult;
use crate::entities::{Group, NormalMember, OnlineAnnouncement};
use async_trait::async_trait;
use std::sync::Arc;

/// Collection manager for the announcements of a group
///
/// Every operation is keyed by the owning group and, where relevant, by the
/// announcement `fid`. Implementations perform the actual I/O; callers get
/// errors back unchanged and nothing is retried.
#[async_trait]
pub trait Announcements: Send + Sync {
    /// Reads a single announcement by `fid`
    ///
    /// # Returns
    /// * `Ok(Some(OnlineAnnouncement))` - Announcement found
    /// * `Ok(None)` - No announcement with that `fid` in the group
    /// * `Err(AppError)` - Error during reading
    async fn get(&self, group: &Arc<Group>, fid: &str) -> AppResult<Option<OnlineAnnouncement>>;

    /// Reads every announcement currently published in the group
    ///
    /// # Note
    /// Announcements are returned newest first.
    async fn list(&self, group: &Arc<Group>) -> AppResult<Vec<OnlineAnnouncement>>;

    /// Deletes an announcement. Requires the bot to be Admin or Owner.
    ///
    /// # Returns
    /// * `Ok(true)` - Announcement deleted
    /// * `Ok(false)` - Announcement already absent, nothing to do
    /// * `Err(AppError)` - `PermissionDenied`, or a transport/protocol failure
    async fn delete(&self, group: &Group, fid: &str) -> AppResult<bool>;

    /// Lists the members that have (`confirmed = true`) or have not
    /// (`confirmed = false`) read the announcement, or confirmed it when
    /// `need_confirm` is set
    ///
    /// # Note
    /// Members that already left the group are not returned.
    async fn members(
        &self,
        group: &Group,
        fid: &str,
        confirmed: bool,
    ) -> AppResult<Vec<Arc<NormalMember>>>;

    /// Reminds the members that have not confirmed yet. Requires the bot to be
    /// Admin or Owner.
    ///
    /// # Returns
    /// * `Ok(())` - Reminder sent
    /// * `Err(AppError)` - `PermissionDenied`, `NotFound` if the announcement
    ///   does not exist, or a transport/protocol failure
    async fn remind(&self, group: &Group, fid: &str) -> AppResult<()>;
}
