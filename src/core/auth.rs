use crate::core::{AppError, AppResult};
use crate::entities::Group;
use tracing::{debug, instrument, warn};

/// Helper function per verificare che il bot sia Admin o Owner nel gruppo
///
/// # Returns
/// * `Ok(())` se il ruolo è permesso
/// * `Err(AppError)` con kind `PermissionDenied` altrimenti
#[instrument(skip(group), fields(group_id = %group.id()))]
pub fn require_operator(group: &Group) -> AppResult<()> {
    let bot_role = group.bot_role();
    debug!("Checking operator role for bot {} in group", group.bot().id);
    if !bot_role.is_operator() {
        warn!(
            "Bot {} has role {:?}, this action requires Admin or Owner",
            group.bot().id,
            bot_role
        );
        return Err(AppError::permission_denied("Insufficient role")
            .with_details("This action requires one of the following roles: [Admin, Owner]"));
    }

    Ok(())
}
