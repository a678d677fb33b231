//! Admin allow-list for mutating commands.

use crate::framework::{Context, Error};
use statusboard_common::UserId;
use std::collections::HashSet;
use tracing::debug;

/// Static set of users allowed to change the board.
#[derive(Debug, Clone, Default)]
pub struct AdminList {
    ids: HashSet<UserId>,
}

impl AdminList {
    /// Creates an allow-list from user ids.
    pub fn new(ids: impl IntoIterator<Item = UserId>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    /// Check if a user is an administrator
    pub fn is_admin(&self, user: UserId) -> bool {
        self.ids.contains(&user)
    }

    /// Number of administrators.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nobody is allowed to change the board.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Poise check rejecting callers that are not on the admin list.
///
/// A `false` result is answered by the framework error handler with a
/// private denial.
pub async fn admin_only(ctx: Context<'_>) -> Result<bool, Error> {
    let user = UserId(ctx.author().id.get());
    let allowed = ctx.data().admins.is_admin(user);
    debug!("Admin check for user {}: {}", user, allowed);
    Ok(allowed)
}
