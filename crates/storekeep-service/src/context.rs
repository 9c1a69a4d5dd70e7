//! Request context carrying the authenticated user.

use storekeep_entity::user::User;

/// Context for the current authenticated request.
///
/// Built by the API layer after the bearer token resolved to a live user
/// row, and passed into service methods so that every operation knows
/// *who* is acting.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The authenticated user, freshly read from the database.
    pub user: User,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user: User) -> Self {
        Self { user }
    }

    /// The authenticated user's id.
    pub fn user_id(&self) -> i64 {
        self.user.id
    }

    /// Returns whether the current user is an admin.
    pub fn is_admin(&self) -> bool {
        self.user.is_admin()
    }
}
