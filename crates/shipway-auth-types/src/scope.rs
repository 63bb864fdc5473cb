//! Package access-scope policy.

use uuid::Uuid;

/// Who a package lookup is allowed to see.
///
/// Handlers resolve the scope from the route and the caller's role, then
/// pass it down to the query layer. One handler serves both the
/// owner-facing and the admin-facing retrieve/update routes; the scope
/// value is the only difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageScope {
    /// Only packages owned by this user are visible.
    Owner(Uuid),
    /// Every package is visible. Admin routes only.
    Any,
}

impl PackageScope {
    /// Whether a package owned by `owner_id` is visible under this scope.
    pub fn allows(&self, owner_id: Uuid) -> bool {
        match self {
            Self::Owner(user_id) => *user_id == owner_id,
            Self::Any => true,
        }
    }

    /// The owner filter to apply in queries, if any.
    pub fn owner_filter(&self) -> Option<Uuid> {
        match self {
            Self::Owner(user_id) => Some(*user_id),
            Self::Any => None,
        }
    }
}
