//! User role names.
//!
//! Roles are stored as plain strings in the `users` table; these constants
//! are the canonical set the platform recognizes.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_PROJECT_MANAGER: &str = "project_manager";
pub const ROLE_TEAM_MEMBER: &str = "team_member";
pub const ROLE_GUEST: &str = "guest";

/// All recognized role names, in descending order of privilege.
pub const ALL_ROLES: [&str; 4] = [ROLE_ADMIN, ROLE_PROJECT_MANAGER, ROLE_TEAM_MEMBER, ROLE_GUEST];

/// Whether `role` is one of the recognized role names.
pub fn is_valid_role(role: &str) -> bool {
    ALL_ROLES.contains(&role)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_roles_are_valid() {
        for role in ALL_ROLES {
            assert!(is_valid_role(role), "{role} should be valid");
        }
    }

    #[test]
    fn unknown_role_is_invalid() {
        assert!(!is_valid_role("superuser"));
        assert!(!is_valid_role(""));
    }
}
