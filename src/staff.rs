//! Staff Roster
//!
//! Fixed list of staff members plus per-role presentation hints.

use crate::models::{StaffMember, StaffRole};

impl StaffRole {
    pub fn label(&self) -> &'static str {
        match self {
            StaffRole::Owner => "Owner",
            StaffRole::CoOwner => "Co Owner",
            StaffRole::Manager => "Manager",
            StaffRole::Developer => "Developer",
            StaffRole::SrAdmin => "SR Admin",
            StaffRole::Admin => "Admin",
            StaffRole::Helper => "Helper",
        }
    }

    /// Badge glyph: crown for owners, shield for management, wrench for developers
    pub fn icon(&self) -> &'static str {
        match self {
            StaffRole::Owner | StaffRole::CoOwner => "👑",
            StaffRole::Manager | StaffRole::SrAdmin => "🛡",
            StaffRole::Developer => "🔧",
            StaffRole::Admin | StaffRole::Helper => "👥",
        }
    }

    /// CSS class carrying the role's accent color
    pub fn accent_class(&self) -> &'static str {
        match self {
            StaffRole::Owner => "accent-yellow",
            StaffRole::CoOwner => "accent-gold",
            StaffRole::Manager => "accent-red",
            StaffRole::Developer => "accent-blue",
            StaffRole::SrAdmin => "accent-green",
            StaffRole::Admin => "accent-purple",
            StaffRole::Helper => "accent-cyan",
        }
    }
}

/// Staff list in display order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    members: Vec<StaffMember>,
}

impl Roster {
    pub fn from_seed(members: Vec<StaffMember>) -> Self {
        Self { members }
    }

    pub fn members(&self) -> &[StaffMember] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(name: &str, role: StaffRole) -> StaffMember {
        StaffMember {
            name: name.to_string(),
            role,
            description: String::new(),
            avatar: String::new(),
        }
    }

    #[test]
    fn test_roster_keeps_seed_order() {
        let roster = Roster::from_seed(vec![
            member("ru_", StaffRole::CoOwner),
            member("Gerhart", StaffRole::Developer),
            member("SJ", StaffRole::Developer),
        ]);
        let names: Vec<&str> = roster.members().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["ru_", "Gerhart", "SJ"]);
        assert_eq!(roster.len(), 3);
        assert!(Roster::default().is_empty());
    }

    #[test]
    fn test_role_label_matches_serde_name() {
        for role in [
            StaffRole::Owner,
            StaffRole::CoOwner,
            StaffRole::Manager,
            StaffRole::Developer,
            StaffRole::SrAdmin,
            StaffRole::Admin,
            StaffRole::Helper,
        ] {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.label()));
        }
    }
}
