//! Family roster for multi-profile subscriptions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One subscription covers up to five family members.
pub const MAX_FAMILY_MEMBERS: usize = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FamilyError {
    #[error("family roster already holds {MAX_FAMILY_MEMBERS} members")]
    RosterFull,
}

/// A family member attached to the subscription.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FamilyMember {
    pub name: String,
    pub age: u8,
    /// Note shown under the name, e.g. braces or implants.
    pub note: String,
}

/// Roster with the capacity cap applied on insert.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FamilyRoster {
    members: Vec<FamilyMember>,
}

impl FamilyRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Roster pre-filled the way the purchase page shows it.
    pub fn sample() -> Self {
        Self {
            members: vec![
                FamilyMember {
                    name: "수빈".to_string(),
                    age: 13,
                    note: "교정 중".to_string(),
                },
                FamilyMember {
                    name: "시어머니".to_string(),
                    age: 78,
                    note: "임플란트".to_string(),
                },
            ],
        }
    }

    pub fn members(&self) -> &[FamilyMember] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= MAX_FAMILY_MEMBERS
    }

    pub fn add(&mut self, member: FamilyMember) -> Result<(), FamilyError> {
        if self.is_full() {
            return Err(FamilyError::RosterFull);
        }
        self.members.push(member);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Option<FamilyMember> {
        if index < self.members.len() {
            Some(self.members.remove(index))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(name: &str) -> FamilyMember {
        FamilyMember {
            name: name.to_string(),
            age: 30,
            note: String::new(),
        }
    }

    #[test]
    fn test_sample_roster() {
        let roster = FamilyRoster::sample();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.members()[0].name, "수빈");
        assert!(!roster.is_full());
    }

    #[test]
    fn test_roster_caps_at_five() {
        let mut roster = FamilyRoster::new();
        for i in 0..MAX_FAMILY_MEMBERS {
            assert!(roster.add(member(&format!("m{i}"))).is_ok());
        }
        assert!(roster.is_full());
        assert_eq!(roster.add(member("extra")), Err(FamilyError::RosterFull));
        assert_eq!(roster.len(), MAX_FAMILY_MEMBERS);
    }

    #[test]
    fn test_remove_frees_a_slot() {
        let mut roster = FamilyRoster::sample();
        let removed = roster.remove(0);
        assert_eq!(removed.map(|m| m.name), Some("수빈".to_string()));
        assert_eq!(roster.len(), 1);
        assert!(roster.remove(5).is_none());
    }
}
