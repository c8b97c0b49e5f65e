//! Household - owns the ordered list of family members

use crate::components::{FamilyMember, Role};
use tracing::debug;

/// The fixed family the binary reports on
const SAMPLE_MEMBERS: &[(Role, &str, i32)] = &[
    (Role::Mother, "Alice", 45),
    (Role::Father, "Bob", 48),
    (Role::Daughter, "Charlotte", 15),
    (Role::Son, "David", 12),
];

#[derive(Debug, Clone, Default)]
pub struct Household {
    members: Vec<FamilyMember>,
}

impl Household {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the four fixed members
    pub fn sample() -> Self {
        let mut household = Self::new();
        for &(role, name, age) in SAMPLE_MEMBERS {
            household.push(FamilyMember::new(role, name, age));
        }
        debug!("Seeded sample household with {} members", household.len());
        household
    }

    /// Append a member; insertion order is the report order
    pub fn push(&mut self, member: FamilyMember) {
        self.members.push(member);
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
}

impl FromIterator<FamilyMember> for Household {
    fn from_iter<I: IntoIterator<Item = FamilyMember>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}
