//! Family member data
//!
//! A member is a role label plus a name and an age. Roles carry no behavior
//! of their own; they only pick the printed `Type:` label.

use std::fmt;
use std::io::{self, Write};

// ============================================================================
// Role
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Mother,
    Father,
    Daughter,
    Son,
}

impl Role {
    /// Every role, in the order the sample household lists them
    pub const ALL: [Role; 4] = [Role::Mother, Role::Father, Role::Daughter, Role::Son];

    pub fn label(&self) -> &'static str {
        match self {
            Role::Mother => "Mother",
            Role::Father => "Father",
            Role::Daughter => "Daughter",
            Role::Son => "Son",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Member
// ============================================================================

/// One family participant. Fields are private so a member never changes
/// after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyMember {
    role: Role,
    name: String,
    age: i32,
}

impl FamilyMember {
    /// Build a member. Neither the name nor the age is validated.
    pub fn new(role: Role, name: impl Into<String>, age: i32) -> Self {
        Self {
            role,
            name: name.into(),
            age,
        }
    }

    pub fn mother(name: impl Into<String>, age: i32) -> Self {
        Self::new(Role::Mother, name, age)
    }

    pub fn father(name: impl Into<String>, age: i32) -> Self {
        Self::new(Role::Father, name, age)
    }

    pub fn daughter(name: impl Into<String>, age: i32) -> Self {
        Self::new(Role::Daughter, name, age)
    }

    pub fn son(name: impl Into<String>, age: i32) -> Self {
        Self::new(Role::Son, name, age)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    /// Write this member's line, newline included
    pub fn display_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self)
    }

    /// Print this member's line to stdout. A closed stdout is ignored.
    pub fn display(&self) {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let _ = self.display_to(&mut out).and_then(|()| out.flush());
    }
}

impl fmt::Display for FamilyMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type: {}, Name: {}, Age: {}", self.role, self.name, self.age)
    }
}
