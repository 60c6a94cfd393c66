//! Shared identity record for people tracked by the registry.

use std::fmt;

/// Identity fields common to everyone in the records system.
///
/// [`Student`] and [`Faculty`] embed this record by value rather than
/// inheriting from it. Both fields are fixed at construction; the registry
/// keys people by `id`.
///
/// [`Student`]: crate::Student
/// [`Faculty`]: crate::Faculty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    id: String,
    name: String,
}

impl Person {
    /// Constructs a person from an identifier and a display name.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// The unique identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID: {}, Name: {}", self.id, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::Person;

    #[test]
    fn display_includes_both_identity_fields() {
        let person = Person::new("P1", "Ada Lovelace");
        assert_eq!(person.to_string(), "ID: P1, Name: Ada Lovelace");
    }
}
