//! Faculty entity: identity plus department and assigned courses.

use std::fmt;

use crate::domain::Person;

/// A faculty member tracked by the registry.
///
/// The assigned-course list is an insertion-ordered set, maintained by the
/// same rules as a student's enrolled-course list. [`Registry::assign`]
/// keeps the course's faculty slot in step with this list.
///
/// [`Registry::assign`]: crate::Registry::assign
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Faculty {
    person: Person,
    department: String,
    assigned_courses: Vec<String>,
}

impl Faculty {
    /// Constructs a faculty member with no course assignments.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            person: Person::new(id, name),
            department: department.into(),
            assigned_courses: Vec::new(),
        }
    }

    /// The faculty member's identity record.
    #[must_use]
    pub const fn person(&self) -> &Person {
        &self.person
    }

    /// The unique faculty identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        self.person.id()
    }

    /// The display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.person.name()
    }

    /// The department.
    #[must_use]
    pub fn department(&self) -> &str {
        &self.department
    }

    /// Replaces the department.
    pub fn set_department(&mut self, department: impl Into<String>) {
        self.department = department.into();
    }

    /// Course codes assigned to this member, in assignment order.
    #[must_use]
    pub fn assigned_courses(&self) -> &[String] {
        &self.assigned_courses
    }

    /// Whether the given course code is on the assignment list.
    #[must_use]
    pub fn is_assigned_to(&self, code: &str) -> bool {
        self.assigned_courses.iter().any(|c| c == code)
    }

    /// Records a course assignment.
    ///
    /// Returns `true` if the code was newly added; assigning a course that
    /// is already on the list leaves it untouched.
    pub fn assign_course(&mut self, code: impl Into<String>) -> bool {
        let code = code.into();
        if self.is_assigned_to(&code) {
            false
        } else {
            self.assigned_courses.push(code);
            true
        }
    }

    /// Removes a course assignment.
    ///
    /// Returns `true` if the code was present and removed. Unassigning an
    /// absent code is a no-op.
    pub fn unassign_course(&mut self, code: &str) -> bool {
        let before = self.assigned_courses.len();
        self.assigned_courses.retain(|c| c != code);
        self.assigned_courses.len() != before
    }
}

impl fmt::Display for Faculty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, Dept: {}, Assigned: {}",
            self.person,
            self.department,
            self.assigned_courses.len()
        )
    }
}
