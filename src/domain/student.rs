//! Student entity: identity plus major and enrolled courses.

use std::fmt;

use crate::domain::Person;

/// A student tracked by the registry.
///
/// The enrolled-course list is an insertion-ordered set: each code appears
/// at most once, in the order it was first added. The mutators here touch
/// the student's side of the relationship only; [`Registry::enroll`] is the
/// entry point that keeps the course side in step.
///
/// [`Registry::enroll`]: crate::Registry::enroll
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    person: Person,
    major: String,
    enrolled_courses: Vec<String>,
}

impl Student {
    /// Constructs a student with no enrollments.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        major: impl Into<String>,
    ) -> Self {
        Self {
            person: Person::new(id, name),
            major: major.into(),
            enrolled_courses: Vec::new(),
        }
    }

    /// The student's identity record.
    #[must_use]
    pub const fn person(&self) -> &Person {
        &self.person
    }

    /// The unique student identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        self.person.id()
    }

    /// The student's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.person.name()
    }

    /// The declared major.
    #[must_use]
    pub fn major(&self) -> &str {
        &self.major
    }

    /// Replaces the declared major.
    pub fn set_major(&mut self, major: impl Into<String>) {
        self.major = major.into();
    }

    /// Course codes the student is enrolled in, in enrollment order.
    #[must_use]
    pub fn enrolled_courses(&self) -> &[String] {
        &self.enrolled_courses
    }

    /// Whether the student is enrolled in the given course code.
    #[must_use]
    pub fn is_enrolled_in(&self, code: &str) -> bool {
        self.enrolled_courses.iter().any(|c| c == code)
    }

    /// Records enrollment in a course.
    ///
    /// Returns `true` if the code was newly added, or `false` if the
    /// student was already enrolled (the list is left untouched).
    pub fn enroll_course(&mut self, code: impl Into<String>) -> bool {
        let code = code.into();
        if self.is_enrolled_in(&code) {
            false
        } else {
            self.enrolled_courses.push(code);
            true
        }
    }

    /// Drops a course.
    ///
    /// Returns `true` if the code was present and removed. Dropping a
    /// course the student is not enrolled in is a no-op.
    pub fn drop_course(&mut self, code: &str) -> bool {
        let before = self.enrolled_courses.len();
        self.enrolled_courses.retain(|c| c != code);
        self.enrolled_courses.len() != before
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, Major: {}, Enrolled: {}",
            self.person,
            self.major,
            self.enrolled_courses.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Student;

    #[test]
    fn enrolling_twice_keeps_a_single_entry() {
        let mut student = Student::new("S1", "Ada", "CS");
        assert!(student.enroll_course("CS101"));
        assert!(!student.enroll_course("CS101"));
        assert_eq!(student.enrolled_courses(), ["CS101"]);
    }

    #[test]
    fn enrollment_order_is_first_insertion_order() {
        let mut student = Student::new("S1", "Ada", "CS");
        student.enroll_course("CS101");
        student.enroll_course("MA101");
        student.enroll_course("CS101");
        assert_eq!(student.enrolled_courses(), ["CS101", "MA101"]);
    }

    #[test]
    fn dropping_an_absent_course_is_a_no_op() {
        let mut student = Student::new("S1", "Ada", "CS");
        student.enroll_course("CS101");
        assert!(!student.drop_course("MA101"));
        assert_eq!(student.enrolled_courses(), ["CS101"]);
    }

    #[test]
    fn display_summarises_identity_and_enrollment_count() {
        let mut student = Student::new("S1", "Ada", "CS");
        student.enroll_course("CS101");
        assert_eq!(
            student.to_string(),
            "ID: S1, Name: Ada, Major: CS, Enrolled: 1"
        );
    }
}
