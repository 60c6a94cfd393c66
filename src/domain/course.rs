//! Course entity: catalogue data plus membership lists.

use std::fmt;

/// A course in the catalogue.
///
/// Prerequisite codes are not validated against the catalogue; a course may
/// name prerequisites that have not been registered yet. The enrollment
/// list and the single faculty slot record one side of their relationships
/// only; [`Registry::enroll`] and [`Registry::assign`] keep the person side
/// in step.
///
/// [`Registry::enroll`]: crate::Registry::enroll
/// [`Registry::assign`]: crate::Registry::assign
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    code: String,
    title: String,
    credits: u32,
    prerequisites: Vec<String>,
    enrolled_students: Vec<String>,
    assigned_faculty: Option<String>,
}

impl Course {
    /// Constructs a course with no enrollments and no assigned faculty.
    ///
    /// Duplicate prerequisite codes are collapsed, keeping first-seen
    /// order.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        title: impl Into<String>,
        credits: u32,
        prerequisites: Vec<String>,
    ) -> Self {
        let mut course = Self {
            code: code.into(),
            title: title.into(),
            credits,
            prerequisites: Vec::new(),
            enrolled_students: Vec::new(),
            assigned_faculty: None,
        };
        for prerequisite in prerequisites {
            course.add_prerequisite(prerequisite);
        }
        course
    }

    /// The unique course code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The course title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The credit value.
    #[must_use]
    pub const fn credits(&self) -> u32 {
        self.credits
    }

    /// Prerequisite course codes, in the order they were added.
    #[must_use]
    pub fn prerequisites(&self) -> &[String] {
        &self.prerequisites
    }

    /// Ids of enrolled students, in enrollment order.
    #[must_use]
    pub fn enrolled_students(&self) -> &[String] {
        &self.enrolled_students
    }

    /// Id of the assigned faculty member, if any.
    #[must_use]
    pub fn assigned_faculty(&self) -> Option<&str> {
        self.assigned_faculty.as_deref()
    }

    /// Adds a prerequisite code.
    ///
    /// Returns `true` if the code was newly added. The referenced course
    /// need not exist yet; forward references are permitted.
    pub fn add_prerequisite(&mut self, code: impl Into<String>) -> bool {
        let code = code.into();
        if self.prerequisites.contains(&code) {
            false
        } else {
            self.prerequisites.push(code);
            true
        }
    }

    /// Records a student id on the enrollment list.
    ///
    /// Returns `true` if the id was newly added. The id is not checked
    /// against the student collection; [`Registry::enroll`] is the guarded
    /// entry point.
    ///
    /// [`Registry::enroll`]: crate::Registry::enroll
    pub fn add_student(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.enrolled_students.contains(&id) {
            false
        } else {
            self.enrolled_students.push(id);
            true
        }
    }

    /// Removes a student id from the enrollment list.
    ///
    /// Returns `true` if the id was present and removed; removing an
    /// absent id is a no-op.
    pub fn remove_student(&mut self, id: &str) -> bool {
        let before = self.enrolled_students.len();
        self.enrolled_students.retain(|s| s != id);
        self.enrolled_students.len() != before
    }

    /// Assigns a faculty member, overwriting any previous occupant of the
    /// single faculty slot.
    ///
    /// Returns the displaced id. The previous member's own assignment list
    /// is not touched; that cleanup is nobody's job today and the registry
    /// surfaces the overwrite instead.
    pub fn assign_faculty(&mut self, id: impl Into<String>) -> Option<String> {
        self.assigned_faculty.replace(id.into())
    }

    /// Clears the faculty slot, returning the previous occupant.
    pub fn unassign_faculty(&mut self) -> Option<String> {
        self.assigned_faculty.take()
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Code: {}, Title: {}, Credits: {}, Prereqs: [{}], Enrolled: {}, Faculty: {}",
            self.code,
            self.title,
            self.credits,
            self.prerequisites.join(", "),
            self.enrolled_students.len(),
            self.assigned_faculty.as_deref().unwrap_or("None"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Course;

    fn course(prerequisites: &[&str]) -> Course {
        Course::new(
            "CS201",
            "Data Structures",
            4,
            prerequisites.iter().map(ToString::to_string).collect(),
        )
    }

    #[test]
    fn construction_collapses_duplicate_prerequisites() {
        let course = course(&["CS101", "MA101", "CS101"]);
        assert_eq!(course.prerequisites(), ["CS101", "MA101"]);
    }

    #[test]
    fn adding_a_prerequisite_twice_is_a_no_op() {
        let mut course = course(&[]);
        assert!(course.add_prerequisite("CS101"));
        assert!(!course.add_prerequisite("CS101"));
        assert_eq!(course.prerequisites(), ["CS101"]);
    }

    #[test]
    fn enrollment_list_rejects_duplicates_and_keeps_order() {
        let mut course = course(&[]);
        assert!(course.add_student("S1"));
        assert!(course.add_student("S2"));
        assert!(!course.add_student("S1"));
        assert_eq!(course.enrolled_students(), ["S1", "S2"]);
    }

    #[test]
    fn removing_an_absent_student_is_a_no_op() {
        let mut course = course(&[]);
        course.add_student("S1");
        assert!(!course.remove_student("S2"));
        assert_eq!(course.enrolled_students(), ["S1"]);
    }

    #[test]
    fn assigning_faculty_returns_the_displaced_occupant() {
        let mut course = course(&[]);
        assert_eq!(course.assign_faculty("F1"), None);
        assert_eq!(course.assign_faculty("F2"), Some("F1".to_string()));
        assert_eq!(course.assigned_faculty(), Some("F2"));
        assert_eq!(course.unassign_faculty(), Some("F2".to_string()));
        assert_eq!(course.assigned_faculty(), None);
    }

    #[test]
    fn display_uses_a_none_sentinel_for_the_empty_faculty_slot() {
        let course = course(&["CS101"]);
        assert_eq!(
            course.to_string(),
            "Code: CS201, Title: Data Structures, Credits: 4, Prereqs: [CS101], Enrolled: 0, Faculty: None"
        );
    }
}
