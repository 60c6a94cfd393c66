//! The registry: keyed collections of students, faculty and courses, plus
//! the cross-entity operations that keep both sides of every relationship
//! consistent.
//!
//! The [`Registry`] knows nothing about prompting or terminal output. It is
//! owned by the caller (the interactive menu in the binary, or a test) and
//! passed around explicitly.

use std::collections::{BTreeMap, btree_map::Entry};

use thiserror::Error;
use tracing::{debug, instrument};

use crate::domain::{Course, Faculty, Student};

/// Owns the three keyed collections and coordinates every mutation that
/// touches more than one of them.
///
/// Students and faculty are keyed by person id, courses by course code.
/// Keys are unique within their own collection; the `add_*` operations
/// reject duplicates rather than overwriting. `BTreeMap` keeps listings
/// deterministic.
///
/// The mutators on [`Student`], [`Faculty`] and [`Course`] each touch one
/// side of a relationship. [`Registry::enroll`] and [`Registry::assign`]
/// update both sides within a single `&mut self` call, so callers never
/// observe a half-applied relationship.
#[derive(Debug, Default)]
pub struct Registry {
    students: BTreeMap<String, Student>,
    faculty: BTreeMap<String, Faculty>,
    courses: BTreeMap<String, Course>,
}

/// Errors from adding an entity whose key is already taken.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InsertError {
    /// A student with this id is already registered.
    #[error("student {0} already exists")]
    StudentExists(String),
    /// A faculty member with this id is already registered.
    #[error("faculty member {0} already exists")]
    FacultyExists(String),
    /// A course with this code is already registered.
    #[error("course {0} already exists")]
    CourseExists(String),
}

/// Errors from [`Registry::enroll`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnrollError {
    /// The student id is not registered.
    #[error("student {0} not found")]
    StudentNotFound(String),
    /// The course code is not registered.
    #[error("course {0} not found")]
    CourseNotFound(String),
    /// The student has not completed every prerequisite of the course.
    #[error("prerequisites not satisfied for {course}: missing {}", .missing.join(", "))]
    PrerequisitesUnmet {
        /// The course the student attempted to enroll in.
        course: String,
        /// Prerequisite codes absent from the student's enrolled list.
        missing: Vec<String>,
    },
}

/// Errors from [`Registry::assign`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssignError {
    /// The faculty id is not registered.
    #[error("faculty member {0} not found")]
    FacultyNotFound(String),
    /// The course code is not registered.
    #[error("course {0} not found")]
    CourseNotFound(String),
}

/// Errors from [`Registry::roster`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    /// The course code is not registered.
    #[error("course {0} not found")]
    CourseNotFound(String),
}

/// Result of enrolling a student in a course.
#[derive(Debug)]
pub struct EnrollOutcome {
    /// Whether the student was already enrolled prior to the call.
    ///
    /// A repeat enrollment succeeds but changes nothing on either side.
    pub already_enrolled: bool,
}

/// Result of assigning a faculty member to a course.
#[derive(Debug)]
pub struct AssignOutcome {
    /// Id of the faculty member displaced from the course's single faculty
    /// slot, when the slot was occupied by someone else.
    ///
    /// The displaced member's own assignment list still names the course;
    /// the registry reports the overwrite but performs no cleanup.
    pub replaced: Option<String>,
    /// Whether this exact assignment was already in place.
    pub already_assigned: bool,
}

/// A course's enrollment, resolved to student names.
#[derive(Debug)]
pub struct Roster<'a> {
    /// The course the roster belongs to.
    pub course: &'a Course,
    /// Enrolled students, in enrollment order.
    pub entries: Vec<RosterEntry<'a>>,
}

/// One student on a roster.
#[derive(Debug)]
pub struct RosterEntry<'a> {
    /// The enrolled student's id.
    pub student_id: &'a str,
    /// The student's name, or `None` when the id has no matching record in
    /// the student collection.
    pub name: Option<&'a str>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a student.
    ///
    /// # Errors
    ///
    /// Returns [`InsertError::StudentExists`] if the id is already taken;
    /// the existing record is left untouched.
    pub fn add_student(&mut self, student: Student) -> Result<(), InsertError> {
        match self.students.entry(student.id().to_string()) {
            Entry::Occupied(entry) => Err(InsertError::StudentExists(entry.key().clone())),
            Entry::Vacant(entry) => {
                debug!(id = %student.id(), "registered student");
                entry.insert(student);
                Ok(())
            }
        }
    }

    /// Registers a faculty member.
    ///
    /// # Errors
    ///
    /// Returns [`InsertError::FacultyExists`] if the id is already taken;
    /// the existing record is left untouched.
    pub fn add_faculty(&mut self, member: Faculty) -> Result<(), InsertError> {
        match self.faculty.entry(member.id().to_string()) {
            Entry::Occupied(entry) => Err(InsertError::FacultyExists(entry.key().clone())),
            Entry::Vacant(entry) => {
                debug!(id = %member.id(), "registered faculty member");
                entry.insert(member);
                Ok(())
            }
        }
    }

    /// Registers a course.
    ///
    /// # Errors
    ///
    /// Returns [`InsertError::CourseExists`] if the code is already taken;
    /// the existing record is left untouched.
    pub fn add_course(&mut self, course: Course) -> Result<(), InsertError> {
        match self.courses.entry(course.code().to_string()) {
            Entry::Occupied(entry) => Err(InsertError::CourseExists(entry.key().clone())),
            Entry::Vacant(entry) => {
                debug!(code = %course.code(), "registered course");
                entry.insert(course);
                Ok(())
            }
        }
    }

    /// Looks up a student by id.
    #[must_use]
    pub fn student(&self, id: &str) -> Option<&Student> {
        self.students.get(id)
    }

    /// Looks up a faculty member by id.
    #[must_use]
    pub fn faculty_member(&self, id: &str) -> Option<&Faculty> {
        self.faculty.get(id)
    }

    /// Looks up a course by code.
    #[must_use]
    pub fn course(&self, code: &str) -> Option<&Course> {
        self.courses.get(code)
    }

    /// Iterates over students in id order.
    pub fn students(&self) -> impl Iterator<Item = &Student> {
        self.students.values()
    }

    /// Iterates over faculty members in id order.
    pub fn faculty(&self) -> impl Iterator<Item = &Faculty> {
        self.faculty.values()
    }

    /// Iterates over courses in code order.
    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.courses.values()
    }

    /// Number of registered students.
    #[must_use]
    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    /// Number of registered faculty members.
    #[must_use]
    pub fn faculty_count(&self) -> usize {
        self.faculty.len()
    }

    /// Number of registered courses.
    #[must_use]
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Enrolls a student in a course.
    ///
    /// Every prerequisite code of the course must already appear in the
    /// student's enrolled list; a course with no prerequisites always
    /// passes. On success both sides of the relationship are updated before
    /// this method returns; on any error neither side changes.
    ///
    /// # Errors
    ///
    /// Returns [`EnrollError::StudentNotFound`] or
    /// [`EnrollError::CourseNotFound`] when either key is absent, or
    /// [`EnrollError::PrerequisitesUnmet`] naming the missing codes.
    #[instrument(skip(self))]
    pub fn enroll(
        &mut self,
        student_id: &str,
        course_code: &str,
    ) -> Result<EnrollOutcome, EnrollError> {
        let student = self
            .students
            .get_mut(student_id)
            .ok_or_else(|| EnrollError::StudentNotFound(student_id.to_string()))?;
        let course = self
            .courses
            .get_mut(course_code)
            .ok_or_else(|| EnrollError::CourseNotFound(course_code.to_string()))?;

        let missing: Vec<String> = course
            .prerequisites()
            .iter()
            .filter(|code| !student.is_enrolled_in(code.as_str()))
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(EnrollError::PrerequisitesUnmet {
                course: course_code.to_string(),
                missing,
            });
        }

        let newly_enrolled = student.enroll_course(course_code);
        course.add_student(student_id);
        debug!(student_id, course_code, "enrolled");

        Ok(EnrollOutcome {
            already_enrolled: !newly_enrolled,
        })
    }

    /// Assigns a faculty member to a course.
    ///
    /// Both sides are updated unconditionally: the course code is appended
    /// to the member's assignment list (idempotently) and the course's
    /// single faculty slot is overwritten. A previously assigned member is
    /// only displaced from the course; their own list keeps the code. See
    /// [`AssignOutcome::replaced`].
    ///
    /// # Errors
    ///
    /// Returns [`AssignError::FacultyNotFound`] or
    /// [`AssignError::CourseNotFound`] when either key is absent.
    #[instrument(skip(self))]
    pub fn assign(
        &mut self,
        faculty_id: &str,
        course_code: &str,
    ) -> Result<AssignOutcome, AssignError> {
        let member = self
            .faculty
            .get_mut(faculty_id)
            .ok_or_else(|| AssignError::FacultyNotFound(faculty_id.to_string()))?;
        let course = self
            .courses
            .get_mut(course_code)
            .ok_or_else(|| AssignError::CourseNotFound(course_code.to_string()))?;

        member.assign_course(course_code);
        let previous = course.assign_faculty(faculty_id);
        let already_assigned = previous.as_deref() == Some(faculty_id);
        let replaced = previous.filter(|id| id != faculty_id);
        debug!(faculty_id, course_code, ?replaced, "assigned faculty");

        Ok(AssignOutcome {
            replaced,
            already_assigned,
        })
    }

    /// Resolves a course's roster.
    ///
    /// Entries appear in enrollment order. An id with no matching student
    /// record yields an entry with no name rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::CourseNotFound`] when the code is absent.
    pub fn roster(&self, course_code: &str) -> Result<Roster<'_>, RosterError> {
        let course = self
            .courses
            .get(course_code)
            .ok_or_else(|| RosterError::CourseNotFound(course_code.to_string()))?;

        let entries = course
            .enrolled_students()
            .iter()
            .map(|id| RosterEntry {
                student_id: id,
                name: self.students.get(id).map(Student::name),
            })
            .collect();

        Ok(Roster { course, entries })
    }
}

#[cfg(test)]
mod tests {
    use super::{AssignError, EnrollError, InsertError, Registry, RosterError};
    use crate::domain::{Course, Faculty, Student};

    fn course(code: &str, prerequisites: &[&str]) -> Course {
        Course::new(
            code,
            format!("{code} title"),
            3,
            prerequisites.iter().map(ToString::to_string).collect(),
        )
    }

    fn cs_track() -> Registry {
        let mut registry = Registry::new();
        registry
            .add_student(Student::new("S1", "Ada", "CS"))
            .unwrap();
        registry.add_course(course("CS101", &[])).unwrap();
        registry.add_course(course("CS201", &["CS101"])).unwrap();
        registry
    }

    #[test]
    fn duplicate_student_is_rejected_and_the_existing_record_kept() {
        let mut registry = Registry::new();
        registry
            .add_student(Student::new("S1", "Ada", "CS"))
            .unwrap();

        let err = registry
            .add_student(Student::new("S1", "Impostor", "EE"))
            .unwrap_err();

        assert_eq!(err, InsertError::StudentExists("S1".to_string()));
        assert_eq!(registry.student("S1").unwrap().name(), "Ada");
        assert_eq!(registry.student_count(), 1);
    }

    #[test]
    fn duplicate_faculty_and_course_keys_are_rejected() {
        let mut registry = Registry::new();
        registry
            .add_faculty(Faculty::new("F1", "Grace", "CS"))
            .unwrap();
        registry.add_course(course("CS101", &[])).unwrap();

        assert_eq!(
            registry
                .add_faculty(Faculty::new("F1", "Other", "EE"))
                .unwrap_err(),
            InsertError::FacultyExists("F1".to_string())
        );
        assert_eq!(
            registry
                .add_course(Course::new("CS101", "Shadow", 1, Vec::new()))
                .unwrap_err(),
            InsertError::CourseExists("CS101".to_string())
        );
        assert_eq!(registry.course("CS101").unwrap().title(), "CS101 title");
    }

    #[test]
    fn enrollment_requires_both_keys() {
        let mut registry = cs_track();

        assert_eq!(
            registry.enroll("S9", "CS101").unwrap_err(),
            EnrollError::StudentNotFound("S9".to_string())
        );
        assert_eq!(
            registry.enroll("S1", "XX999").unwrap_err(),
            EnrollError::CourseNotFound("XX999".to_string())
        );
    }

    #[test]
    fn enrollment_updates_both_sides() {
        let mut registry = cs_track();

        let outcome = registry.enroll("S1", "CS101").unwrap();

        assert!(!outcome.already_enrolled);
        assert!(registry.student("S1").unwrap().is_enrolled_in("CS101"));
        assert_eq!(registry.course("CS101").unwrap().enrolled_students(), ["S1"]);
    }

    #[test]
    fn unmet_prerequisites_block_enrollment_and_mutate_nothing() {
        let mut registry = cs_track();

        let err = registry.enroll("S1", "CS201").unwrap_err();

        assert_eq!(
            err,
            EnrollError::PrerequisitesUnmet {
                course: "CS201".to_string(),
                missing: vec!["CS101".to_string()],
            }
        );
        assert!(registry.student("S1").unwrap().enrolled_courses().is_empty());
        assert!(registry.course("CS201").unwrap().enrolled_students().is_empty());
    }

    #[test]
    fn enrollment_succeeds_once_prerequisites_are_met() {
        let mut registry = cs_track();

        registry.enroll("S1", "CS201").unwrap_err();
        registry.enroll("S1", "CS101").unwrap();
        registry.enroll("S1", "CS201").unwrap();

        assert_eq!(
            registry.student("S1").unwrap().enrolled_courses(),
            ["CS101", "CS201"]
        );
        assert_eq!(registry.course("CS201").unwrap().enrolled_students(), ["S1"]);
    }

    #[test]
    fn repeat_enrollment_is_reported_and_adds_nothing() {
        let mut registry = cs_track();

        assert!(!registry.enroll("S1", "CS101").unwrap().already_enrolled);
        assert!(registry.enroll("S1", "CS101").unwrap().already_enrolled);

        assert_eq!(registry.student("S1").unwrap().enrolled_courses(), ["CS101"]);
        assert_eq!(registry.course("CS101").unwrap().enrolled_students(), ["S1"]);
    }

    #[test]
    fn assignment_requires_both_keys() {
        let mut registry = cs_track();
        registry
            .add_faculty(Faculty::new("F1", "Grace", "CS"))
            .unwrap();

        assert_eq!(
            registry.assign("F9", "CS101").unwrap_err(),
            AssignError::FacultyNotFound("F9".to_string())
        );
        assert_eq!(
            registry.assign("F1", "XX999").unwrap_err(),
            AssignError::CourseNotFound("XX999".to_string())
        );
    }

    #[test]
    fn assignment_updates_both_sides() {
        let mut registry = cs_track();
        registry
            .add_faculty(Faculty::new("F1", "Grace", "CS"))
            .unwrap();

        let outcome = registry.assign("F1", "CS101").unwrap();

        assert_eq!(outcome.replaced, None);
        assert!(!outcome.already_assigned);
        assert_eq!(registry.course("CS101").unwrap().assigned_faculty(), Some("F1"));
        assert_eq!(
            registry.faculty_member("F1").unwrap().assigned_courses(),
            ["CS101"]
        );
    }

    #[test]
    fn reassignment_overwrites_the_slot_but_not_the_old_assignment_list() {
        // The displaced member's own list intentionally keeps the course;
        // the registry reports the overwrite without cleaning it up.
        let mut registry = cs_track();
        registry
            .add_faculty(Faculty::new("F1", "Grace", "CS"))
            .unwrap();
        registry
            .add_faculty(Faculty::new("F2", "Edsger", "CS"))
            .unwrap();

        registry.assign("F1", "CS101").unwrap();
        let outcome = registry.assign("F2", "CS101").unwrap();

        assert_eq!(outcome.replaced.as_deref(), Some("F1"));
        assert_eq!(registry.course("CS101").unwrap().assigned_faculty(), Some("F2"));
        assert_eq!(
            registry.faculty_member("F1").unwrap().assigned_courses(),
            ["CS101"]
        );
    }

    #[test]
    fn repeat_assignment_is_flagged_and_adds_nothing() {
        let mut registry = cs_track();
        registry
            .add_faculty(Faculty::new("F1", "Grace", "CS"))
            .unwrap();

        assert!(!registry.assign("F1", "CS101").unwrap().already_assigned);
        let outcome = registry.assign("F1", "CS101").unwrap();

        assert!(outcome.already_assigned);
        assert_eq!(outcome.replaced, None);
        assert_eq!(
            registry.faculty_member("F1").unwrap().assigned_courses(),
            ["CS101"]
        );
    }

    #[test]
    fn roster_resolves_names_in_enrollment_order() {
        let mut registry = cs_track();
        registry
            .add_student(Student::new("S2", "Barbara", "CS"))
            .unwrap();

        registry.enroll("S2", "CS101").unwrap();
        registry.enroll("S1", "CS101").unwrap();

        let roster = registry.roster("CS101").unwrap();
        let names: Vec<_> = roster.entries.iter().map(|entry| entry.name).collect();

        assert_eq!(roster.course.code(), "CS101");
        assert_eq!(names, [Some("Barbara"), Some("Ada")]);
    }

    #[test]
    fn roster_of_an_unknown_course_is_an_error() {
        let registry = cs_track();
        assert_eq!(
            registry.roster("XX999").unwrap_err(),
            RosterError::CourseNotFound("XX999".to_string())
        );
    }

    #[test]
    fn dangling_roster_id_degrades_to_a_missing_name() {
        let mut registry = Registry::new();
        let mut imported = course("CS101", &[]);
        imported.add_student("GHOST");
        registry.add_course(imported).unwrap();

        let roster = registry.roster("CS101").unwrap();

        assert_eq!(roster.entries.len(), 1);
        assert_eq!(roster.entries[0].student_id, "GHOST");
        assert_eq!(roster.entries[0].name, None);
    }
}
