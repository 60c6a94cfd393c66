//! Write-only JSON export of registry state.
//!
//! Person records carry a `"type"` discriminator so a consumer can tell
//! students and faculty apart; course records do not. That asymmetry is
//! part of the export format this tool has always produced and is locked
//! in by tests. There is no loader for this format.

use serde::Serialize;

use crate::{
    Registry,
    domain::{Course, Faculty, Person, Student},
};

/// Serializable view of a person, tagged with a `"type"` discriminator.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PersonRecord<'a> {
    /// A bare identity record.
    Person {
        /// Unique identifier.
        id: &'a str,
        /// Display name.
        name: &'a str,
    },
    /// A student and their enrollments.
    Student {
        /// Unique identifier.
        id: &'a str,
        /// Display name.
        name: &'a str,
        /// Declared major.
        major: &'a str,
        /// Enrolled course codes, in enrollment order.
        enrolled_courses: &'a [String],
    },
    /// A faculty member and their assignments.
    Faculty {
        /// Unique identifier.
        id: &'a str,
        /// Display name.
        name: &'a str,
        /// Department.
        department: &'a str,
        /// Assigned course codes, in assignment order.
        assigned_courses: &'a [String],
    },
}

impl<'a> From<&'a Person> for PersonRecord<'a> {
    fn from(person: &'a Person) -> Self {
        Self::Person {
            id: person.id(),
            name: person.name(),
        }
    }
}

impl<'a> From<&'a Student> for PersonRecord<'a> {
    fn from(student: &'a Student) -> Self {
        Self::Student {
            id: student.id(),
            name: student.name(),
            major: student.major(),
            enrolled_courses: student.enrolled_courses(),
        }
    }
}

impl<'a> From<&'a Faculty> for PersonRecord<'a> {
    fn from(member: &'a Faculty) -> Self {
        Self::Faculty {
            id: member.id(),
            name: member.name(),
            department: member.department(),
            assigned_courses: member.assigned_courses(),
        }
    }
}

/// Serializable view of a course.
///
/// Unlike [`PersonRecord`] this carries no `"type"` tag.
#[derive(Debug, Serialize)]
pub struct CourseRecord<'a> {
    course_code: &'a str,
    title: &'a str,
    credits: u32,
    prerequisites: &'a [String],
    enrolled_students: &'a [String],
    assigned_faculty_id: Option<&'a str>,
}

impl<'a> From<&'a Course> for CourseRecord<'a> {
    fn from(course: &'a Course) -> Self {
        Self {
            course_code: course.code(),
            title: course.title(),
            credits: course.credits(),
            prerequisites: course.prerequisites(),
            enrolled_students: course.enrolled_students(),
            assigned_faculty_id: course.assigned_faculty(),
        }
    }
}

/// Point-in-time export of the whole registry.
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    students: Vec<PersonRecord<'a>>,
    faculty: Vec<PersonRecord<'a>>,
    courses: Vec<CourseRecord<'a>>,
}

impl<'a> From<&'a Registry> for Snapshot<'a> {
    fn from(registry: &'a Registry) -> Self {
        Self {
            students: registry.students().map(PersonRecord::from).collect(),
            faculty: registry.faculty().map(PersonRecord::from).collect(),
            courses: registry.courses().map(CourseRecord::from).collect(),
        }
    }
}

impl Snapshot<'_> {
    /// Renders the snapshot as a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
