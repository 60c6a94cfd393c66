//! Domain models for academic records.
//!
//! This module contains the entity types tracked by the registry: people
//! (students and faculty), courses, and tool configuration.

mod config;
pub use config::Config;

/// Course entity and its membership lists.
pub mod course;
pub use course::Course;

/// Faculty entity.
pub mod faculty;
pub use faculty::Faculty;

/// Shared identity record embedded in the person variants.
pub mod person;
pub use person::Person;

/// Student entity.
pub mod student;
pub use student::Student;
