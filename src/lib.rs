//! In-memory academic records management.
//!
//! Students, faculty and courses live in a single [`Registry`] owned by the
//! caller. The registry enforces key uniqueness, checks prerequisite
//! satisfaction on enrollment, and keeps both sides of every
//! student↔course and faculty↔course relationship consistent.

pub mod domain;
pub use domain::{Config, Course, Faculty, Person, Student};

/// Write-only JSON export of registry state.
pub mod export;
pub use export::Snapshot;

pub mod registry;
pub use registry::{
    AssignError, AssignOutcome, EnrollError, EnrollOutcome, InsertError, Registry, Roster,
    RosterEntry, RosterError,
};
