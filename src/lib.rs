//! Weekly timetable constraint solver.
//!
//! Given a set of required courses, each decomposed into class-types
//! (Lecture, Tutorial, ...) offering mutually-exclusive weekly time
//! slots, finds one selection per class-type such that no two selected
//! slots overlap. Conflict detection runs over a per-week occupancy
//! grid at 15-minute granularity; the search is ordered backtracking
//! with a minimum-remaining-values heuristic and an optional
//! "whitelist" relaxation that forces selected class-types through
//! regardless of clashes.
//!
//! Retrieval of catalog data, the HTTP/CLI front-ends, and the
//! shareable-link encoding of a solution live outside this crate; it
//! speaks only the course map in, assignment list out.

pub mod candidates;
pub mod config;
pub mod grid;
pub mod logging;
pub mod models;
pub mod solver;
pub mod validation;

pub use candidates::{build_candidates, Candidate, ClassOption};
pub use config::SolverConfig;
pub use grid::TimeGrid;
pub use models::{class_type_abbr, Assignment, CourseMap, SlotTime, TimeSlot, Whitelist};
pub use solver::{solve, solve_with_stats, SearchStats, SolverError};
pub use validation::{validate, ValidationError};
