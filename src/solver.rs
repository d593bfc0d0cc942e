//! Recursive backtracking search over the time grid.
//!
//! Consumes the MRV-ordered candidate list, tentatively allocating each
//! option's slots on a single [`TimeGrid`] and rolling back on failure.
//! A slot conflict is never surfaced; it is the signal that drives the
//! search. Exhaustion and budget overrun are the only failure outcomes.

use thiserror::Error;

use crate::candidates::{build_candidates, Candidate};
use crate::config::SolverConfig;
use crate::grid::TimeGrid;
use crate::models::{Assignment, CourseMap, TimeSlot, Whitelist};
use crate::validation::{validate, ValidationError};
use crate::{log_attempt, log_decision, log_trace};

/// Failure outcomes of a solve call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// Every combination of options clashes; no schedule exists.
    #[error("no clash-free combination of classes exists")]
    NoFeasibleSchedule,
    /// The allocation-attempt budget ran out before the search finished.
    #[error("search budget exhausted after {attempts} allocation attempts")]
    BudgetExceeded { attempts: u64 },
    /// The input violated its contract (caught before any search work).
    #[error(transparent)]
    InvalidInput(#[from] ValidationError),
}

/// Counters describing one finished search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Allocation attempts made (one per option tried).
    pub attempts: u64,
}

/// Find one clash-free selection per (course, class-type) pair.
///
/// Validates the input, builds the MRV-ordered candidate list, and runs
/// the depth-first search against a fresh grid. The result is in
/// candidate order (MRV rank order); each assignment carries the true,
/// unrelaxed slots even for whitelisted class-types.
pub fn solve(
    courses: &CourseMap,
    whitelist: &Whitelist,
    config: &SolverConfig,
) -> Result<Vec<Assignment>, SolverError> {
    solve_with_stats(courses, whitelist, config).map(|(assignments, _)| assignments)
}

/// Like [`solve`], also returning search counters.
pub fn solve_with_stats(
    courses: &CourseMap,
    whitelist: &Whitelist,
    config: &SolverConfig,
) -> Result<(Vec<Assignment>, SearchStats), SolverError> {
    validate(courses, whitelist)?;
    let candidates = build_candidates(courses, whitelist)?;

    let mut searcher = Searcher {
        candidates: &candidates,
        grid: TimeGrid::new(),
        config,
        attempts: 0,
    };

    let mut chosen = Vec::with_capacity(candidates.len());
    let found = searcher.backtrack(0, &mut chosen)?;
    let stats = SearchStats {
        attempts: searcher.attempts,
    };
    if found {
        // The unwind pushes deepest-first; callers expect candidate order.
        chosen.reverse();
        Ok((chosen, stats))
    } else {
        Err(SolverError::NoFeasibleSchedule)
    }
}

/// Mutable state of one depth-first search. Never shared across calls;
/// the grid is mutated and rolled back along the active recursion only.
struct Searcher<'a> {
    candidates: &'a [Candidate],
    grid: TimeGrid,
    config: &'a SolverConfig,
    attempts: u64,
}

impl Searcher<'_> {
    /// Explore candidates from `index` onward. `Ok(true)` means a full
    /// assignment was found and pushed onto `chosen` during the unwind.
    /// On `Ok(false)` the grid is exactly as it was at entry.
    fn backtrack(
        &mut self,
        index: usize,
        chosen: &mut Vec<Assignment>,
    ) -> Result<bool, SolverError> {
        if index == self.candidates.len() {
            return Ok(true);
        }

        let candidate = &self.candidates[index];
        for option in &candidate.options {
            if !self.allocate(&option.search_slots)? {
                log_attempt!(
                    self.config.verbosity,
                    "clash: {} {} {}",
                    candidate.course_code,
                    candidate.class_type,
                    option.class_no
                );
                continue;
            }
            log_attempt!(
                self.config.verbosity,
                "placed: {} {} {}",
                candidate.course_code,
                candidate.class_type,
                option.class_no
            );
            log_trace!(self.config.verbosity, "grid now:\n{}", self.grid);

            if self.backtrack(index + 1, chosen)? {
                log_decision!(
                    self.config.verbosity,
                    "chose {} {} {}",
                    candidate.course_code,
                    candidate.class_type,
                    option.class_no
                );
                chosen.push(Assignment {
                    course_code: candidate.course_code.clone(),
                    class_no: option.class_no.clone(),
                    timeslots: option.true_slots.clone(),
                });
                return Ok(true);
            }

            self.deallocate(&option.search_slots);
        }

        log_decision!(
            self.config.verbosity,
            "exhausted: {} {}",
            candidate.course_code,
            candidate.class_type
        );
        Ok(false)
    }

    /// Tentatively occupy every slot of one option.
    ///
    /// On the first conflicting slot, the slots already added are
    /// cleared in reverse order, so a `false` return leaves the grid
    /// exactly as it was at entry. Counts one attempt against the
    /// budget; overrunning it aborts the whole search.
    fn allocate(&mut self, slots: &[TimeSlot]) -> Result<bool, SolverError> {
        if let Some(max) = self.config.max_attempts {
            if self.attempts >= max {
                return Err(SolverError::BudgetExceeded {
                    attempts: self.attempts,
                });
            }
        }
        self.attempts += 1;

        for (done, slot) in slots.iter().enumerate() {
            if !self.grid.add(slot.day, slot.start, slot.end) {
                for added in slots[..done].iter().rev() {
                    self.grid.clear(added.day, added.start, added.end);
                }
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Release every slot of a previously allocated option.
    fn deallocate(&mut self, slots: &[TimeSlot]) {
        for slot in slots.iter().rev() {
            self.grid.clear(slot.day, slot.start, slot.end);
        }
    }
}
