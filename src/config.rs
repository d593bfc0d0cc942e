//! Configuration for the solver.

/// Knobs controlling one search.
#[derive(Clone, Debug)]
pub struct SolverConfig {
    /// Maximum number of allocation attempts before the search aborts
    /// with `SolverError::BudgetExceeded`. The search is worst-case
    /// exponential in the number of candidates; the budget bounds
    /// pathological inputs. `None` removes the bound.
    pub max_attempts: Option<u64>,
    /// Logging verbosity: 0 silent, 1 committed decisions,
    /// 2 per-option attempts, 3 block-level internals.
    pub verbosity: u8,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            // Generous for a normal course load (tens of candidates),
            // small enough to terminate adversarial inputs quickly.
            max_attempts: Some(1_000_000),
            verbosity: 0,
        }
    }
}
