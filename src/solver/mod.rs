//! Roster solvers.
//!
//! The assignment problem here is separable: exactly-one-per-day is the
//! only coupling constraint, so the per-day argmax of `GreedySolver` is
//! already the global optimum. `BoundedSearchSolver` is a general
//! search-based backend kept behind the same trait for forward
//! compatibility; on today's model it is required to reproduce the greedy
//! result exactly, tie-breaks included.
//!
//! # Tie-break policy
//!
//! When several eligible persons share a day's maximum weight, the
//! lexicographically smallest person identifier wins. This is a stated
//! policy, not an artifact of enumeration order: it makes repeated solves
//! of the same input byte-for-byte reproducible.

mod greedy;
mod kpi;
mod search;

pub use greedy::GreedySolver;
pub use kpi::RosterKpi;
pub use search::BoundedSearchSolver;

use std::collections::HashMap;

use crate::error::SolveError;
use crate::models::{DutyAssignment, PreferenceMatrix, Roster, Score};

/// Solver configuration.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Maximum solve time in milliseconds.
    ///
    /// Only search-based solvers enforce it; the greedy strategy is
    /// linear-time and ignores it.
    pub time_limit_ms: i64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            time_limit_ms: 10_000,
        }
    }
}

/// Trait for roster solver implementations.
///
/// Implementors compute an assignment maximizing the total preference
/// score subject to eligibility and exactly-one-per-day, or fail with a
/// structured error. They never return a partial roster.
pub trait RosterSolver {
    /// Solves the matrix under the given configuration.
    fn solve(
        &self,
        matrix: &PreferenceMatrix,
        config: &SolverConfig,
    ) -> Result<Roster, SolveError>;
}

/// Solves raw preferences with the default strategy and configuration.
///
/// Builds the matrix (rejecting out-of-range scores), short-circuits the
/// empty case, then runs `GreedySolver`.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use duty_roster::solver;
///
/// let mut prefs: HashMap<String, HashMap<String, i32>> = HashMap::new();
/// prefs.insert("alice".into(), HashMap::from([("2025-08-01".into(), 5)]));
///
/// let roster = solver::optimize(&prefs).unwrap();
/// assert_eq!(roster.total_score, 5);
/// ```
pub fn optimize(
    preferences: &HashMap<String, HashMap<String, Score>>,
) -> Result<Roster, SolveError> {
    let matrix = PreferenceMatrix::from_scores(preferences)?;
    if matrix.is_empty() {
        return Ok(Roster::default());
    }
    GreedySolver::new().solve(&matrix, &SolverConfig::default())
}

/// Builds the roster from per-day person choices.
///
/// `choices[d]` is the chosen person index for day `d`. Days come out in
/// matrix order (sorted), and the total accumulates as assignments are
/// added. Solver failures never reach this point.
pub(crate) fn assemble_roster(matrix: &PreferenceMatrix, choices: &[usize]) -> Roster {
    let mut roster = Roster::new();
    for (d, &p) in choices.iter().enumerate() {
        roster.add_assignment(DutyAssignment::new(
            matrix.days()[d].clone(),
            matrix.persons()[p].clone(),
            matrix.weight_at(p, d),
        ));
    }
    roster
}
