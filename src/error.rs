//! Solve error taxonomy.
//!
//! All failures are terminal for the solve call that raised them: the
//! computation is deterministic, so retrying the same input cannot change
//! the outcome. The caller fixes the input and re-invokes.

use thiserror::Error;

use crate::models::{Score, MAX_SCORE, MIN_SCORE};

/// Errors that terminate a solve call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// A supplied score lies outside the valid range.
    ///
    /// Reported for the first offending entry in sorted (person, day)
    /// order, so the same input always names the same offender.
    #[error(
        "invalid score {score} for person '{person}' on day '{day}' (valid range {min}..={max})",
        min = MIN_SCORE,
        max = MAX_SCORE
    )]
    InvalidScore {
        person: String,
        day: String,
        score: Score,
    },

    /// One or more days have no eligible (nonzero-score) person.
    ///
    /// Carries the complete list of offending days, collected in a single
    /// pass, so the caller can present every problem at once.
    #[error("no eligible person for day(s): {}", .days.join(", "))]
    Infeasible { days: Vec<String> },

    /// A search-based solver exceeded its time budget before finding a
    /// feasible solution. Distinct from `Infeasible`: feasibility is
    /// undetermined.
    #[error("solver exceeded its time budget of {time_limit_ms} ms")]
    Timeout { time_limit_ms: i64 },
}
