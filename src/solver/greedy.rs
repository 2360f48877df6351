//! Day-by-day argmax solver.
//!
//! # Algorithm
//!
//! 1. Derive per-day eligibility; fail with `Infeasible` (listing every
//!    uncoverable day) before producing any assignment.
//! 2. For each day independently, pick the eligible person with the
//!    highest weight; ties go to the lexicographically smallest
//!    identifier.
//!
//! Because no constraint links different days, the per-day choices do not
//! interact and this is the global optimum, not a heuristic.
//!
//! # Complexity
//! O(days × persons). The time budget in `SolverConfig` is irrelevant
//! here and is ignored.

use crate::eligibility::EligibilityModel;
use crate::error::SolveError;
use crate::models::{PreferenceMatrix, Roster};

use super::{assemble_roster, RosterSolver, SolverConfig};

/// The default, provably optimal solving strategy.
#[derive(Debug, Clone, Copy)]
pub struct GreedySolver;

impl GreedySolver {
    /// Creates a new solver.
    pub fn new() -> Self {
        Self
    }
}

impl Default for GreedySolver {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterSolver for GreedySolver {
    fn solve(
        &self,
        matrix: &PreferenceMatrix,
        _config: &SolverConfig,
    ) -> Result<Roster, SolveError> {
        let model = EligibilityModel::from_matrix(matrix);
        model.ensure_feasible()?;

        let mut choices = Vec::with_capacity(matrix.day_count());
        for d in 0..matrix.day_count() {
            // Candidates are ascending by identifier; a strict `>` keeps
            // the first (smallest) of any tied maximum.
            let mut best: Option<(usize, i32)> = None;
            for &p in model.candidates(d) {
                let w = matrix.weight_at(p, d);
                if best.map_or(true, |(_, bw)| w > bw) {
                    best = Some((p, w));
                }
            }
            // Unreachable after ensure_feasible, kept as a hard guard.
            let Some((p, _)) = best else {
                return Err(SolveError::Infeasible {
                    days: vec![matrix.days()[d].clone()],
                });
            };
            choices.push(p);
        }

        Ok(assemble_roster(matrix, &choices))
    }
}
