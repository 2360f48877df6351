//! Bounded depth-first search solver.
//!
//! A general search-based backend kept behind `RosterSolver` for forward
//! compatibility: unlike the greedy strategy it still works if future
//! constraint kinds couple the day-by-day choices. On today's separable
//! model it must return exactly the greedy optimum, tie-breaks included;
//! the candidate ordering below guarantees that.
//!
//! # Algorithm
//!
//! Days are expanded in sorted order. Each day's candidates are ordered
//! by descending weight, then ascending identifier, so the first leaf the
//! search reaches is the greedy optimum. A suffix upper bound (the best
//! still-achievable total) prunes every branch that cannot strictly beat
//! the incumbent, which also preserves the first-found tie-break.
//!
//! The search runs against a wall-clock deadline from
//! `SolverConfig::time_limit_ms`. Hitting the deadline with no feasible
//! incumbent fails with `Timeout`; with one, the incumbent is returned.

use std::cmp::Reverse;
use std::time::{Duration, Instant};

use crate::eligibility::EligibilityModel;
use crate::error::SolveError;
use crate::models::{PreferenceMatrix, Roster};

use super::{assemble_roster, RosterSolver, SolverConfig};

/// Search-based solving strategy with a time budget.
#[derive(Debug, Clone, Copy)]
pub struct BoundedSearchSolver;

impl BoundedSearchSolver {
    /// Creates a new solver.
    pub fn new() -> Self {
        Self
    }
}

impl Default for BoundedSearchSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterSolver for BoundedSearchSolver {
    fn solve(
        &self,
        matrix: &PreferenceMatrix,
        config: &SolverConfig,
    ) -> Result<Roster, SolveError> {
        let model = EligibilityModel::from_matrix(matrix);
        model.ensure_feasible()?;

        if matrix.day_count() == 0 {
            return Ok(Roster::new());
        }

        let deadline =
            Instant::now() + Duration::from_millis(config.time_limit_ms.max(0) as u64);

        // Best-first candidate order per day: descending weight, and the
        // stable sort keeps ties ascending by identifier.
        let mut ordered: Vec<Vec<usize>> = Vec::with_capacity(matrix.day_count());
        for d in 0..matrix.day_count() {
            let mut candidates = model.candidates(d).to_vec();
            candidates.sort_by_key(|&p| Reverse(matrix.weight_at(p, d)));
            ordered.push(candidates);
        }

        // suffix_bound[d]: best achievable total over days d..end.
        let mut suffix_bound = vec![0i64; matrix.day_count() + 1];
        for d in (0..matrix.day_count()).rev() {
            let day_best = i64::from(matrix.weight_at(ordered[d][0], d));
            suffix_bound[d] = suffix_bound[d + 1] + day_best;
        }

        let mut search = Search {
            matrix,
            ordered: &ordered,
            suffix_bound: &suffix_bound,
            deadline,
            best_total: i64::MIN,
            best_choices: Vec::new(),
            choices: Vec::with_capacity(matrix.day_count()),
        };

        match search.descend(0, 0) {
            Ok(()) => {}
            Err(DeadlineExceeded) if search.best_total == i64::MIN => {
                return Err(SolveError::Timeout {
                    time_limit_ms: config.time_limit_ms,
                });
            }
            // Feasible incumbent found before the deadline: keep it.
            Err(DeadlineExceeded) => {}
        }

        Ok(assemble_roster(matrix, &search.best_choices))
    }
}

struct DeadlineExceeded;

struct Search<'a> {
    matrix: &'a PreferenceMatrix,
    ordered: &'a [Vec<usize>],
    suffix_bound: &'a [i64],
    deadline: Instant,
    best_total: i64,
    best_choices: Vec<usize>,
    choices: Vec<usize>,
}

impl Search<'_> {
    fn descend(&mut self, day: usize, total: i64) -> Result<(), DeadlineExceeded> {
        if Instant::now() >= self.deadline {
            return Err(DeadlineExceeded);
        }

        if day == self.ordered.len() {
            // Strict improvement only: the first optimum found (the one
            // with the smallest tied identifiers) is never displaced.
            if total > self.best_total {
                self.best_total = total;
                self.best_choices = self.choices.clone();
            }
            return Ok(());
        }

        let ordered = self.ordered;
        for &p in &ordered[day] {
            let weight = i64::from(self.matrix.weight_at(p, day));
            // Candidates are best-first: once one cannot beat the
            // incumbent, none of the rest can either.
            if total + weight + self.suffix_bound[day + 1] <= self.best_total {
                break;
            }
            self.choices.push(p);
            let result = self.descend(day + 1, total + weight);
            self.choices.pop();
            result?;
        }

        Ok(())
    }
}
