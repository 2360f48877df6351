//! Per-day eligibility derived from a preference matrix.
//!
//! A person is eligible for a day iff their score for it is nonzero.
//! The only constraint coupling entities is "exactly one assignee per
//! day" — nothing links different days — so the sum-of-scores objective
//! is additively separable: maximizing it globally is the same as
//! maximizing it independently for every day. The solvers rely on this.
//!
//! Days with no eligible person make the problem infeasible. The scan
//! does not stop at the first such day: all of them are collected in one
//! pass so the caller gets complete diagnostics at once.

use crate::error::SolveError;
use crate::models::PreferenceMatrix;

/// Per-day eligible candidate sets.
///
/// Candidate lists hold person indices into `matrix.persons()`, in
/// ascending order — which is lexicographic order of the identifiers,
/// since the matrix keeps persons sorted.
#[derive(Debug, Clone)]
pub struct EligibilityModel {
    candidates: Vec<Vec<usize>>,
    infeasible: Vec<String>,
}

impl EligibilityModel {
    /// Derives eligibility from a matrix.
    pub fn from_matrix(matrix: &PreferenceMatrix) -> Self {
        let mut candidates = Vec::with_capacity(matrix.day_count());
        let mut infeasible = Vec::new();

        for d in 0..matrix.day_count() {
            let eligible: Vec<usize> = (0..matrix.person_count())
                .filter(|&p| matrix.weight_at(p, d) > 0)
                .collect();
            if eligible.is_empty() {
                infeasible.push(matrix.days()[d].clone());
            }
            candidates.push(eligible);
        }

        Self {
            candidates,
            infeasible,
        }
    }

    /// Eligible person indices for a day, ascending.
    pub fn candidates(&self, day: usize) -> &[usize] {
        &self.candidates[day]
    }

    /// Days with no eligible person, in day order.
    pub fn infeasible_days(&self) -> &[String] {
        &self.infeasible
    }

    /// Whether every day has at least one eligible person.
    pub fn is_feasible(&self) -> bool {
        self.infeasible.is_empty()
    }

    /// Fails with `Infeasible` listing every uncoverable day.
    pub fn ensure_feasible(&self) -> Result<(), SolveError> {
        if self.infeasible.is_empty() {
            Ok(())
        } else {
            Err(SolveError::Infeasible {
                days: self.infeasible.clone(),
            })
        }
    }
}
