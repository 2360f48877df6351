//! Preference matrix model.
//!
//! Maps (person, day) pairs to integer preference scores. The matrix is
//! conceptually a total function: the day set is the union of all days
//! supplied for any person, and every pair not explicitly supplied scores
//! 0, which marks it ineligible. The defaulting happens once, at
//! construction, rather than through scattered fallback lookups.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use crate::error::SolveError;

/// Preference score type.
pub type Score = i32;

/// Lowest valid score. A score of 0 is a hard exclusion.
pub const MIN_SCORE: Score = 0;

/// Highest valid score.
pub const MAX_SCORE: Score = 10;

/// A normalized, immutable preference matrix.
///
/// Person and day identifiers are held sorted lexicographically, so every
/// downstream iteration order — and therefore every tie-break — is
/// reproducible regardless of input map ordering. Scores live in a dense
/// row-major table (`persons × days`); entries never supplied are 0.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use duty_roster::models::PreferenceMatrix;
///
/// let mut prefs: HashMap<String, HashMap<String, i32>> = HashMap::new();
/// prefs.insert("alice".into(), HashMap::from([("2025-08-01".into(), 5)]));
/// prefs.insert("bob".into(), HashMap::from([("2025-08-02".into(), 7)]));
///
/// let matrix = PreferenceMatrix::from_scores(&prefs).unwrap();
/// assert_eq!(matrix.days(), ["2025-08-01", "2025-08-02"]);
/// assert_eq!(matrix.weight("alice", "2025-08-01"), 5);
/// // Missing entries default to 0 and are ineligible.
/// assert_eq!(matrix.weight("alice", "2025-08-02"), 0);
/// assert!(!matrix.eligible("alice", "2025-08-02"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferenceMatrix {
    persons: Vec<String>,
    days: Vec<String>,
    scores: Vec<Score>,
}

impl PreferenceMatrix {
    /// Builds a matrix from raw per-person day→score maps.
    ///
    /// The day set is the union of all days mentioned under any person;
    /// ragged inputs are reconciled by defaulting missing pairs to 0.
    /// Scores outside `MIN_SCORE..=MAX_SCORE` fail with
    /// `SolveError::InvalidScore`; entries are checked in sorted
    /// (person, day) order so the reported offender is deterministic.
    pub fn from_scores(
        preferences: &HashMap<String, HashMap<String, Score>>,
    ) -> Result<Self, SolveError> {
        let mut persons: Vec<String> = preferences.keys().cloned().collect();
        persons.sort();

        let days: Vec<String> = preferences
            .values()
            .flat_map(|m| m.keys().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let mut scores = vec![MIN_SCORE; persons.len() * days.len()];
        for (p, person) in persons.iter().enumerate() {
            let day_map = &preferences[person];
            for (d, day) in days.iter().enumerate() {
                if let Some(&score) = day_map.get(day) {
                    if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
                        return Err(SolveError::InvalidScore {
                            person: person.clone(),
                            day: day.clone(),
                            score,
                        });
                    }
                    scores[p * days.len() + d] = score;
                }
            }
        }

        Ok(Self {
            persons,
            days,
            scores,
        })
    }

    /// Person identifiers, sorted lexicographically.
    pub fn persons(&self) -> &[String] {
        &self.persons
    }

    /// Day identifiers, sorted lexicographically.
    pub fn days(&self) -> &[String] {
        &self.days
    }

    /// Number of persons.
    pub fn person_count(&self) -> usize {
        self.persons.len()
    }

    /// Number of days.
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Whether the matrix has no (person, day) cells to assign.
    pub fn is_empty(&self) -> bool {
        self.persons.is_empty() || self.days.is_empty()
    }

    /// Score for a (person, day) pair. Unknown identifiers score 0.
    pub fn weight(&self, person: &str, day: &str) -> Score {
        match (self.person_index(person), self.day_index(day)) {
            (Some(p), Some(d)) => self.weight_at(p, d),
            _ => MIN_SCORE,
        }
    }

    /// Whether the person may be assigned the day (score > 0).
    pub fn eligible(&self, person: &str, day: &str) -> bool {
        self.weight(person, day) > MIN_SCORE
    }

    /// Highest weight any person holds for the day. Unknown days score 0.
    pub fn day_max(&self, day: &str) -> Score {
        match self.day_index(day) {
            Some(d) => (0..self.person_count())
                .map(|p| self.weight_at(p, d))
                .max()
                .unwrap_or(MIN_SCORE),
            None => MIN_SCORE,
        }
    }

    /// Index-based score lookup for the solvers.
    pub(crate) fn weight_at(&self, person: usize, day: usize) -> Score {
        self.scores[person * self.days.len() + day]
    }

    fn person_index(&self, person: &str) -> Option<usize> {
        self.persons
            .binary_search_by(|p| p.as_str().cmp(person))
            .ok()
    }

    fn day_index(&self, day: &str) -> Option<usize> {
        self.days.binary_search_by(|d| d.as_str().cmp(day)).ok()
    }
}
