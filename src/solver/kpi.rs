//! Roster quality metrics (KPIs).
//!
//! Computes satisfaction and workload indicators from a solved roster
//! and the matrix it was solved against.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total Score | Sum of assigned preference scores |
//! | Mean Score | Average assigned score per day |
//! | Min Score | Lowest assigned score on any day |
//! | Max Load | Most days carried by a single person |
//! | Top-Choice Rate | Fraction of days assigned at the day's maximum weight |

use std::collections::HashMap;

use crate::models::{PreferenceMatrix, Roster, Score};

/// Roster performance indicators.
#[derive(Debug, Clone)]
pub struct RosterKpi {
    /// Sum of assigned preference scores.
    pub total_score: i64,
    /// Average assigned score per day.
    pub mean_score: f64,
    /// Lowest assigned score on any day (0 for an empty roster).
    pub min_score: Score,
    /// Days assigned per person.
    pub load_by_person: HashMap<String, usize>,
    /// Most days carried by a single person.
    pub max_load: usize,
    /// Fraction of days assigned at the day's maximum weight (0.0..1.0).
    pub top_choice_rate: f64,
}

impl RosterKpi {
    /// Computes KPIs from a roster and the matrix it was solved against.
    pub fn calculate(roster: &Roster, matrix: &PreferenceMatrix) -> Self {
        let count = roster.assignment_count();
        let mut min_score: Option<Score> = None;
        let mut top_choice = 0usize;

        for a in &roster.assignments {
            min_score = Some(min_score.map_or(a.score, |m| m.min(a.score)));
            if a.score == matrix.day_max(&a.day) {
                top_choice += 1;
            }
        }

        let load_by_person = roster.duty_counts();
        let max_load = load_by_person.values().copied().max().unwrap_or(0);

        let mean_score = if count == 0 {
            0.0
        } else {
            roster.total_score as f64 / count as f64
        };
        let top_choice_rate = if count == 0 {
            1.0
        } else {
            top_choice as f64 / count as f64
        };

        Self {
            total_score: roster.total_score,
            mean_score,
            min_score: min_score.unwrap_or(0),
            load_by_person,
            max_load,
            top_choice_rate,
        }
    }

    /// Whether the roster meets the given quality thresholds.
    pub fn meets_thresholds(&self, min_mean_score: f64, max_load: usize) -> bool {
        self.mean_score >= min_mean_score && self.max_load <= max_load
    }
}
