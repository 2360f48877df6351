//! Roster (solution) model.
//!
//! A roster is a complete day→person assignment together with the total
//! preference score it achieves. Rosters are produced by the solvers and
//! are plain data: they never recompute or re-validate anything.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use super::preference::Score;

/// A complete solved roster.
///
/// Assignments are ordered by day. `total_score` is the sum of the
/// assigned scores; an empty roster totals 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    /// Day assignments, in day order.
    pub assignments: Vec<DutyAssignment>,
    /// Sum of assigned preference scores.
    pub total_score: i64,
}

/// One day's assignment record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DutyAssignment {
    /// Day identifier.
    pub day: String,
    /// Assigned person identifier.
    pub person: String,
    /// The person's preference score for this day.
    pub score: Score,
}

impl DutyAssignment {
    /// Creates a new assignment record.
    pub fn new(day: impl Into<String>, person: impl Into<String>, score: Score) -> Self {
        Self {
            day: day.into(),
            person: person.into(),
            score,
        }
    }
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an assignment and accumulates its score into the total.
    pub fn add_assignment(&mut self, assignment: DutyAssignment) {
        self.total_score += i64::from(assignment.score);
        self.assignments.push(assignment);
    }

    /// The person assigned to a day, if the day is covered.
    pub fn person_for_day(&self, day: &str) -> Option<&str> {
        self.assignments
            .iter()
            .find(|a| a.day == day)
            .map(|a| a.person.as_str())
    }

    /// The assigned score for a day, if the day is covered.
    pub fn score_for_day(&self, day: &str) -> Option<Score> {
        self.assignments.iter().find(|a| a.day == day).map(|a| a.score)
    }

    /// All days assigned to a person, in day order.
    pub fn days_for_person(&self, person: &str) -> Vec<&str> {
        self.assignments
            .iter()
            .filter(|a| a.person == person)
            .map(|a| a.day.as_str())
            .collect()
    }

    /// Number of days assigned per person.
    pub fn duty_counts(&self) -> HashMap<String, usize> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for a in &self.assignments {
            *counts.entry(a.person.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Day → person view, the shape the export surface consumes.
    pub fn day_map(&self) -> BTreeMap<&str, &str> {
        self.assignments
            .iter()
            .map(|a| (a.day.as_str(), a.person.as_str()))
            .collect()
    }

    /// Number of assignments.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// Whether the roster covers no days.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_roster() -> Roster {
        let mut r = Roster::new();
        r.add_assignment(DutyAssignment::new("2025-08-01", "bob", 8));
        r.add_assignment(DutyAssignment::new("2025-08-02", "alice", 9));
        r.add_assignment(DutyAssignment::new("2025-08-03", "bob", 4));
        r
    }

    #[test]
    fn test_total_accumulates() {
        let r = sample_roster();
        assert_eq!(r.total_score, 21);
        assert_eq!(r.assignment_count(), 3);
    }

    #[test]
    fn test_person_for_day() {
        let r = sample_roster();
        assert_eq!(r.person_for_day("2025-08-01"), Some("bob"));
        assert_eq!(r.person_for_day("2025-08-02"), Some("alice"));
        assert_eq!(r.person_for_day("2025-08-09"), None);
    }

    #[test]
    fn test_score_for_day() {
        let r = sample_roster();
        assert_eq!(r.score_for_day("2025-08-02"), Some(9));
        assert_eq!(r.score_for_day("2025-08-09"), None);
    }

    #[test]
    fn test_days_for_person() {
        let r = sample_roster();
        assert_eq!(r.days_for_person("bob"), ["2025-08-01", "2025-08-03"]);
        assert_eq!(r.days_for_person("alice"), ["2025-08-02"]);
        assert!(r.days_for_person("carol").is_empty());
    }

    #[test]
    fn test_duty_counts() {
        let r = sample_roster();
        let counts = r.duty_counts();
        assert_eq!(counts["bob"], 2);
        assert_eq!(counts["alice"], 1);
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_day_map() {
        let r = sample_roster();
        let map = r.day_map();
        assert_eq!(map.len(), 3);
        assert_eq!(map["2025-08-01"], "bob");
        assert_eq!(map["2025-08-02"], "alice");
    }

    #[test]
    fn test_empty_roster() {
        let r = Roster::new();
        assert!(r.is_empty());
        assert_eq!(r.total_score, 0);
        assert_eq!(r.assignment_count(), 0);
        assert!(r.day_map().is_empty());
    }

    #[test]
    fn test_serde_round_trip() {
        let r = sample_roster();
        let json = serde_json::to_string(&r).unwrap();
        let back: Roster = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
