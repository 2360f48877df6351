//! Duty-roster assignment engine.
//!
//! Assigns exactly one responsible person to each day of a period, based
//! on per-person, per-day preference scores in `0..=10`, maximizing the
//! total satisfied preference. A score of 0 is a hard exclusion — that
//! person can never be assigned that day.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `PreferenceMatrix`, `Roster`,
//!   `DutyAssignment`
//! - **`eligibility`**: Per-day candidate sets and infeasibility detection
//! - **`solver`**: Solving strategies (`GreedySolver`,
//!   `BoundedSearchSolver`), `RosterKpi`, and the `optimize` entry point
//! - **`error`**: The `SolveError` taxonomy
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use duty_roster::solver;
//!
//! let mut prefs: HashMap<String, HashMap<String, i32>> = HashMap::new();
//! prefs.insert("alice".into(), HashMap::from([("2025-08-01".into(), 5)]));
//! prefs.insert("bob".into(), HashMap::from([("2025-08-01".into(), 8)]));
//!
//! let roster = solver::optimize(&prefs).unwrap();
//! assert_eq!(roster.person_for_day("2025-08-01"), Some("bob"));
//! assert_eq!(roster.total_score, 8);
//! ```
//!
//! # Architecture
//!
//! The engine is a pure, synchronous computation over an immutable input
//! snapshot: it performs no I/O, holds no process-wide state, and defines
//! no locks or caches. Concurrent solves on distinct snapshots need no
//! coordination. The exactly-one-per-day requirement is the only
//! constraint coupling entities, so the objective is additively separable
//! across days and the default greedy strategy is provably optimal; the
//! `RosterSolver` trait is the seam for substituting a search-based
//! backend should cross-day constraints ever be added.
//!
//! # Reference
//!
//! - Burkard, Dell'Amico & Martello (2009), "Assignment Problems"

pub mod eligibility;
pub mod error;
pub mod models;
pub mod solver;
