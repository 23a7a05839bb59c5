//! Shared data model: the problem instance, settings, and the solution report.
//!
//! The ordering of `Instance::classes` and `Instance::subjects` is part of the
//! contract: a subject's index is its position in `subjects`. Maps that need
//! deterministic iteration (class hours, parallel limits, block preferences)
//! use `BTreeMap`/`BTreeSet` rather than hashed collections, since the model
//! builder's traversal order must be reproducible run to run.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

pub const DAY_NAMES: [&str; 5] = ["Mo", "Tu", "We", "Th", "Fr"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    pub id: String,
    pub name: String,
    pub max_weekly_hours: u32,
    pub qualified_subjects: BTreeSet<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BreakPolicy {
    Sliding {
        max_consecutive_hours: u32,
        break_window_start: u32,
        break_window_end: u32,
    },
    FixedGlobal {
        global_break: u32,
        break_window_start: u32,
        break_window_end: u32,
    },
}

impl BreakPolicy {
    /// The break window as an inclusive `[start, end]` range of hours.
    pub fn window(&self) -> (u32, u32) {
        match self {
            BreakPolicy::Sliding {
                break_window_start,
                break_window_end,
                ..
            }
            | BreakPolicy::FixedGlobal {
                break_window_start,
                break_window_end,
                ..
            } => (*break_window_start, *break_window_end),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub prefer_early_hours: bool,
    pub allow_block_scheduling: bool,
    pub max_hours_per_day_per_subject: u32,
    pub break_policy: BreakPolicy,
    pub weight_block: u32,
    pub weight_time_of_day: u32,
    pub max_solve_seconds: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instance {
    pub classes: Vec<String>,
    pub subjects: Vec<String>,
    pub days: u32,
    pub hours_per_day: u32,
    pub teachers: Vec<Teacher>,
    pub class_hours: BTreeMap<String, BTreeMap<String, u32>>,
    #[serde(default)]
    pub parallel_limits: BTreeMap<String, u32>,
    #[serde(default)]
    pub prefer_block_subjects: BTreeMap<String, u32>,
    pub settings: Settings,
}

/// Per-day, per-hour table of human-readable slot entries (`"<subject> (<who>)"` or `"free"`).
///
/// Row length is `hours_per_day` under the sliding-window policy, but
/// `hours_per_day + 1` under `BreakPolicy::FixedGlobal`: the extractor
/// inserts a literal `"free"` entry at `global_break`, shifting every
/// later index by one.
pub type DayTable = BTreeMap<&'static str, Vec<String>>;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SolutionReport {
    Success {
        classes: BTreeMap<String, DayTable>,
        teachers: BTreeMap<String, DayTable>,
    },
    NoSolution,
}
