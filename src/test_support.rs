//! Shared fixtures for unit tests across modules.

use std::collections::{BTreeMap, BTreeSet};

use crate::types::{BreakPolicy, Instance, Settings, Teacher};

/// A small, valid instance: two classes, two subjects, two teachers, no
/// parallel or block preferences. Individual tests mutate a clone of this
/// to exercise a single rejection rule at a time.
pub fn minimal_instance() -> Instance {
    let mut math_hours = BTreeMap::new();
    math_hours.insert("Math".to_string(), 4u32);
    math_hours.insert("German".to_string(), 3u32);

    let mut class_hours = BTreeMap::new();
    class_hours.insert("C1".to_string(), math_hours.clone());
    class_hours.insert("C2".to_string(), math_hours);

    let mut math_teacher_subjects = BTreeSet::new();
    math_teacher_subjects.insert("Math".to_string());
    let mut german_teacher_subjects = BTreeSet::new();
    german_teacher_subjects.insert("German".to_string());

    Instance {
        classes: vec!["C1".to_string(), "C2".to_string()],
        subjects: vec!["Math".to_string(), "German".to_string()],
        days: 5,
        hours_per_day: 6,
        teachers: vec![
            Teacher {
                id: "T1".to_string(),
                name: "Alice".to_string(),
                max_weekly_hours: 20,
                qualified_subjects: math_teacher_subjects,
            },
            Teacher {
                id: "T2".to_string(),
                name: "Bob".to_string(),
                max_weekly_hours: 20,
                qualified_subjects: german_teacher_subjects,
            },
        ],
        class_hours,
        parallel_limits: BTreeMap::new(),
        prefer_block_subjects: BTreeMap::new(),
        settings: Settings {
            prefer_early_hours: true,
            allow_block_scheduling: true,
            max_hours_per_day_per_subject: 2,
            break_policy: BreakPolicy::Sliding {
                max_consecutive_hours: 3,
                break_window_start: 2,
                break_window_end: 4,
            },
            weight_block: 1,
            weight_time_of_day: 1,
            max_solve_seconds: 10,
        },
    }
}
