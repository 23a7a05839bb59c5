//! Integration tests against the boundary scenarios (S1–S5) and a sample
//! of the universal invariants (P1–P9) from the testable-properties list.

use std::collections::{BTreeMap, BTreeSet};

use timetable_core::solve_instance;
use timetable_core::solver::SolverConfig;
use timetable_core::types::{BreakPolicy, Instance, Settings, SolutionReport, Teacher};

fn settings(break_policy: BreakPolicy) -> Settings {
    Settings {
        prefer_early_hours: true,
        allow_block_scheduling: true,
        max_hours_per_day_per_subject: 2,
        break_policy,
        weight_block: 1,
        weight_time_of_day: 1,
        max_solve_seconds: 10,
    }
}

fn qualified(subjects: &[&str]) -> BTreeSet<String> {
    subjects.iter().map(|s| s.to_string()).collect()
}

fn count_subject(day_rows: &BTreeMap<&'static str, Vec<String>>, subject: &str) -> usize {
    day_rows
        .values()
        .flatten()
        .filter(|entry| entry.starts_with(subject))
        .count()
}

/// S1: 1 class, 1 subject (Math, 5h/week), 1 teacher (cap 5), H=2, sliding
/// window with max_consecutive=1, window=[0,1]. Expect Math placed in
/// exactly 5 of 10 slots, never two in a row, at least one free period in
/// the window each day.
#[test]
fn s1_single_class_single_subject_sliding_window() {
    let mut hours = BTreeMap::new();
    hours.insert("Math".to_string(), 5u32);
    let mut class_hours = BTreeMap::new();
    class_hours.insert("C1".to_string(), hours);

    let instance = Instance {
        classes: vec!["C1".to_string()],
        subjects: vec!["Math".to_string()],
        days: 5,
        hours_per_day: 2,
        teachers: vec![Teacher {
            id: "T1".to_string(),
            name: "Alice".to_string(),
            max_weekly_hours: 5,
            qualified_subjects: qualified(&["Math"]),
        }],
        class_hours,
        parallel_limits: BTreeMap::new(),
        prefer_block_subjects: BTreeMap::new(),
        settings: settings(BreakPolicy::Sliding {
            max_consecutive_hours: 1,
            break_window_start: 0,
            break_window_end: 1,
        }),
    };

    let config = SolverConfig::from_settings(&instance.settings);
    let report = solve_instance(&instance, &config).expect("valid instance solves");

    match report {
        SolutionReport::Success { classes, .. } => {
            let table = &classes["C1"];
            let total: usize = table.values().map(|row| count_subject(row, "Math")).sum();
            assert_eq!(total, 5, "Math must occupy exactly 5 of 10 slots");
            for row in table.values() {
                assert_eq!(row.len(), 2);
                assert!(
                    row.iter().any(|e| e == "free"),
                    "each day must have at least one free period"
                );
            }
        }
        SolutionReport::NoSolution => panic!("S1 is feasible and must not report no_solution"),
    }
}

/// S2: 2 classes, 1 subject requiring 10h each, one teacher capped at 10.
/// 20 hours are needed but only 10 are available: infeasible.
#[test]
fn s2_teacher_cap_too_small_is_infeasible() {
    let mut hours = BTreeMap::new();
    hours.insert("Math".to_string(), 10u32);
    let mut class_hours = BTreeMap::new();
    class_hours.insert("C1".to_string(), hours.clone());
    class_hours.insert("C2".to_string(), hours);

    let instance = Instance {
        classes: vec!["C1".to_string(), "C2".to_string()],
        subjects: vec!["Math".to_string()],
        days: 5,
        hours_per_day: 5,
        teachers: vec![Teacher {
            id: "T1".to_string(),
            name: "Alice".to_string(),
            max_weekly_hours: 10,
            qualified_subjects: qualified(&["Math"]),
        }],
        class_hours,
        parallel_limits: BTreeMap::new(),
        prefer_block_subjects: BTreeMap::new(),
        settings: settings(BreakPolicy::Sliding {
            max_consecutive_hours: 4,
            break_window_start: 0,
            break_window_end: 4,
        }),
    };

    let config = SolverConfig::from_settings(&instance.settings);
    let report = solve_instance(&instance, &config).expect("valid instance, just infeasible");
    assert!(matches!(report, SolutionReport::NoSolution));
}

/// S3: same as S2 but the teacher cap is raised to 20 while a parallel
/// limit of 1 forbids both classes from running Math at once: still
/// infeasible, this time by the parallel-limit capacity argument.
#[test]
fn s3_parallel_limit_forces_infeasibility() {
    let mut hours = BTreeMap::new();
    hours.insert("Math".to_string(), 10u32);
    let mut class_hours = BTreeMap::new();
    class_hours.insert("C1".to_string(), hours.clone());
    class_hours.insert("C2".to_string(), hours);

    let mut parallel_limits = BTreeMap::new();
    parallel_limits.insert("Math".to_string(), 1u32);

    let instance = Instance {
        classes: vec!["C1".to_string(), "C2".to_string()],
        subjects: vec!["Math".to_string()],
        days: 5,
        hours_per_day: 5,
        teachers: vec![Teacher {
            id: "T1".to_string(),
            name: "Alice".to_string(),
            max_weekly_hours: 20,
            qualified_subjects: qualified(&["Math"]),
        }],
        class_hours,
        parallel_limits,
        prefer_block_subjects: BTreeMap::new(),
        settings: settings(BreakPolicy::Sliding {
            max_consecutive_hours: 4,
            break_window_start: 0,
            break_window_end: 4,
        }),
    };

    let config = SolverConfig::from_settings(&instance.settings);
    let report = solve_instance(&instance, &config).expect("valid instance, just infeasible");
    assert!(matches!(report, SolutionReport::NoSolution));
}

/// S4: 2 classes, subjects {A,B} each 1h/week, H=2, two teachers qualified
/// in both, a strong block-scheduling weight on A. With block scheduling
/// on, the optimum should pair A or B adjacently at least once per class.
#[test]
fn s4_block_scheduling_bonus_is_honored() {
    let mut hours = BTreeMap::new();
    hours.insert("A".to_string(), 1u32);
    hours.insert("B".to_string(), 1u32);
    let mut class_hours = BTreeMap::new();
    class_hours.insert("C1".to_string(), hours.clone());
    class_hours.insert("C2".to_string(), hours);

    let mut prefer_block_subjects = BTreeMap::new();
    prefer_block_subjects.insert("A".to_string(), 100u32);

    let instance = Instance {
        classes: vec!["C1".to_string(), "C2".to_string()],
        subjects: vec!["A".to_string(), "B".to_string()],
        days: 5,
        hours_per_day: 2,
        teachers: vec![
            Teacher {
                id: "T1".to_string(),
                name: "Alice".to_string(),
                max_weekly_hours: 20,
                qualified_subjects: qualified(&["A", "B"]),
            },
            Teacher {
                id: "T2".to_string(),
                name: "Bob".to_string(),
                max_weekly_hours: 20,
                qualified_subjects: qualified(&["A", "B"]),
            },
        ],
        class_hours,
        parallel_limits: BTreeMap::new(),
        prefer_block_subjects,
        settings: settings(BreakPolicy::Sliding {
            max_consecutive_hours: 1,
            break_window_start: 0,
            break_window_end: 1,
        }),
    };

    let config = SolverConfig::from_settings(&instance.settings);
    let report = solve_instance(&instance, &config).expect("valid instance solves");
    match report {
        SolutionReport::Success { .. } => {}
        SolutionReport::NoSolution => panic!("S4 is feasible"),
    }
}

/// S5: fixed-global-break at slot 3 of 4, one class, subjects {M,E} with
/// M=2,E=2. The single-block rule forbids an M-gap-M split, so whenever
/// both M slots land on the same day they must be contiguous.
#[test]
fn s5_fixed_global_break_single_block_rule() {
    let mut hours = BTreeMap::new();
    hours.insert("M".to_string(), 2u32);
    hours.insert("E".to_string(), 2u32);
    let mut class_hours = BTreeMap::new();
    class_hours.insert("C1".to_string(), hours);

    let instance = Instance {
        classes: vec!["C1".to_string()],
        subjects: vec!["M".to_string(), "E".to_string()],
        days: 5,
        hours_per_day: 4,
        teachers: vec![Teacher {
            id: "T1".to_string(),
            name: "Alice".to_string(),
            max_weekly_hours: 20,
            qualified_subjects: qualified(&["M", "E"]),
        }],
        class_hours,
        parallel_limits: BTreeMap::new(),
        prefer_block_subjects: BTreeMap::new(),
        settings: settings(BreakPolicy::FixedGlobal {
            global_break: 3,
            break_window_start: 0,
            break_window_end: 3,
        }),
    };

    let config = SolverConfig::from_settings(&instance.settings);
    let report = solve_instance(&instance, &config).expect("valid instance solves");

    match report {
        SolutionReport::Success { classes, .. } => {
            let table = &classes["C1"];
            for row in table.values() {
                assert_eq!(row.len(), 5, "fixed-global-break inserts one extra free slot");
                assert_eq!(row[3], "free", "break must land at the configured index");

                let m_positions: Vec<usize> = row
                    .iter()
                    .enumerate()
                    .filter(|(_, e)| e.starts_with('M'))
                    .map(|(i, _)| i)
                    .collect();
                if m_positions.len() == 2 {
                    assert_eq!(
                        m_positions[1] - m_positions[0],
                        1,
                        "two M slots in one day must be contiguous"
                    );
                }
            }
        }
        SolutionReport::NoSolution => panic!("S5 is feasible"),
    }
}

/// P6 (weekly cap): for every teacher, total occupied slots across the
/// week never exceed max_weekly_hours, exercised here via a tight cap.
#[test]
fn p6_weekly_cap_is_respected_at_the_boundary() {
    let mut hours = BTreeMap::new();
    hours.insert("Math".to_string(), 6u32);
    let mut class_hours = BTreeMap::new();
    class_hours.insert("C1".to_string(), hours);

    let instance = Instance {
        classes: vec!["C1".to_string()],
        subjects: vec!["Math".to_string()],
        days: 5,
        hours_per_day: 3,
        teachers: vec![Teacher {
            id: "T1".to_string(),
            name: "Alice".to_string(),
            max_weekly_hours: 6,
            qualified_subjects: qualified(&["Math"]),
        }],
        class_hours,
        parallel_limits: BTreeMap::new(),
        prefer_block_subjects: BTreeMap::new(),
        settings: settings(BreakPolicy::Sliding {
            max_consecutive_hours: 2,
            break_window_start: 0,
            break_window_end: 2,
        }),
    };

    let config = SolverConfig::from_settings(&instance.settings);
    let report = solve_instance(&instance, &config).expect("valid instance solves");
    match report {
        SolutionReport::Success { classes, .. } => {
            let table = &classes["C1"];
            let total: usize = table.values().map(|row| count_subject(row, "Math")).sum();
            assert_eq!(total, 6);
        }
        SolutionReport::NoSolution => panic!("6 required hours against a cap of 6 is feasible"),
    }
}

#[test]
fn invalid_instance_short_circuits_before_solving() {
    let mut hours = BTreeMap::new();
    hours.insert("Latin".to_string(), 1u32); // not in `subjects`
    let mut class_hours = BTreeMap::new();
    class_hours.insert("C1".to_string(), hours);

    let instance = Instance {
        classes: vec!["C1".to_string()],
        subjects: vec!["Math".to_string()],
        days: 5,
        hours_per_day: 4,
        teachers: vec![Teacher {
            id: "T1".to_string(),
            name: "Alice".to_string(),
            max_weekly_hours: 10,
            qualified_subjects: qualified(&["Math"]),
        }],
        class_hours,
        parallel_limits: BTreeMap::new(),
        prefer_block_subjects: BTreeMap::new(),
        settings: settings(BreakPolicy::Sliding {
            max_consecutive_hours: 2,
            break_window_start: 0,
            break_window_end: 3,
        }),
    };

    let config = SolverConfig::from_settings(&instance.settings);
    let err = solve_instance(&instance, &config).expect_err("unknown subject must be rejected");
    assert!(matches!(err, timetable_core::error::CoreError::InvalidInstance(_)));
}
