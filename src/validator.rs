//! Instance Validator (§4.1): purely local checks, no solver calls.
//!
//! Every violation found is collected into one list rather than
//! short-circuiting on the first, so a caller can surface the complete set
//! to an operator in one pass.

use crate::types::{BreakPolicy, Instance};
use crate::error::Violation;

pub fn validate(instance: &Instance) -> Result<(), Vec<Violation>> {
    let mut violations = Vec::new();

    if instance.days != 5 {
        violations.push(Violation::new(
            "instance.days",
            format!("expected 5 days, got {}", instance.days),
        ));
    }
    if instance.hours_per_day == 0 {
        violations.push(Violation::new(
            "instance.hours_per_day",
            "hours_per_day must be at least 1",
        ));
    }
    if instance.classes.is_empty() {
        violations.push(Violation::new("instance.classes", "no classes defined"));
    }
    if instance.subjects.is_empty() {
        violations.push(Violation::new("instance.subjects", "no subjects defined"));
    }
    if instance.teachers.is_empty() {
        violations.push(Violation::new("instance.teachers", "no teachers defined"));
    }
    if instance.settings.max_hours_per_day_per_subject == 0 {
        violations.push(Violation::new(
            "settings.max_hours_per_day_per_subject",
            "must be at least 1",
        ));
    }

    let known_subjects: std::collections::HashSet<&str> =
        instance.subjects.iter().map(String::as_str).collect();
    let known_classes: std::collections::HashSet<&str> =
        instance.classes.iter().map(String::as_str).collect();

    for teacher in &instance.teachers {
        for subject in &teacher.qualified_subjects {
            if !known_subjects.contains(subject.as_str()) {
                violations.push(Violation::new(
                    format!("teacher[{}].qualified_subjects", teacher.id),
                    format!("unknown subject '{subject}'"),
                ));
            }
        }
        if teacher.max_weekly_hours == 0 && !teacher.qualified_subjects.is_empty() {
            log::warn!(
                "teacher '{}' is qualified but has max_weekly_hours == 0",
                teacher.id
            );
        }
    }

    for (class, hours) in &instance.class_hours {
        if !known_classes.contains(class.as_str()) {
            violations.push(Violation::new(
                "instance.class_hours",
                format!("unknown class '{class}'"),
            ));
        }
        let mut total = 0u32;
        for (subject, count) in hours {
            if !known_subjects.contains(subject.as_str()) {
                violations.push(Violation::new(
                    format!("class_hours[{class}]"),
                    format!("unknown subject '{subject}'"),
                ));
            }
            total = total.saturating_add(*count);
        }
        let capacity = 5 * instance.hours_per_day;
        if total > capacity {
            violations.push(Violation::new(
                format!("class_hours[{class}]"),
                format!("total required hours {total} exceeds week capacity {capacity}"),
            ));
        }
    }

    for subject in instance.parallel_limits.keys() {
        if !known_subjects.contains(subject.as_str()) {
            violations.push(Violation::new(
                "instance.parallel_limits",
                format!("unknown subject '{subject}'"),
            ));
        }
    }
    for subject in instance.prefer_block_subjects.keys() {
        if !known_subjects.contains(subject.as_str()) {
            violations.push(Violation::new(
                "instance.prefer_block_subjects",
                format!("unknown subject '{subject}'"),
            ));
        }
    }

    if instance.hours_per_day > 0 {
        let (start, end) = instance.settings.break_policy.window();
        if start > end || end >= instance.hours_per_day {
            violations.push(Violation::new(
                "settings.break_policy",
                format!(
                    "break window [{start},{end}] must lie within [0,{})",
                    instance.hours_per_day
                ),
            ));
        }
        if let BreakPolicy::Sliding {
            max_consecutive_hours,
            ..
        } = &instance.settings.break_policy
        {
            if *max_consecutive_hours >= instance.hours_per_day {
                violations.push(Violation::new(
                    "settings.break_policy.max_consecutive_hours",
                    format!(
                        "must be in [0,{}) of the unshifted grid",
                        instance.hours_per_day
                    ),
                ));
            }
        }
        if let BreakPolicy::FixedGlobal { global_break, .. } = &instance.settings.break_policy {
            if *global_break == 0 || *global_break >= instance.hours_per_day {
                violations.push(Violation::new(
                    "settings.break_policy.global_break",
                    format!(
                        "must lie in (0,{}) of the unshifted grid",
                        instance.hours_per_day
                    ),
                ));
            }
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        log::warn!(
            "instance rejected by validator with {} violation(s)",
            violations.len()
        );
        Err(violations)
    }
}
