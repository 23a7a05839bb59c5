//! Solution Extractor (§4.4): reads assignments out of the solved model and
//! renders the per-class and per-teacher timetable tables.
//!
//! Under the fixed-global-break policy the source inserts a literal
//! `"free"` entry at `global_break` after building the `H`-length day, so
//! every day's array grows to length `H+1` and every post-break index is
//! shifted by one. This implementation keeps that behavior for parity with
//! the documented external interface (§6, §9).

use std::collections::BTreeMap;

use cp_sat::proto::CpSolverResponse;

use crate::model::Grid;
use crate::types::{BreakPolicy, DayTable, Instance, DAY_NAMES};

pub fn extract(
    grid: &Grid,
    instance: &Instance,
    response: &CpSolverResponse,
) -> anyhow::Result<(BTreeMap<String, DayTable>, BTreeMap<String, DayTable>)> {
    let global_break = match &instance.settings.break_policy {
        BreakPolicy::FixedGlobal { global_break, .. } => Some(*global_break),
        BreakPolicy::Sliding { .. } => None,
    };

    let mut classes: BTreeMap<String, DayTable> = BTreeMap::new();
    for (c, class_name) in instance.classes.iter().enumerate() {
        let mut table: DayTable = BTreeMap::new();
        for (d, day_name) in DAY_NAMES.iter().enumerate() {
            let mut row = Vec::with_capacity(grid.hours_per_day as usize);
            for h in 0..grid.hours_per_day as usize {
                let s = grid.subject[c][d][h].solution_value(response);
                if s < 0 {
                    row.push("free".to_string());
                } else {
                    let t = grid.teacher[c][d][h].solution_value(response);
                    let subject = instance.subjects.get(s as usize).ok_or_else(|| {
                        anyhow::anyhow!("solver returned out-of-range subject index {s}")
                    })?;
                    let teacher = instance.teachers.get(t as usize).ok_or_else(|| {
                        anyhow::anyhow!("solver returned out-of-range teacher index {t}")
                    })?;
                    row.push(format!("{} ({})", subject, teacher.name));
                }
            }
            if let Some(g) = global_break {
                row.insert(g as usize, "free".to_string());
            }
            table.insert(*day_name, row);
        }
        classes.insert(class_name.clone(), table);
    }

    let mut teachers: BTreeMap<String, DayTable> = BTreeMap::new();
    for (t, teacher) in instance.teachers.iter().enumerate() {
        let mut table: DayTable = BTreeMap::new();
        for (d, day_name) in DAY_NAMES.iter().enumerate() {
            let mut row = Vec::with_capacity(grid.hours_per_day as usize);
            for h in 0..grid.hours_per_day as usize {
                let mut entry = "free".to_string();
                for (c, class_name) in instance.classes.iter().enumerate() {
                    let assigned_teacher = grid.teacher[c][d][h].solution_value(response);
                    if assigned_teacher == t as i64 {
                        let s = grid.subject[c][d][h].solution_value(response);
                        let subject = instance.subjects.get(s as usize).ok_or_else(|| {
                            anyhow::anyhow!("solver returned out-of-range subject index {s}")
                        })?;
                        entry = format!("{} ({})", subject, class_name);
                        break;
                    }
                }
                row.push(entry);
            }
            if let Some(g) = global_break {
                row.insert(g as usize, "free".to_string());
            }
            table.insert(*day_name, row);
        }
        teachers.insert(teacher.name.clone(), table);
    }

    log::debug!(
        "extracted {} class table(s), {} teacher table(s), row length {}",
        classes.len(),
        teachers.len(),
        grid.hours_per_day as usize + global_break.map_or(0, |_| 1),
    );

    Ok((classes, teachers))
}
