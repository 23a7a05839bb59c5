//! Break-policy constraints (I11–I13), selected by `BreakPolicy`.
//!
//! A teacher's "busy this hour" signal is nowhere stored as its own
//! boolean: I6 already guarantees at most one class claims a teacher at any
//! `(d,h)`, so summing the per-class "assigned to me" booleans over a
//! window is equivalent to OR-ing them and cheaper to encode.

use cp_sat::builder::{BoolVar, CpModelBuilder, LinearExpr};

use crate::model::reify::{reify_and, ReifyCache, Site};
use crate::model::vars::Grid;
use crate::types::{BreakPolicy, Instance};

fn sum_bools<I: IntoIterator<Item = BoolVar>>(vars: I) -> LinearExpr {
    vars.into_iter().map(|v| (1i64, v)).collect()
}

pub fn install(
    model: &mut CpModelBuilder,
    grid: &Grid,
    instance: &Instance,
    reify: &mut ReifyCache,
) -> anyhow::Result<()> {
    match &instance.settings.break_policy {
        BreakPolicy::Sliding {
            max_consecutive_hours,
            break_window_start,
            break_window_end,
        } => {
            install_sliding(
                model,
                grid,
                instance,
                reify,
                *max_consecutive_hours,
                *break_window_start,
                *break_window_end,
            );
            Ok(())
        }
        BreakPolicy::FixedGlobal { global_break, .. } => {
            install_fixed_global(model, grid, instance, reify, *global_break)
        }
    }
}

fn install_sliding(
    model: &mut CpModelBuilder,
    grid: &Grid,
    instance: &Instance,
    reify: &mut ReifyCache,
    max_consecutive: u32,
    window_start: u32,
    window_end: u32,
) {
    let window_len = max_consecutive + 1;

    // I11a: no class may be occupied in every period of an (M+1)-window.
    for c in 0..grid.num_classes {
        for d in grid.day_range() {
            let mut h0 = 0;
            while h0 + window_len <= grid.hours_per_day {
                let window: Vec<BoolVar> = (h0..h0 + window_len)
                    .map(|h| grid.occupied[c][d as usize][h as usize].clone())
                    .collect();
                model.add_le(sum_bools(window), LinearExpr::from(max_consecutive as i64));
                h0 += 1;
            }
        }
    }

    // I11b: same rule for each teacher's weekly-busy signal.
    for d in grid.day_range() {
        let mut h0 = 0;
        while h0 + window_len <= grid.hours_per_day {
            for (t, _teacher) in instance.teachers.iter().enumerate() {
                let busy: Vec<BoolVar> = (h0..h0 + window_len)
                    .flat_map(|h| {
                        (0..grid.num_classes).map(move |c| {
                            reify.eq_bool(
                                model,
                                Site::Teacher,
                                c,
                                d,
                                h,
                                &grid.teacher[c][d as usize][h as usize],
                                t as i64,
                            )
                        })
                    })
                    .collect();
                model.add_le(sum_bools(busy), LinearExpr::from(max_consecutive as i64));
            }
            h0 += 1;
        }
    }

    // I12: at least one free period inside the break window, per class and per teacher.
    let window_size = (window_end - window_start + 1) as i64;
    for c in 0..grid.num_classes {
        for d in grid.day_range() {
            let in_window: Vec<BoolVar> = (window_start..=window_end)
                .map(|h| grid.occupied[c][d as usize][h as usize].clone())
                .collect();
            model.add_le(sum_bools(in_window), LinearExpr::from(window_size - 1));
        }
    }
    for d in grid.day_range() {
        for (t, _teacher) in instance.teachers.iter().enumerate() {
            let busy: Vec<BoolVar> = (window_start..=window_end)
                .flat_map(|h| {
                    (0..grid.num_classes).map(move |c| {
                        reify.eq_bool(
                            model,
                            Site::Teacher,
                            c,
                            d,
                            h,
                            &grid.teacher[c][d as usize][h as usize],
                            t as i64,
                        )
                    })
                })
                .collect();
            model.add_le(sum_bools(busy), LinearExpr::from(window_size - 1));
        }
    }
}

fn install_fixed_global(
    model: &mut CpModelBuilder,
    grid: &Grid,
    instance: &Instance,
    reify: &mut ReifyCache,
    global_break: u32,
) -> anyhow::Result<()> {
    if global_break == 0 {
        return Ok(());
    }
    let before = global_break - 1;
    let after = global_break;

    // I13a: the period right before and right after the inserted break
    // must not carry the same subject.
    for c in 0..grid.num_classes {
        for d in grid.day_range() {
            for s in 0..grid.num_subjects {
                let prev = reify.eq_bool(
                    model,
                    Site::Subject,
                    c,
                    d,
                    before,
                    &grid.subject[c][d as usize][before as usize],
                    s as i64,
                );
                let next = reify.eq_bool(
                    model,
                    Site::Subject,
                    c,
                    d,
                    after,
                    &grid.subject[c][d as usize][after as usize],
                    s as i64,
                );
                model.add_bool_or([!prev, !next]);
            }
        }
    }

    // I13b: at most one contiguous run per (class, subject, day).
    for (c, class) in instance.classes.iter().enumerate() {
        let Some(required) = instance.class_hours.get(class) else {
            continue;
        };
        for subject in required.keys() {
            let s = instance
                .subjects
                .iter()
                .position(|name| name == subject)
                .ok_or_else(|| {
                    anyhow::anyhow!(
                        "class_hours[{class}] names subject '{subject}' not present in instance.subjects"
                    )
                })?;
            for d in grid.day_range() {
                let is_subj: Vec<BoolVar> = grid
                    .hour_range()
                    .map(|h| {
                        reify.eq_bool(
                            model,
                            Site::Subject,
                            c,
                            d,
                            h,
                            &grid.subject[c][d as usize][h as usize],
                            s as i64,
                        )
                    })
                    .collect();
                let mut starts = Vec::with_capacity(is_subj.len());
                starts.push(is_subj[0].clone());
                for h in 1..is_subj.len() {
                    starts.push(reify_and(model, &is_subj[h], &!is_subj[h - 1].clone()));
                }
                model.add_le(sum_bools(starts), LinearExpr::from(1));
            }
        }
    }
    Ok(())
}
