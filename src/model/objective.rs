//! Soft constraints, accumulated as weighted boolean terms and summed into
//! a single objective (§4.2 "Soft constraints").

use cp_sat::builder::{BoolVar, CpModelBuilder, LinearExpr};

use crate::model::reify::{reify_and, reify_or, ReifyCache, Site};
use crate::model::vars::Grid;
use crate::types::Instance;

pub fn install(
    model: &mut CpModelBuilder,
    grid: &Grid,
    instance: &Instance,
    reify: &mut ReifyCache,
) -> anyhow::Result<LinearExpr> {
    let mut terms: Vec<(i64, BoolVar)> = Vec::new();
    let settings = &instance.settings;

    // Time-of-day preference.
    for c in 0..grid.num_classes {
        for d in grid.day_range() {
            for h in grid.hour_range() {
                let weight = if settings.prefer_early_hours {
                    grid.hours_per_day - h
                } else {
                    h
                };
                let coeff = weight as i64 * settings.weight_time_of_day as i64;
                if coeff != 0 {
                    terms.push((coeff, grid.occupied[c][d as usize][h as usize].clone()));
                }
            }
        }
    }

    // Block-scheduling bonus.
    if settings.allow_block_scheduling {
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
                let weight = instance
                    .prefer_block_subjects
                    .get(subject)
                    .copied()
                    .unwrap_or(settings.weight_block) as i64;
                if weight == 0 {
                    continue;
                }
                for d in grid.day_range() {
                    for h in 0..grid.hours_per_day.saturating_sub(1) {
                        let is_subj_h = reify.eq_bool(
                            model,
                            Site::Subject,
                            c,
                            d,
                            h,
                            &grid.subject[c][d as usize][h as usize],
                            s as i64,
                        );
                        let is_subj_h1 = reify.eq_bool(
                            model,
                            Site::Subject,
                            c,
                            d,
                            h + 1,
                            &grid.subject[c][d as usize][(h + 1) as usize],
                            s as i64,
                        );
                        let both = reify_and(model, &is_subj_h, &is_subj_h1);
                        terms.push((weight, both));
                    }
                }
            }
        }
    }

    // Inner-gap penalty: fixed-global-break policy only.
    if matches!(
        settings.break_policy,
        crate::types::BreakPolicy::FixedGlobal { .. }
    ) {
        for c in 0..grid.num_classes {
            for d in grid.day_range() {
                for h in 0..grid.hours_per_day {
                    let later: Vec<BoolVar> = ((h + 1)..grid.hours_per_day)
                        .map(|h2| grid.occupied[c][d as usize][h2 as usize].clone())
                        .collect();
                    if later.is_empty() {
                        continue;
                    }
                    let is_free_now = !grid.occupied[c][d as usize][h as usize].clone();
                    let still_something_later = reify_or(model, &later);
                    let gap = reify_and(model, &is_free_now, &still_something_later);
                    terms.push((-2, gap));
                }
            }
        }
    }

    Ok(terms.into_iter().collect())
}
