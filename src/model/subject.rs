//! Constant-teacher-per-subject, subject-allowed-in-class, exact weekly
//! count, and daily per-subject cap (I3, I4, I9, I10).

use cp_sat::builder::{BoolVar, CpModelBuilder, LinearExpr};

use crate::model::reify::{ReifyCache, Site};
use crate::model::vars::Grid;
use crate::types::Instance;

fn sum_bools<I: IntoIterator<Item = BoolVar>>(vars: I) -> LinearExpr {
    vars.into_iter().map(|v| (1i64, v)).collect()
}

pub fn install(
    model: &mut CpModelBuilder,
    grid: &Grid,
    instance: &Instance,
    reify: &mut ReifyCache,
) {
    for (c, class) in instance.classes.iter().enumerate() {
        let required = instance.class_hours.get(class);

        for (s, subject) in instance.subjects.iter().enumerate() {
            let required_hours = required.and_then(|m| m.get(subject)).copied();

            // Collects is_subj[c,d,h,s] across the week for the exact-count
            // and daily-cap constraints below.
            let mut week_bools = Vec::with_capacity((grid.days * grid.hours_per_day) as usize);

            if let Some(n) = required_hours {
                // const_teacher[c,s]: the one teacher who covers this
                // subject in this class for the whole week.
                let const_teacher = model.new_int_var(vec![(0, grid.num_teachers as i64 - 1)]);

                for d in grid.day_range() {
                    let mut day_bools = Vec::with_capacity(grid.hours_per_day as usize);
                    for h in grid.hour_range() {
                        let is_subj = reify.eq_bool(
                            model,
                            Site::Subject,
                            c,
                            d,
                            h,
                            &grid.subject[c][d as usize][h as usize],
                            s as i64,
                        );
                        // I4: is_subj ⇒ teacher[c,d,h] = const_teacher[c,s].
                        model
                            .add_eq(
                                grid.teacher[c][d as usize][h as usize].clone(),
                                const_teacher.clone(),
                            )
                            .only_enforce_if(is_subj.clone());
                        day_bools.push(is_subj.clone());
                        week_bools.push(is_subj);
                    }
                    // I9: daily per-subject cap.
                    model.add_le(
                        sum_bools(day_bools),
                        LinearExpr::from(instance.settings.max_hours_per_day_per_subject as i64),
                    );
                }
                // I3: exact weekly subject count.
                model.add_eq(sum_bools(week_bools), LinearExpr::from(n as i64));
            } else {
                // I10: subject not required by this class may never be scheduled.
                for d in grid.day_range() {
                    for h in grid.hour_range() {
                        let is_subj = reify.eq_bool(
                            model,
                            Site::Subject,
                            c,
                            d,
                            h,
                            &grid.subject[c][d as usize][h as usize],
                            s as i64,
                        );
                        let occ = &grid.occupied[c][d as usize][h as usize];
                        model.add_bool_or([!occ.clone(), !is_subj.clone()]);
                    }
                }
            }
        }
    }
}
