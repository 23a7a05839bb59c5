//! Teacher qualification, per-slot uniqueness, and weekly cap (I5, I6, I7).

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
    let subject_index: std::collections::HashMap<&str, usize> = instance
        .subjects
        .iter()
        .enumerate()
        .map(|(i, s)| (s.as_str(), i))
        .collect();

    // "t assigned to c at (d,h)" booleans, reused below for I6 and I7.
    let mut assigned: Vec<Vec<Vec<Vec<BoolVar>>>> =
        vec![
            vec![vec![Vec::with_capacity(grid.num_teachers); grid.hours_per_day as usize]; grid.days as usize];
            grid.num_classes
        ];

    for c in 0..grid.num_classes {
        for d in grid.day_range() {
            for h in grid.hour_range() {
                for (t, teacher) in instance.teachers.iter().enumerate() {
                    let b = reify.eq_bool(
                        model,
                        Site::Teacher,
                        c,
                        d,
                        h,
                        &grid.teacher[c][d as usize][h as usize],
                        t as i64,
                    );

                    // I5: if assigned, the scheduled subject must be one of
                    // this teacher's qualifications.
                    let ok_terms: Vec<BoolVar> = teacher
                        .qualified_subjects
                        .iter()
                        .filter_map(|name| subject_index.get(name.as_str()))
                        .map(|&k| {
                            reify.eq_bool(
                                model,
                                Site::Subject,
                                c,
                                d,
                                h,
                                &grid.subject[c][d as usize][h as usize],
                                k as i64,
                            )
                        })
                        .collect();
                    model
                        .add_eq(sum_bools(ok_terms), LinearExpr::from(1))
                        .only_enforce_if(b.clone());

                    assigned[c][d as usize][h as usize].push(b);
                }
            }
        }
    }

    // I6: no teacher is assigned to two classes in the same (d,h).
    for d in grid.day_range() {
        for h in grid.hour_range() {
            for t in 0..grid.num_teachers {
                let slot_bools: Vec<BoolVar> = (0..grid.num_classes)
                    .map(|c| assigned[c][d as usize][h as usize][t].clone())
                    .collect();
                model.add_le(sum_bools(slot_bools), LinearExpr::from(1));
            }
        }
    }

    // I7: per-teacher weekly cap.
    for (t, teacher) in instance.teachers.iter().enumerate() {
        let mut week_bools = Vec::with_capacity(grid.num_classes * (grid.days * grid.hours_per_day) as usize);
        for c in 0..grid.num_classes {
            for d in grid.day_range() {
                for h in grid.hour_range() {
                    week_bools.push(assigned[c][d as usize][h as usize][t].clone());
                }
            }
        }
        model.add_le(
            sum_bools(week_bools),
            LinearExpr::from(teacher.max_weekly_hours as i64),
        );
    }
}
