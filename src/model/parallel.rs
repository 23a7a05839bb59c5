//! Parallel-subject limit (I8): at most `parallel_limits[s]` classes may run
//! subject `s` simultaneously in any `(d,h)`.

use cp_sat::builder::{BoolVar, LinearExpr, CpModelBuilder};

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

    for (subject, &limit) in &instance.parallel_limits {
        let Some(&s) = subject_index.get(subject.as_str()) else {
            continue;
        };
        for d in grid.day_range() {
            for h in grid.hour_range() {
                let here: Vec<BoolVar> = (0..grid.num_classes)
                    .map(|c| {
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
                model.add_le(sum_bools(here), LinearExpr::from(limit as i64));
            }
        }
    }
}
