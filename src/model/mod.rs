//! Model Builder (§4.2): allocates decision variables, installs every hard
//! constraint in a fixed order, and accumulates the soft objective.

mod breaks;
mod objective;
mod parallel;
mod reify;
mod subject;
mod teacher;
mod vars;

use cp_sat::builder::CpModelBuilder;

use crate::types::Instance;
pub use reify::{ReifyCache, Site};
pub use vars::Grid;

pub struct BuiltModel {
    pub model: CpModelBuilder,
    pub grid: Grid,
}

/// Builds the full CP-SAT model for `instance`. Assumes `instance` has
/// already passed [`crate::validator::validate`].
///
/// Returns `Err` only if `instance` violates an invariant the validator was
/// supposed to have already ruled out (e.g. a `class_hours` subject name
/// with no entry in `instance.subjects`) — genuinely unexpected at this
/// point in the pipeline, not a normal rejection path.
pub fn build(instance: &Instance) -> anyhow::Result<BuiltModel> {
    let mut model = CpModelBuilder::default();
    let grid = vars::allocate(&mut model, instance);
    let mut reify = ReifyCache::new();

    subject::install(&mut model, &grid, instance, &mut reify);
    teacher::install(&mut model, &grid, instance, &mut reify);
    parallel::install(&mut model, &grid, instance, &mut reify);
    breaks::install(&mut model, &grid, instance, &mut reify)?;
    let objective = objective::install(&mut model, &grid, instance, &mut reify)?;
    model.maximize(objective);

    log::debug!(
        "model built: {} classes x {} days x {} hours/day, {} subjects, {} teachers",
        grid.num_classes,
        grid.days,
        grid.hours_per_day,
        grid.num_subjects,
        grid.num_teachers,
    );

    Ok(BuiltModel { model, grid })
}
