//! A school-timetable constraint-optimization engine: given a weekly grid
//! of classes × days × periods, a teacher roster with subject
//! qualifications and weekly hour caps, per-class subject-hour
//! requirements, and a handful of scheduling preferences, produces a
//! weekly (subject, teacher) assignment for every slot that satisfies
//! every hard constraint and maximizes a weighted sum of soft preferences.
//!
//! The pipeline is a pure function of the instance: Validator → Model
//! Builder → Solver Driver → Solution Extractor.

pub mod error;
pub mod extractor;
pub mod model;
pub mod solver;
#[cfg(test)]
mod test_support;
pub mod types;
pub mod validator;

use error::CoreError;
use solver::{SolveStatus, SolverConfig};
use types::{Instance, SolutionReport};

/// Runs the full pipeline on `instance`, returning a solution report or a
/// `CoreError` if the instance is malformed or the solver itself fails.
/// `NoSolution` is not an error — an infeasible or exhausted-budget solve
/// is a normal terminal report, returned through this function's `Ok` path.
pub fn solve_instance(
    instance: &Instance,
    solver_config: &SolverConfig,
) -> Result<SolutionReport, CoreError> {
    validator::validate(instance).map_err(CoreError::InvalidInstance)?;

    log::info!(
        "building model: {} classes, {} subjects, {} teachers, {} hours/day",
        instance.classes.len(),
        instance.subjects.len(),
        instance.teachers.len(),
        instance.hours_per_day,
    );
    let mut built = model::build(instance)?;

    let outcome = solver::solve(&mut built, solver_config)?;

    match outcome.status {
        SolveStatus::NoSolution => Ok(SolutionReport::NoSolution),
        SolveStatus::Optimal | SolveStatus::Feasible => {
            let (classes, teachers) =
                extractor::extract(&built.grid, instance, &outcome.response)?;
            Ok(SolutionReport::Success { classes, teachers })
        }
    }
}
