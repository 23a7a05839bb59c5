//! Solver Driver (§4.3): configures and invokes the CP-SAT solver, and
//! interprets its terminal status.

use cp_sat::proto::{CpSolverStatus, SatParameters};

use crate::error::CoreError;
use crate::model::BuiltModel;

/// Tunables handed to the solver, distinct from instance data (§5, §9
/// "Worker count").
#[derive(Debug, Clone)]
pub struct SolverConfig {
    pub max_solve_seconds: u32,
    /// Number of parallel search workers. The source hard-codes 3; this
    /// implementation exposes it as a tunable. Determinism across runs
    /// requires setting this to 1.
    pub num_search_workers: i32,
}

impl SolverConfig {
    pub fn from_settings(settings: &crate::types::Settings) -> Self {
        SolverConfig {
            max_solve_seconds: settings.max_solve_seconds,
            num_search_workers: 3,
        }
    }
}

pub enum SolveStatus {
    Optimal,
    Feasible,
    NoSolution,
}

pub struct SolveOutcome {
    pub status: SolveStatus,
    pub response: cp_sat::proto::CpSolverResponse,
}

pub fn solve(built: &mut BuiltModel, config: &SolverConfig) -> Result<SolveOutcome, CoreError> {
    let mut params = SatParameters::default();
    params.max_time_in_seconds = Some(config.max_solve_seconds as f64);
    params.num_search_workers = Some(config.num_search_workers);

    log::info!(
        "solving: max_time_in_seconds={} num_search_workers={}",
        config.max_solve_seconds,
        config.num_search_workers,
    );

    let response = built.model.solve_with_parameters(&params);

    let status = match response.status() {
        CpSolverStatus::Optimal => {
            log::info!("solve finished: optimal");
            SolveStatus::Optimal
        }
        CpSolverStatus::Feasible => {
            log::info!("solve finished: feasible (time budget exhausted)");
            SolveStatus::Feasible
        }
        CpSolverStatus::Infeasible | CpSolverStatus::Unknown => {
            log::warn!("solve finished: no solution ({:?})", response.status());
            SolveStatus::NoSolution
        }
        other => {
            return Err(CoreError::SolverError(format!(
                "unexpected solver status: {other:?}"
            )));
        }
    };

    Ok(SolveOutcome { status, response })
}
