use crate::engine::{AlgorithmId, CancelToken, RunOutcome, RunRequest, RunResult};
use crate::graph::NodeId;
use crate::trace::{path_to, StepRecorder};

/// Check the stop signal once per loop iteration.
///
/// Returns true when the run should stop and logs where it stopped.
pub fn should_stop(cancel: &CancelToken, recorder: &StepRecorder) -> bool {
    if cancel.is_cancelled() {
        tracing::debug!(steps = recorder.len(), "cancelled");
        true
    } else {
        false
    }
}

pub fn outcome_of(cancelled: bool) -> RunOutcome {
    if cancelled {
        RunOutcome::Cancelled
    } else {
        RunOutcome::Complete
    }
}

/// Path from the request's start to its goal, `None` when no goal was asked for
pub fn goal_path(parents: &[Option<NodeId>], request: &RunRequest) -> Option<Vec<NodeId>> {
    request
        .goal
        .map(|goal| path_to(parents, request.start, goal))
}

/// Wrap a finished recorder into a result and log the run summary
pub fn finish(algorithm: AlgorithmId, recorder: StepRecorder, cancelled: bool) -> RunResult {
    let outcome = outcome_of(cancelled);
    tracing::debug!(
        algorithm = %algorithm,
        steps = recorder.len(),
        outcome = ?outcome,
        "run_finished"
    );
    RunResult::new(algorithm, outcome, recorder.into_steps())
}
