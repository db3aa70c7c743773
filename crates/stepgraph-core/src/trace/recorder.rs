use super::{Step, StepKind, StepPayload};

/// Append-only log of steps for a single run.
///
/// Indices are assigned on `record`, starting at 0 and increasing by one.
#[derive(Debug, Default)]
pub struct StepRecorder {
    steps: Vec<Step>,
}

impl StepRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step and return its index
    pub fn record(&mut self, kind: StepKind, payload: StepPayload) -> usize {
        let index = self.steps.len();
        tracing::trace!(index, kind = %kind, "step");
        self.steps.push(Step {
            index,
            kind,
            payload,
        });
        index
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}
