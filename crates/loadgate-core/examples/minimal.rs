// crates/loadgate-core/examples/minimal.rs
// ============================================================================
// Module: Loadgate Minimal Example
// Description: Minimal end-to-end gate run using an in-memory presenter.
// Purpose: Demonstrate batch evaluation and the decision protocol.
// Dependencies: loadgate-core
// ============================================================================

//! ## Overview
//! Runs the decision gate over a small issue batch with an in-memory
//! presenter. The presenter here stands in for whatever prompt surface the
//! host application provides.

use loadgate_core::DecisionCapabilities;
use loadgate_core::DecisionPresenter;
use loadgate_core::GatePrompt;
use loadgate_core::IssueBatch;
use loadgate_core::IssueReport;
use loadgate_core::LoadDecision;
use loadgate_core::PresentError;
use loadgate_core::run_gate;

/// Presenter that records the prompt and always chooses to cancel.
#[derive(Default)]
struct RecordingPresenter {
    /// Prompts seen by the presenter.
    prompts: Vec<GatePrompt>,
}

impl DecisionPresenter for RecordingPresenter {
    fn decide(&mut self, prompt: &GatePrompt) -> Result<LoadDecision, PresentError> {
        self.prompts.push(prompt.clone());
        Ok(LoadDecision::Cancel)
    }

    fn acknowledge(&mut self, _issue: &IssueReport) -> Result<(), PresentError> {
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut batch = IssueBatch::new();
    batch.push(IssueReport::new("data/main.bin", "file not found")?);
    batch.push(IssueReport::new("data/aux.bin", "length mismatch")?);

    let mut presenter = RecordingPresenter::default();
    let decision = run_gate(&batch, DecisionCapabilities::default(), &mut presenter)?;

    let _ = (decision, presenter.prompts);
    Ok(())
}
