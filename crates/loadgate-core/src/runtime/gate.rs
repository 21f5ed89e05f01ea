// crates/loadgate-core/src/runtime/gate.rs
// ============================================================================
// Module: Loadgate Gate Evaluation
// Description: Pure batch evaluation and presenter orchestration.
// Purpose: Turn issues plus capabilities into a validated operator decision.
// Dependencies: crate::core, crate::interfaces, thiserror
// ============================================================================

//! ## Overview
//! Gate evaluation is pure and deterministic: no side effects, no I/O, no
//! randomness. An empty batch is a valid input and yields an empty combined
//! message with both actions governed solely by the capability flags.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::capabilities::DecisionCapabilities;
use crate::core::issue::IssueBatch;
use crate::core::state::DecisionError;
use crate::core::state::DecisionGateState;
use crate::core::state::GatePrompt;
use crate::core::state::LoadDecision;
use crate::interfaces::DecisionPresenter;
use crate::interfaces::PresentError;

// ============================================================================
// SECTION: Gate Errors
// ============================================================================

/// Errors surfaced while driving a presenter through one prompt.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum GateError {
    /// The presenter returned a decision the gate state does not permit.
    #[error(transparent)]
    Decision(#[from] DecisionError),
    /// The presenter failed to present the prompt.
    #[error(transparent)]
    Present(#[from] PresentError),
}

// ============================================================================
// SECTION: Gate Evaluation
// ============================================================================

/// Evaluates an issue batch against the capability flags.
///
/// Deterministic and total: calling twice with identical inputs yields
/// identical prompts, and every combination of the two flags is defined.
#[must_use]
pub fn evaluate_batch(batch: &IssueBatch, capabilities: DecisionCapabilities) -> GatePrompt {
    GatePrompt {
        message: batch.combined_message(),
        state: DecisionGateState::from_capabilities(capabilities),
    }
}

/// Evaluates a batch, presents the prompt, and validates the decision.
///
/// # Errors
///
/// Returns [`GateError`] when the presenter fails or returns a decision
/// the derived gate state does not permit.
pub fn run_gate(
    batch: &IssueBatch,
    capabilities: DecisionCapabilities,
    presenter: &mut dyn DecisionPresenter,
) -> Result<LoadDecision, GateError> {
    let prompt = evaluate_batch(batch, capabilities);
    let decision = presenter.decide(&prompt)?;
    Ok(prompt.state.validate(decision)?)
}
