// crates/loadgate-core/src/interfaces/mod.rs
// ============================================================================
// Module: Loadgate Interfaces
// Description: Presentation-agnostic seam between the gate and its renderer.
// Purpose: Define the contract surface the presentation layer implements.
// Dependencies: crate::core, thiserror
// ============================================================================

//! ## Overview
//! The presenter trait is the boundary to the out-of-scope presentation
//! layer (terminal prompt, web form, GUI dialog). Implementations render
//! what they are given and report the operator's choice; they do not decide
//! which actions are legal. The gate validates every returned decision, so
//! a misbehaving presenter cannot smuggle a disabled action through.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::issue::IssueReport;
use crate::core::state::GatePrompt;
use crate::core::state::LoadDecision;

// ============================================================================
// SECTION: Decision Presenter
// ============================================================================

/// Presentation-layer errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum PresentError {
    /// The presenter reported an error.
    #[error("presenter error: {0}")]
    Presenter(String),
}

/// Presentation-agnostic renderer for load-issue prompts.
pub trait DecisionPresenter {
    /// Presents the multi-issue prompt and returns the operator's choice.
    ///
    /// The returned decision is validated by the gate; returning a disabled
    /// action is a caller error, not a presenter prerogative.
    ///
    /// # Errors
    ///
    /// Returns [`PresentError`] when the prompt cannot be presented.
    fn decide(&mut self, prompt: &GatePrompt) -> Result<LoadDecision, PresentError>;

    /// Presents a single problematic resource, path and message separately.
    ///
    /// # Errors
    ///
    /// Returns [`PresentError`] when the report cannot be presented.
    fn acknowledge(&mut self, issue: &IssueReport) -> Result<(), PresentError>;
}
