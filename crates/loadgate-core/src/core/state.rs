// crates/loadgate-core/src/core/state.rs
// ============================================================================
// Module: Loadgate Decision Gate State
// Description: Derived gate state, terminal decisions, and the prompt bundle.
// Purpose: Constrain which terminal actions a presentation layer may offer.
// Dependencies: crate::core::capabilities, serde, thiserror
// ============================================================================

//! ## Overview
//! A [`DecisionGateState`] is derived once per presentation from the
//! caller's [`DecisionCapabilities`] and discarded when the dialog closes;
//! it carries no state across invocations. The discard notice is shown only
//! when both actions remain available: there is no point warning about data
//! loss when the operator has no real choice. The read-only recommendation
//! follows the same derivation and is read back by the caller after a
//! continue.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::capabilities::DecisionCapabilities;

// ============================================================================
// SECTION: Terminal Decisions
// ============================================================================

/// Terminal decision returned by the presentation layer.
///
/// # Invariants
/// - Variants are stable for serialization and contract matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadDecision {
    /// Resume the load despite the reported issues.
    Continue,
    /// Abort the load attempt.
    Cancel,
}

/// Decision protocol errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecisionError {
    /// `Continue` was chosen while the continue action is disabled.
    #[error("continue is not available for this load")]
    ContinueUnavailable,
    /// `Cancel` was chosen while the cancel action is disabled.
    #[error("cancel is not available for this load")]
    CancelUnavailable,
}

// ============================================================================
// SECTION: Decision Gate State
// ============================================================================

/// Presentable gate state derived from the capability flags.
///
/// # Invariants
/// - `continue_enabled` mirrors `can_continue`; `cancel_enabled` mirrors
///   `can_cancel`.
/// - `show_discard_notice` and `want_read_only` are true exactly when both
///   actions are enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionGateState {
    /// Whether the Continue action is offered.
    pub continue_enabled: bool,
    /// Whether the Cancel action is offered.
    pub cancel_enabled: bool,
    /// Whether the "data may be invalid or discarded" notice is shown.
    pub show_discard_notice: bool,
    /// Whether the caller should open the project read-only after a
    /// continue. Set only when the operator had a real choice; when cancel
    /// is unavailable the problem lies outside the project, so saving
    /// would change nothing.
    pub want_read_only: bool,
}

impl DecisionGateState {
    /// Derives the gate state from capability flags.
    ///
    /// Total over all four flag combinations; no combination errors.
    #[must_use]
    pub const fn from_capabilities(capabilities: DecisionCapabilities) -> Self {
        Self {
            continue_enabled: capabilities.can_continue,
            cancel_enabled: capabilities.can_cancel,
            show_discard_notice: capabilities.can_continue && capabilities.can_cancel,
            want_read_only: capabilities.can_continue && capabilities.can_cancel,
        }
    }

    /// Validates a terminal decision against the enabled actions.
    ///
    /// # Errors
    ///
    /// Returns [`DecisionError`] when the chosen action is disabled.
    pub const fn validate(&self, decision: LoadDecision) -> Result<LoadDecision, DecisionError> {
        match decision {
            LoadDecision::Continue if !self.continue_enabled => {
                Err(DecisionError::ContinueUnavailable)
            }
            LoadDecision::Cancel if !self.cancel_enabled => Err(DecisionError::CancelUnavailable),
            LoadDecision::Continue | LoadDecision::Cancel => Ok(decision),
        }
    }
}

// ============================================================================
// SECTION: Gate Prompt
// ============================================================================

/// Prompt bundle handed to the presentation layer for the multi-issue view.
///
/// # Invariants
/// - `message` is the batch's combined message in detection order.
/// - `state` is derived from the capabilities supplied with the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatePrompt {
    /// Multi-line summary of all reported issues.
    pub message: String,
    /// Derived enable/notice flags for the terminal actions.
    pub state: DecisionGateState,
}
