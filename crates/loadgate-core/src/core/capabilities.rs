// crates/loadgate-core/src/core/capabilities.rs
// ============================================================================
// Module: Loadgate Decision Capabilities
// Description: Capability flags constraining the operator's terminal actions.
// Purpose: Declare which of Continue and Cancel the caller permits.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Capability flags are supplied by the orchestrator alongside an issue
//! batch. The two flags are independent: the gate never derives one from
//! the other. Both default to `true`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Decision Capabilities
// ============================================================================

/// Capability flags for the two terminal actions.
///
/// # Invariants
/// - `can_continue` and `can_cancel` are independent; neither is ever
///   forced false based on the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionCapabilities {
    /// Whether the operator may continue the load.
    pub can_continue: bool,
    /// Whether the operator may cancel the load.
    pub can_cancel: bool,
}

impl DecisionCapabilities {
    /// Creates capability flags with explicit values.
    #[must_use]
    pub const fn new(can_continue: bool, can_cancel: bool) -> Self {
        Self {
            can_continue,
            can_cancel,
        }
    }
}

impl Default for DecisionCapabilities {
    fn default() -> Self {
        Self::new(true, true)
    }
}
