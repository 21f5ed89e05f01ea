// crates/loadgate-core/src/lib.rs
// ============================================================================
// Module: Loadgate Core Crate Root
// Description: Issue aggregation and decision gating for project loading.
// Purpose: Wire core, interface, and runtime modules into the public API.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Loadgate collects the problems surfaced while opening a project and turns
//! them into a bounded operator decision. The core is pure value computation:
//! an ordered [`IssueBatch`] plus two independent capability flags yield a
//! [`DecisionGateState`] that constrains which terminal actions a
//! presentation layer may offer. Rendering, file parsing, and project
//! deserialization all belong to the caller.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use crate::core::capabilities::DecisionCapabilities;
pub use crate::core::issue::IssueBatch;
pub use crate::core::issue::IssueError;
pub use crate::core::issue::IssueReport;
pub use crate::core::state::DecisionError;
pub use crate::core::state::DecisionGateState;
pub use crate::core::state::GatePrompt;
pub use crate::core::state::LoadDecision;
pub use crate::interfaces::DecisionPresenter;
pub use crate::interfaces::PresentError;
pub use crate::runtime::gate::GateError;
pub use crate::runtime::gate::evaluate_batch;
pub use crate::runtime::gate::run_gate;
