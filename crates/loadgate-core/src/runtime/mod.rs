// crates/loadgate-core/src/runtime/mod.rs
// ============================================================================
// Module: Loadgate Runtime
// Description: Gate evaluation and presenter orchestration.
// Purpose: Host the pure evaluation entry points for the decision gate.
// Dependencies: crate::runtime::gate
// ============================================================================

//! ## Overview
//! The runtime layer holds the evaluation entry points: the pure batch
//! evaluation and the helper that drives a presenter through one prompt.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod gate;
