// crates/loadgate-core/src/core/mod.rs
// ============================================================================
// Module: Loadgate Core Data Model
// Description: Issue records, capability flags, and derived gate state.
// Purpose: Define the value types shared by runtime and interface layers.
// Dependencies: crate::core::{capabilities, issue, state}
// ============================================================================

//! ## Overview
//! The data model is small and owned: issue records validated at the
//! construction boundary, the two capability flags, and the gate state
//! derived from them once per presentation.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod capabilities;
pub mod issue;
pub mod state;
