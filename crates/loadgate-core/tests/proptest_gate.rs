// crates/loadgate-core/tests/proptest_gate.rs
// ============================================================================
// Module: Gate Property-Based Tests
// Description: Property tests for gate determinism and batch derivation.
// Purpose: Detect panics and invariant violations across wide input ranges.
// ============================================================================

//! ## Overview
//! Property-based tests for gate state derivation, combined-message
//! ordering, and construction validation.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use loadgate_core::DecisionCapabilities;
use loadgate_core::DecisionGateState;
use loadgate_core::IssueBatch;
use loadgate_core::IssueReport;
use loadgate_core::LoadDecision;
use loadgate_core::evaluate_batch;
use proptest::prelude::*;

/// Builds a batch from parallel path/message pairs, skipping none.
fn batch_from_pairs(pairs: &[(String, String)]) -> Option<IssueBatch> {
    pairs
        .iter()
        .map(|(path, message)| IssueReport::new(path.clone(), message.clone()).ok())
        .collect::<Option<Vec<IssueReport>>>()
        .map(IssueBatch::from_iter)
}

proptest! {
    #[test]
    fn gate_state_mirrors_capabilities(can_continue in any::<bool>(), can_cancel in any::<bool>()) {
        let state = DecisionGateState::from_capabilities(
            DecisionCapabilities::new(can_continue, can_cancel),
        );
        prop_assert_eq!(state.continue_enabled, can_continue);
        prop_assert_eq!(state.cancel_enabled, can_cancel);
        prop_assert_eq!(state.show_discard_notice, can_continue && can_cancel);
        prop_assert_eq!(state.want_read_only, can_continue && can_cancel);
    }

    #[test]
    fn combined_message_is_ordered_join(
        pairs in prop::collection::vec((".{1,16}", ".{1,32}"), 0 .. 8)
    ) {
        let batch = batch_from_pairs(&pairs);
        prop_assume!(batch.is_some());
        let batch = batch.unwrap_or_default();

        let expected: Vec<String> = pairs.iter().map(|(_, message)| message.clone()).collect();
        prop_assert_eq!(batch.combined_message(), expected.join("\n"));
    }

    #[test]
    fn evaluation_is_deterministic(
        pairs in prop::collection::vec(("[a-z]{1,8}", "[a-z ]{1,16}"), 0 .. 8),
        can_continue in any::<bool>(),
        can_cancel in any::<bool>(),
    ) {
        let batch = batch_from_pairs(&pairs).unwrap_or_default();
        let capabilities = DecisionCapabilities::new(can_continue, can_cancel);
        let first = evaluate_batch(&batch, capabilities);
        let second = evaluate_batch(&batch, capabilities);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn construction_fails_exactly_on_empty_fields(path in ".{0,8}", message in ".{0,8}") {
        let result = IssueReport::new(path.clone(), message.clone());
        prop_assert_eq!(result.is_ok(), !path.is_empty() && !message.is_empty());
    }

    #[test]
    fn validation_matches_enabled_flags(
        can_continue in any::<bool>(),
        can_cancel in any::<bool>(),
    ) {
        let state = DecisionGateState::from_capabilities(
            DecisionCapabilities::new(can_continue, can_cancel),
        );
        prop_assert_eq!(state.validate(LoadDecision::Continue).is_ok(), can_continue);
        prop_assert_eq!(state.validate(LoadDecision::Cancel).is_ok(), can_cancel);
    }
}
