// crates/loadgate-core/src/core/issue.rs
// ============================================================================
// Module: Loadgate Issue Records
// Description: Immutable per-resource issue reports and ordered batches.
// Purpose: Carry load-time problems from the orchestrator to the gate.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! An [`IssueReport`] describes one problem found for one resource while
//! opening a project. Reports are immutable and validated at the
//! construction boundary: both the resource path and the message must be
//! non-empty. An [`IssueBatch`] preserves detection order, permits
//! duplicates, and derives the multi-line combined message on demand.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Issue Errors
// ============================================================================

/// Construction errors for issue reports.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IssueError {
    /// The resource path was empty.
    #[error("issue path must not be empty")]
    EmptyPath,
    /// The human-readable message was empty.
    #[error("issue message must not be empty")]
    EmptyMessage,
}

// ============================================================================
// SECTION: Issue Report
// ============================================================================

/// One problem encountered for a single resource during a load attempt.
///
/// # Invariants
/// - `path` and `message` are non-empty; enforced at construction and on
///   deserialization.
/// - Immutable once created; the producing loader owns its lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawIssueReport")]
pub struct IssueReport {
    /// Identifier of the resource the issue concerns.
    path: String,
    /// Human-readable explanation of the problem.
    message: String,
}

/// Unvalidated wire form of [`IssueReport`].
#[derive(Debug, Deserialize)]
struct RawIssueReport {
    /// Identifier of the resource the issue concerns.
    path: String,
    /// Human-readable explanation of the problem.
    message: String,
}

impl IssueReport {
    /// Creates an issue report for one resource.
    ///
    /// # Errors
    ///
    /// Returns [`IssueError`] when `path` or `message` is empty.
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Result<Self, IssueError> {
        let path = path.into();
        let message = message.into();
        if path.is_empty() {
            return Err(IssueError::EmptyPath);
        }
        if message.is_empty() {
            return Err(IssueError::EmptyMessage);
        }
        Ok(Self { path, message })
    }

    /// Returns the resource path the issue concerns.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the human-readable explanation.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl TryFrom<RawIssueReport> for IssueReport {
    type Error = IssueError;

    fn try_from(raw: RawIssueReport) -> Result<Self, Self::Error> {
        Self::new(raw.path, raw.message)
    }
}

impl fmt::Display for IssueReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

// ============================================================================
// SECTION: Issue Batch
// ============================================================================

/// Ordered batch of issue reports gathered during one load attempt.
///
/// # Invariants
/// - Insertion order equals detection order and is significant for the
///   combined message; duplicates are permitted.
/// - The combined message is recomputed, never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssueBatch {
    /// Reports in detection order.
    issues: Vec<IssueReport>,
}

impl IssueBatch {
    /// Creates an empty batch.
    #[must_use]
    pub const fn new() -> Self {
        Self { issues: Vec::new() }
    }

    /// Appends a report, preserving detection order.
    pub fn push(&mut self, issue: IssueReport) {
        self.issues.push(issue);
    }

    /// Returns the number of reports in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Returns `true` when the batch holds no reports.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Returns the reports in detection order.
    #[must_use]
    pub fn issues(&self) -> &[IssueReport] {
        &self.issues
    }

    /// Joins the messages into one multi-line string in detection order.
    ///
    /// An empty batch yields an empty string.
    #[must_use]
    pub fn combined_message(&self) -> String {
        let messages: Vec<&str> = self.issues.iter().map(IssueReport::message).collect();
        messages.join("\n")
    }
}

impl FromIterator<IssueReport> for IssueBatch {
    fn from_iter<I: IntoIterator<Item = IssueReport>>(iter: I) -> Self {
        Self {
            issues: iter.into_iter().collect(),
        }
    }
}

impl Extend<IssueReport> for IssueBatch {
    fn extend<I: IntoIterator<Item = IssueReport>>(&mut self, iter: I) {
        self.issues.extend(iter);
    }
}

impl<'a> IntoIterator for &'a IssueBatch {
    type Item = &'a IssueReport;
    type IntoIter = std::slice::Iter<'a, IssueReport>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.iter()
    }
}
