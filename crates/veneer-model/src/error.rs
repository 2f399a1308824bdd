// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for adapter operations
//!
//! Every failure carries enough context (handle, operation, violated
//! invariant) to be logged verbatim by the caller. The adapter never
//! retries and never silently defaults a failed query.

use crate::{ElementKind, EntityHandle};
use thiserror::Error;

/// Result type alias for adapter operations
pub type Result<T> = std::result::Result<T, AdapterError>;

/// Which region-boundary invariant was violated
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum BoundaryViolation {
    /// A region boundary is exactly four curves
    #[error("expected exactly 4 boundary curves, found {found}")]
    WrongCurveCount { found: usize },

    /// Start of curve `segment` does not coincide with the previous end
    #[error("boundary loop is not closed at segment {segment}")]
    NotClosed { segment: usize },

    /// Curve endpoints do not lie in a single plane
    #[error("boundary curves are not planar (max deviation {deviation})")]
    NotPlanar { deviation: f64 },
}

/// Errors that can occur during adapter operations
#[derive(Error, Debug)]
pub enum AdapterError {
    /// The underlying element was deleted by the host
    #[error("stale handle {handle} in {operation}")]
    StaleHandle {
        handle: EntityHandle,
        operation: &'static str,
    },

    /// The host reports no display name for the element
    #[error("element {0} has no name")]
    EmptyName(EntityHandle),

    /// The room has no computed location point (unplaced room)
    #[error("room {0} has no location point")]
    NoLocation(EntityHandle),

    /// Orientation from a point toward itself is undefined
    #[error("orientation angle is undefined for coincident points")]
    UndefinedAngle,

    /// Region boundary input violated a construction invariant
    #[error("invalid region boundary: {0}")]
    InvalidBoundary(#[from] BoundaryViolation),

    /// The host declined a mutation for reasons opaque to the adapter
    #[error("host rejected {operation}: {reason}")]
    HostRejected {
        operation: &'static str,
        reason: String,
    },

    /// Nothing is selected
    #[error("no element selected")]
    NoSelection,

    /// More than one element is selected
    #[error("ambiguous selection: {count} elements selected, expected exactly 1")]
    AmbiguousSelection { count: usize },

    /// A mutating call was issued outside a host transaction
    #[error("no active transaction for {operation}")]
    NoActiveTransaction { operation: &'static str },

    /// A descriptor was constructed over a handle of the wrong kind
    #[error("kind mismatch for {handle}: expected {expected}, got {actual}")]
    KindMismatch {
        handle: EntityHandle,
        expected: ElementKind,
        actual: ElementKind,
    },

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl AdapterError {
    /// Create a stale-handle error
    pub fn stale(handle: EntityHandle, operation: &'static str) -> Self {
        AdapterError::StaleHandle { handle, operation }
    }

    /// Create a host-rejection error
    pub fn rejected(operation: &'static str, reason: impl Into<String>) -> Self {
        AdapterError::HostRejected {
            operation,
            reason: reason.into(),
        }
    }

    /// Create a no-active-transaction error
    pub fn no_transaction(operation: &'static str) -> Self {
        AdapterError::NoActiveTransaction { operation }
    }

    /// Create a kind-mismatch error
    pub fn kind_mismatch(handle: EntityHandle, expected: ElementKind) -> Self {
        AdapterError::KindMismatch {
            handle,
            expected,
            actual: handle.kind,
        }
    }

    /// Create a generic error
    pub fn other(msg: impl Into<String>) -> Self {
        AdapterError::Other(msg.into())
    }
}
