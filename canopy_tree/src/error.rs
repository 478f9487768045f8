// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error taxonomy for tree mutation and lookup.

use thiserror::Error;

use crate::id::NodeId;

/// A tree operation failure.
///
/// All variants signal caller-contract violations: duplicate insertion and
/// missing-id lookups are surfaced, never silently defaulted, and failed
/// insertions leave the tree untouched. Animation, containment, and event
/// routing are total and never produce errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum TreeError {
    /// Insertion with an id already present anywhere in the tree.
    #[error("id {0} already exists in the tree")]
    DuplicateId(NodeId),
    /// Lookup of an id that does not exist; check `exists` first.
    #[error("id {0} not found; call exists() before looking a node up")]
    IdNotFound(NodeId),
    /// Reparenting a node under itself or one of its own descendants.
    #[error("cannot move {node} under {new_parent}: the destination is inside the moved subtree")]
    WouldCycle {
        /// The node being moved.
        node: NodeId,
        /// The requested destination parent.
        new_parent: NodeId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages_name_the_offending_id() {
        assert!(
            TreeError::DuplicateId(NodeId::new(7))
                .to_string()
                .contains('7')
        );
        assert!(
            TreeError::IdNotFound(NodeId::new(9))
                .to_string()
                .contains('9')
        );
    }
}
