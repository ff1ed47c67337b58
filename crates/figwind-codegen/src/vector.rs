//! Detection of subtrees that render as a single vector graphic.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use figwind_core::{DesignNode, NodeId};

/// Memoized vector-likeness check, scoped to one traversal.
///
/// A node is vector-like if it is an intrinsic vector shape, or a
/// container with at least one child whose children are all vector-like.
/// The memo lock is held only to read or store one entry, never across
/// recursion; racing tasks may compute the same node twice.
#[derive(Debug, Default)]
pub struct VectorLikeChecker {
    memo: Mutex<HashMap<NodeId, bool>>,
}

impl VectorLikeChecker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_vector_like(&self, node: &DesignNode) -> bool {
        if let Some(&cached) = self.memo().get(&node.id) {
            return cached;
        }

        let result = if node.kind.is_vector_shape() {
            true
        } else {
            let children = node.children();
            !children.is_empty() && children.iter().all(|child| self.is_vector_like(child))
        };

        self.memo().insert(node.id.clone(), result);
        result
    }

    fn memo(&self) -> MutexGuard<'_, HashMap<NodeId, bool>> {
        self.memo.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
