use thiserror::Error;

/// Errors surfaced by the fallible tree operations.
///
/// Duplicate keys are not an error: `insert_unique` reports them with a
/// boolean, leaving the tree untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForestError {
    #[error("clone callback declined a node after {cloned} node(s) were copied")]
    CloneAborted { cloned: usize },
    #[error("failed to reserve storage for {requested} element(s)")]
    AllocationFailed { requested: usize },
    #[error("tree invariant violated: {0}")]
    Invariant(String),
}

pub type ForestResult<T> = Result<T, ForestError>;
