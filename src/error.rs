use thiserror::Error;

/// Returned when the root value of an empty tree is requested.
///
/// This is the only emptiness condition reported as an error; every other
/// query on an empty tree answers with an empty or "not found" result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("tree is empty, cannot access root value")]
pub struct EmptyTreeError;
