//! Path reconstruction for searches that record predecessors

use std::collections::HashMap;

/// Walk predecessors back from `destination` and return the path in
/// origin-to-destination order.
///
/// The walk stops at the first vertex without a predecessor, so the result
/// starts at `origin` only when `destination` was actually reached.
pub(crate) fn reconstruct_path(
    destination: &str,
    predecessors: &HashMap<String, String>,
) -> Vec<String> {
    let mut path = vec![destination.to_string()];
    let mut current = destination;

    while let Some(pred) = predecessors.get(current) {
        path.push(pred.clone());
        current = pred;
    }

    path.reverse();
    path
}
