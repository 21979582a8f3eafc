//! Structural change detection over the tracked heading set.
//!
//! Identity comparison, not content comparison: a heading that moved or was
//! re-labelled in place is the same node, while insertion, removal and
//! reordering all count as structural change. Gates the expensive rebuild and
//! re-render path.

use crate::host::NodeId;

#[must_use]
/// Whether the heading set changed structurally since the last build.
pub fn structurally_changed(previous: &[NodeId], current: &[NodeId]) -> bool {
    previous.len() != current.len() || previous.iter().zip(current).any(|(a, b)| a != b)
}

#[cfg(test)]
#[path = "tests/detect.rs"]
mod tests;
