//! Section representation for scroll-tracked headings.
//!
//! A section is one trackable heading together with the scroll position at
//! which it counts as "entered". The ordered section sequence is rebuilt
//! wholesale whenever the heading set changes structurally; it is never
//! mutated in place.

use crate::host::NodeId;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// One tracked heading and its computed scroll-trigger boundary.
pub struct Section {
    /// Stable identifier, reused from the heading or synthesized once.
    pub identifier: String,
    /// Display text read from the heading at build time.
    pub label: String,
    /// Scroll offset at which this section becomes entered. Computed as the
    /// heading's top minus a third of the viewport height, so a section
    /// activates before it is fully centered.
    pub trigger_offset: i64,
    /// Handle to the originating heading, owned by the host. Read-only from
    /// the engine's side: position lookups and click-target scrolls only.
    pub anchor: NodeId,
}
