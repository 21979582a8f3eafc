//! The seam between the navigation engine and whatever page hosts it.
//!
//! The engine never touches a document directly. It reads headings, scroll
//! metrics and the location fragment through the [`Host`] trait, and writes
//! every visible effect as a [`Patch`] the host applies. A host that cannot
//! find a patch target reports `false` and the engine skips that patch; a
//! structural change between a rebuild and a patch is therefore survivable.

use serde::{Deserialize, Serialize};

/// Stable identity handle for one heading element.
///
/// Two `NodeId`s are equal exactly when they name the same heading, even
/// across re-reads of the heading set. Hosts must keep an id stable for as
/// long as the underlying element survives.
pub type NodeId = u64;

#[derive(Clone, Debug, PartialEq, Eq)]
/// One heading as read from the host, in document order.
pub struct HeadingRef {
    /// Identity handle owned by the host.
    pub node: NodeId,
    /// Id already carried by the element, reused verbatim when present.
    pub existing_id: Option<String>,
    /// Display text of the heading.
    pub label: String,
    /// Vertical position of the heading within its scroll container.
    pub top_offset: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Current geometry of the scroll container.
pub struct ContainerMetrics {
    /// How far the container is scrolled from its top.
    pub scroll_offset: i64,
    /// Visible height of the container.
    pub viewport_height: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// One rendered entry in the navigation strip.
pub struct NavItem {
    /// Section identifier, doubles as the link fragment.
    pub identifier: String,
    /// Display text copied from the heading.
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A single write the engine asks the host to perform.
pub enum Patch {
    /// Replace the strip's children wholesale, in document order.
    ReplaceItems(Vec<NavItem>),
    /// Assign a synthesized id back onto a heading element so it stays
    /// stable across rebuilds and works as a link fragment.
    AssignHeadingId {
        /// Heading to receive the id.
        node: NodeId,
        /// Identifier to assign.
        id: String,
    },
    /// Add the active marker to one strip item.
    MarkActive {
        /// Identifier of the newly active item.
        id: String,
    },
    /// Remove the active marker from a strip item.
    ClearActive {
        /// Identifier of the previously active item.
        id: String,
    },
    /// Set the current location fragment without creating a navigable
    /// history entry (replace, never push).
    ReplaceFragment {
        /// Identifier to place in the fragment.
        id: String,
    },
    /// Scroll the strip horizontally so this item sits left-aligned.
    AlignNavItem {
        /// Identifier of the item to align.
        id: String,
    },
    /// Pin the bar to the top of the viewport, or release it.
    SetFixed(bool),
    /// Scroll the container to an absolute vertical offset.
    ScrollTo {
        /// Target offset from the container's top.
        offset: i64,
    },
}

/// What a page must provide to host the navigation engine.
///
/// Reads are cheap and may happen on every event tick. `apply` returns
/// whether the patch target was found; the engine treats `false` as "skip",
/// never as an error.
pub trait Host {
    /// Headings matching `selector`, scoped to the scroll container, in
    /// document order.
    fn headings(&self, selector: &str) -> Vec<HeadingRef>;

    /// Geometry of the scroll container, or `None` while the configured
    /// container cannot be resolved.
    fn container_metrics(&self) -> Option<ContainerMetrics>;

    /// Resting vertical position of the nav bar, used for sticky toggling.
    fn nav_resting_offset(&self) -> i64;

    /// Height of the nav bar, used to land a clicked heading just below it.
    fn nav_height(&self) -> i64;

    /// Advisory location fragment read once at attach time.
    fn fragment(&self) -> Option<String>;

    /// Current top offset of a heading, or `None` if it has been removed.
    fn heading_top(&self, node: NodeId) -> Option<i64>;

    /// Apply one patch; `false` means the target no longer exists.
    fn apply(&mut self, patch: Patch) -> bool;
}

#[cfg(test)]
#[path = "tests/fake_host.rs"]
pub(crate) mod fake;
