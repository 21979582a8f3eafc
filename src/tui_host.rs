//! Terminal host: implements the engine's host seam over a markdown file.
//!
//! Vertical units are text rows, the terminal's pixel analog. The host keeps
//! the patch-driven render state (strip items, active id, pinned flag,
//! fragment, strip alignment) that the UI layer draws each frame.

use crate::document::{parse_selector, MarkdownDocument};
use crate::host::{ContainerMetrics, HeadingRef, Host, NavItem, NodeId, Patch};

/// Rows of title block shown above the strip at its resting position.
pub const TITLE_HEIGHT: i64 = 3;

/// Hosts the navigation engine over a [`MarkdownDocument`] in a terminal.
pub struct TuiHost {
    /// The document being scrolled.
    pub document: MarkdownDocument,
    /// Current scroll offset of the document pane, in rows.
    pub scroll_offset: i64,
    /// Visible height of the document pane, in rows.
    pub viewport_height: i64,
    /// Strip content, replaced wholesale by the engine.
    pub nav_items: Vec<NavItem>,
    /// Identifier of the item carrying the active marker.
    pub active_id: Option<String>,
    /// Whether the strip is pinned to the top row.
    pub fixed: bool,
    /// Location fragment; advisory at startup, engine-owned afterwards.
    pub fragment: Option<String>,
    /// Index of the first visible strip item, set by alignment patches.
    pub strip_offset: usize,
}

impl TuiHost {
    #[must_use]
    /// Wrap a document with default view state.
    pub fn new(document: MarkdownDocument) -> Self {
        Self {
            document,
            scroll_offset: 0,
            viewport_height: 0,
            nav_items: Vec::new(),
            active_id: None,
            fixed: false,
            fragment: None,
            strip_offset: 0,
        }
    }

    #[must_use]
    /// Largest useful scroll offset for the current document.
    pub fn max_scroll(&self) -> i64 {
        let lines = i64::try_from(self.document.lines.len()).unwrap_or(i64::MAX);
        (lines - self.viewport_height).max(0)
    }

    /// Scroll the document pane by a signed row delta, clamped.
    pub fn scroll_by(&mut self, delta: i64) {
        self.scroll_offset = (self.scroll_offset + delta).clamp(0, self.max_scroll());
    }
}

impl Host for TuiHost {
    fn headings(&self, selector: &str) -> Vec<HeadingRef> {
        let levels = parse_selector(selector);
        self.document
            .headings
            .iter()
            .filter(|heading| levels.contains(&heading.level))
            .map(|heading| HeadingRef {
                node: heading.node,
                existing_id: heading.assigned_id.clone(),
                label: heading.label.clone(),
                top_offset: heading.line,
            })
            .collect()
    }

    fn container_metrics(&self) -> Option<ContainerMetrics> {
        Some(ContainerMetrics {
            scroll_offset: self.scroll_offset,
            viewport_height: self.viewport_height,
        })
    }

    fn nav_resting_offset(&self) -> i64 {
        TITLE_HEIGHT
    }

    fn nav_height(&self) -> i64 {
        1
    }

    fn fragment(&self) -> Option<String> {
        self.fragment.clone()
    }

    fn heading_top(&self, node: NodeId) -> Option<i64> {
        self.document
            .headings
            .iter()
            .find(|heading| heading.node == node)
            .map(|heading| heading.line)
    }

    fn apply(&mut self, patch: Patch) -> bool {
        match patch {
            Patch::ReplaceItems(items) => {
                self.nav_items = items;
                self.active_id = None;
                self.strip_offset = 0;
                true
            }
            Patch::AssignHeadingId { node, id } => {
                match self
                    .document
                    .headings
                    .iter_mut()
                    .find(|heading| heading.node == node)
                {
                    Some(heading) => {
                        heading.assigned_id = Some(id);
                        true
                    }
                    None => false,
                }
            }
            Patch::MarkActive { id } => {
                if self.nav_items.iter().any(|item| item.identifier == id) {
                    self.active_id = Some(id);
                    true
                } else {
                    false
                }
            }
            Patch::ClearActive { id } => {
                // MarkActive already moved the single active slot; only clear
                // when the slot still names the item being cleared.
                if self.active_id.as_deref() == Some(&id) {
                    self.active_id = None;
                }
                true
            }
            Patch::ReplaceFragment { id } => {
                self.fragment = Some(id);
                true
            }
            Patch::AlignNavItem { id } => {
                match self
                    .nav_items
                    .iter()
                    .position(|item| item.identifier == id)
                {
                    Some(index) => {
                        self.strip_offset = index;
                        true
                    }
                    None => false,
                }
            }
            Patch::SetFixed(fixed) => {
                self.fixed = fixed;
                true
            }
            Patch::ScrollTo { offset } => {
                self.scroll_offset = offset.clamp(0, self.max_scroll());
                true
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/tui_host.rs"]
mod tests;
