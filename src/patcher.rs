//! Idempotent application of resolver output to the host.
//!
//! The patcher remembers what it last applied and emits nothing when the
//! active item has not changed, suppressing redundant writes and redundant
//! fragment replacements. Patch targets that the host reports missing are
//! skipped outright.

use crate::host::{Host, NavItem, Patch};
use crate::section::Section;

/// Applies active-item, sticky and strip-content changes exactly once each.
#[derive(Debug, Default)]
pub struct RenderPatcher {
    applied: Option<String>,
    fixed: bool,
}

impl RenderPatcher {
    #[must_use]
    /// Fresh patcher with nothing applied and the bar unpinned.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    /// Identifier of the item currently carrying the active marker.
    pub fn active(&self) -> Option<&str> {
        self.applied.as_deref()
    }

    /// Replace the strip's children with one item per section.
    ///
    /// Resets the applied-item memory: freshly rendered items carry no
    /// active marker until the next resolve.
    pub fn render_items<H: Host>(&mut self, host: &mut H, sections: &[Section]) {
        let items: Vec<NavItem> = sections
            .iter()
            .map(|section| NavItem {
                identifier: section.identifier.clone(),
                label: section.label.clone(),
            })
            .collect();
        host.apply(Patch::ReplaceItems(items));
        self.applied = None;
    }

    /// Move the active marker to `identifier`, doing nothing when it is
    /// already there.
    ///
    /// The new item is marked first; if the host cannot find it the whole
    /// patch is skipped and the previous marker stays put. On success the
    /// previous marker is cleared, the location fragment is replaced and the
    /// strip is aligned to the new item.
    pub fn apply_active<H: Host>(&mut self, host: &mut H, identifier: Option<&str>) {
        let Some(id) = identifier else {
            return;
        };
        if self.applied.as_deref() == Some(id) {
            return;
        }
        if !host.apply(Patch::MarkActive { id: id.to_string() }) {
            return;
        }
        if let Some(previous) = self.applied.take() {
            host.apply(Patch::ClearActive { id: previous });
        }
        host.apply(Patch::ReplaceFragment { id: id.to_string() });
        host.apply(Patch::AlignNavItem { id: id.to_string() });
        self.applied = Some(id.to_string());
    }

    /// Pin or release the bar, writing only on an actual transition.
    ///
    /// Independent of active-item state: sticky toggling still works with an
    /// empty heading set.
    pub fn apply_sticky<H: Host>(&mut self, host: &mut H, fixed: bool) {
        if fixed == self.fixed {
            return;
        }
        host.apply(Patch::SetFixed(fixed));
        self.fixed = fixed;
    }
}

#[cfg(test)]
#[path = "tests/patcher.rs"]
mod tests;
