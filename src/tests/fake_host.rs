//! Recording host double: scripted headings in, journaled patches out.

use crate::host::{ContainerMetrics, HeadingRef, Host, NavItem, NodeId, Patch};

pub struct FakeHost {
    pub heading_refs: Vec<HeadingRef>,
    pub metrics: Option<ContainerMetrics>,
    pub resting_offset: i64,
    pub initial_fragment: Option<String>,
    pub items: Vec<NavItem>,
    pub active: Vec<String>,
    pub fragment: Option<String>,
    pub fixed: bool,
    pub scroll_target: Option<i64>,
    pub patches: Vec<Patch>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self {
            heading_refs: Vec::new(),
            metrics: Some(ContainerMetrics {
                scroll_offset: 0,
                viewport_height: 30,
            }),
            resting_offset: 3,
            initial_fragment: None,
            items: Vec::new(),
            active: Vec::new(),
            fragment: None,
            fixed: false,
            scroll_target: None,
            patches: Vec::new(),
        }
    }

    /// Host with one id-less heading per (label, top) pair, nodes 1..=n.
    pub fn with_headings(headings: &[(&str, i64)]) -> Self {
        let mut host = Self::new();
        for (index, (label, top)) in headings.iter().enumerate() {
            host.heading_refs.push(HeadingRef {
                node: NodeId::try_from(index).unwrap() + 1,
                existing_id: None,
                label: (*label).to_string(),
                top_offset: *top,
            });
        }
        host
    }

    pub fn set_scroll(&mut self, offset: i64) {
        if let Some(metrics) = &mut self.metrics {
            metrics.scroll_offset = offset;
        }
    }

    pub fn set_viewport(&mut self, height: i64) {
        if let Some(metrics) = &mut self.metrics {
            metrics.viewport_height = height;
        }
    }

    pub fn writes(&self) -> usize {
        self.patches.len()
    }

    pub fn mark_active_count(&self) -> usize {
        self.patches
            .iter()
            .filter(|patch| matches!(patch, Patch::MarkActive { .. }))
            .count()
    }

    pub fn replace_items_count(&self) -> usize {
        self.patches
            .iter()
            .filter(|patch| matches!(patch, Patch::ReplaceItems(_)))
            .count()
    }

    pub fn set_fixed_count(&self) -> usize {
        self.patches
            .iter()
            .filter(|patch| matches!(patch, Patch::SetFixed(_)))
            .count()
    }
}

impl Host for FakeHost {
    fn headings(&self, _selector: &str) -> Vec<HeadingRef> {
        self.heading_refs.clone()
    }

    fn container_metrics(&self) -> Option<ContainerMetrics> {
        self.metrics
    }

    fn nav_resting_offset(&self) -> i64 {
        self.resting_offset
    }

    fn nav_height(&self) -> i64 {
        1
    }

    fn fragment(&self) -> Option<String> {
        self.initial_fragment.clone()
    }

    fn heading_top(&self, node: NodeId) -> Option<i64> {
        self.heading_refs
            .iter()
            .find(|heading| heading.node == node)
            .map(|heading| heading.top_offset)
    }

    fn apply(&mut self, patch: Patch) -> bool {
        let applied = match &patch {
            Patch::ReplaceItems(items) => {
                self.items = items.clone();
                self.active.clear();
                true
            }
            Patch::AssignHeadingId { node, id } => {
                match self
                    .heading_refs
                    .iter_mut()
                    .find(|heading| heading.node == *node)
                {
                    Some(heading) => {
                        heading.existing_id = Some(id.clone());
                        true
                    }
                    None => false,
                }
            }
            Patch::MarkActive { id } => {
                if self.items.iter().any(|item| item.identifier == *id) {
                    self.active.push(id.clone());
                    true
                } else {
                    false
                }
            }
            Patch::ClearActive { id } => {
                self.active.retain(|active| active != id);
                true
            }
            Patch::ReplaceFragment { id } => {
                self.fragment = Some(id.clone());
                true
            }
            Patch::AlignNavItem { id } => self.items.iter().any(|item| item.identifier == *id),
            Patch::SetFixed(fixed) => {
                self.fixed = *fixed;
                true
            }
            Patch::ScrollTo { offset } => {
                self.scroll_target = Some(*offset);
                if let Some(metrics) = &mut self.metrics {
                    metrics.scroll_offset = *offset;
                }
                true
            }
        };
        self.patches.push(patch);
        applied
    }
}
