//! The widget state machine bridging external signals and the nav pipeline.
//!
//! A widget instance moves `Unattached -> Observing -> Detached`. Detached is
//! terminal: every signal entry point checks the phase first, so a detached
//! widget produces zero further writes and a re-attached page constructs a
//! new instance. All work is synchronous and single-threaded; the binding
//! layer feeds scroll, resize and mutation signals in whatever order its
//! event loop delivers them.

use crate::config::NavConfig;
use crate::detect;
use crate::host::{Host, NodeId, Patch};
use crate::patcher::RenderPatcher;
use crate::registry;
use crate::resolver;
use crate::scheduler::Throttle;
use crate::section::Section;
use std::time::Instant;

/// Scroll slack before the bar pins, matching the original 5px threshold.
const STICKY_SLACK: i64 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Lifecycle phase of one widget instance.
pub enum Phase {
    /// Constructed but not yet attached to a host.
    Unattached,
    /// Attached and reacting to signals.
    Observing,
    /// Detached; terminal, all signals are ignored.
    Detached,
}

#[derive(Debug, Default)]
/// Per-instance navigation state, replaced wholesale on rebuild.
pub struct NavigationState {
    /// Current ordered section sequence.
    pub sections: Vec<Section>,
    /// Heading identities backing `sections`, for structural comparison.
    pub heading_nodes: Vec<NodeId>,
    /// Identifier of the currently highlighted section, if any.
    pub active_identifier: Option<String>,
}

/// Scroll-synced navigation widget.
pub struct ScrollingNav {
    config: NavConfig,
    phase: Phase,
    state: NavigationState,
    patcher: RenderPatcher,
    throttle: Throttle,
}

impl ScrollingNav {
    #[must_use]
    /// Construct an unattached widget with the given options.
    pub fn new(config: NavConfig) -> Self {
        let throttle = Throttle::new(config.throttle);
        Self {
            config,
            phase: Phase::Unattached,
            state: NavigationState::default(),
            patcher: RenderPatcher::new(),
            throttle,
        }
    }

    #[must_use]
    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    /// Current ordered section sequence.
    pub fn sections(&self) -> &[Section] {
        &self.state.sections
    }

    #[must_use]
    /// Identifier of the currently highlighted section.
    pub fn active_identifier(&self) -> Option<&str> {
        self.state.active_identifier.as_deref()
    }

    /// Attach to a host: build the registry, render the strip and resolve.
    ///
    /// An advisory location fragment naming a known section is honored by
    /// jumping straight to it. Attaching twice, or attaching a detached
    /// widget, does nothing.
    pub fn attach<H: Host>(&mut self, host: &mut H) {
        if self.phase != Phase::Unattached {
            return;
        }
        self.phase = Phase::Observing;
        self.rebuild(host);
        self.apply_sticky(host);

        if let Some(fragment) = host.fragment() {
            if self
                .state
                .sections
                .iter()
                .any(|section| section.identifier == fragment)
            {
                self.activate_item(host, &fragment);
                return;
            }
        }
        self.resolve_and_patch(host);
    }

    /// Release all observation; terminal.
    pub fn detach(&mut self) {
        self.phase = Phase::Detached;
    }

    /// Scroll signal: sticky toggle plus throttled resolve-and-patch.
    pub fn on_scroll<H: Host>(&mut self, host: &mut H, now: Instant) {
        if self.phase != Phase::Observing {
            return;
        }
        if self.throttle.admit(now) {
            self.scroll_tick(host);
        }
    }

    /// Clock tick: fires the throttle's trailing edge so the settled scroll
    /// position is always resolved after a burst.
    pub fn on_tick<H: Host>(&mut self, host: &mut H, now: Instant) {
        if self.phase != Phase::Observing {
            return;
        }
        if self.throttle.flush(now) {
            self.scroll_tick(host);
        }
    }

    /// Mutation signal: rebuild and re-render only on structural change,
    /// then re-resolve.
    pub fn on_mutation<H: Host>(&mut self, host: &mut H) {
        if self.phase != Phase::Observing {
            return;
        }
        if self.heading_set_changed(host) {
            self.rebuild(host);
        }
        self.resolve_and_patch(host);
    }

    /// Resize signal: trigger offsets depend on viewport height, so
    /// positions are recomputed even when the heading set is structurally
    /// unchanged. The strip itself only re-renders on structural change.
    pub fn on_resize<H: Host>(&mut self, host: &mut H) {
        if self.phase != Phase::Observing {
            return;
        }
        if self.heading_set_changed(host) {
            self.rebuild(host);
        } else {
            self.state.sections = registry::build_sections(host, &self.config);
            self.state.heading_nodes = self
                .state
                .sections
                .iter()
                .map(|section| section.anchor)
                .collect();
        }
        self.resolve_and_patch(host);
    }

    /// Click on a strip item: scroll the heading to just below the bar,
    /// replace the fragment and mark the item active.
    pub fn activate_item<H: Host>(&mut self, host: &mut H, identifier: &str) {
        if self.phase != Phase::Observing {
            return;
        }
        let Some(section) = self
            .state
            .sections
            .iter()
            .find(|section| section.identifier == identifier)
        else {
            return;
        };
        // The heading may have vanished since the last rebuild; skip, the
        // next mutation batch will catch up.
        let Some(top) = host.heading_top(section.anchor) else {
            return;
        };
        let offset = (top - host.nav_height()).max(0);
        host.apply(Patch::ScrollTo { offset });
        self.patcher.apply_active(host, Some(identifier));
        self.state.active_identifier = self.patcher.active().map(ToString::to_string);
        self.apply_sticky(host);
    }

    fn scroll_tick<H: Host>(&mut self, host: &mut H) {
        self.apply_sticky(host);
        self.resolve_and_patch(host);
    }

    fn heading_set_changed<H: Host>(&self, host: &H) -> bool {
        let current: Vec<NodeId> = host
            .headings(&self.config.heading_selector)
            .iter()
            .map(|heading| heading.node)
            .collect();
        detect::structurally_changed(&self.state.heading_nodes, &current)
    }

    fn rebuild<H: Host>(&mut self, host: &mut H) {
        self.state.sections = registry::build_sections(host, &self.config);
        self.state.heading_nodes = self
            .state
            .sections
            .iter()
            .map(|section| section.anchor)
            .collect();
        self.patcher.render_items(host, &self.state.sections);
        self.state.active_identifier = None;
    }

    fn resolve_and_patch<H: Host>(&mut self, host: &mut H) {
        let Some(metrics) = host.container_metrics() else {
            // No container: inactive but non-crashing until it appears.
            return;
        };
        let active = resolver::resolve_active(&self.state.sections, metrics.scroll_offset)
            .map(ToString::to_string);
        self.patcher.apply_active(host, active.as_deref());
        self.state.active_identifier = self.patcher.active().map(ToString::to_string);
    }

    fn apply_sticky<H: Host>(&mut self, host: &mut H) {
        if !self.config.sticky {
            return;
        }
        let Some(metrics) = host.container_metrics() else {
            return;
        };
        let fixed = metrics.scroll_offset >= host.nav_resting_offset() + STICKY_SLACK;
        self.patcher.apply_sticky(host, fixed);
    }
}

#[cfg(test)]
#[path = "tests/navbar.rs"]
mod tests;
