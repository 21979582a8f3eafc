//! Section registry: turns the host's heading set into ordered sections.
//!
//! Each build re-reads the headings, reuses or synthesizes identifiers, and
//! recomputes trigger offsets from the current viewport height. A missing
//! scroll container or an empty heading set yields an empty registry, which
//! is a valid inactive state rather than an error.

use crate::config::{IdStyle, NavConfig};
use crate::host::{Host, Patch};
use crate::section::Section;

/// Prefix for index-based synthesized identifiers.
pub const SYNTH_ID_PREFIX: &str = "scrollnav-el";

/// Build the ordered section sequence for the current heading set.
///
/// Headings keep their existing id when they have one; otherwise an id is
/// synthesized per `config.id_style` and assigned back onto the element so it
/// survives rebuilds and works as a link fragment. The output is in document
/// order; resolution is undefined if headings are not monotonically
/// positioned.
pub fn build_sections<H: Host>(host: &mut H, config: &NavConfig) -> Vec<Section> {
    let Some(metrics) = host.container_metrics() else {
        return Vec::new();
    };

    let headings = host.headings(&config.heading_selector);
    let mut sections = Vec::with_capacity(headings.len());

    for (index, heading) in headings.into_iter().enumerate() {
        let identifier = match heading.existing_id {
            Some(id) => id,
            None => {
                let id = match config.id_style {
                    IdStyle::Indexed => format!("{SYNTH_ID_PREFIX}-{index}"),
                    IdStyle::Slug => slugify(&heading.label),
                };
                host.apply(Patch::AssignHeadingId {
                    node: heading.node,
                    id: id.clone(),
                });
                id
            }
        };

        sections.push(Section {
            identifier,
            label: heading.label,
            trigger_offset: heading.top_offset - metrics.viewport_height / 3,
            anchor: heading.node,
        });
    }

    sections
}

#[must_use]
/// Derive a fragment-friendly identifier from a heading's text.
///
/// Lower-cases, turns spaces into hyphens and `&` into `and`. Two headings
/// with identical text produce the same slug; the id-to-heading binding is
/// then last-write-wins. Known limitation, never a panic.
pub fn slugify(label: &str) -> String {
    label
        .to_lowercase()
        .split(' ')
        .collect::<Vec<_>>()
        .join("-")
        .replace('&', "and")
}

#[cfg(test)]
#[path = "tests/registry.rs"]
mod tests;
