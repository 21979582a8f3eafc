//! Active-item resolution: scroll offset in, single section identifier out.
//!
//! Pure function over the ordered section sequence. The interval for each
//! section is half-open, `[trigger, next_trigger)`, so a tie at a boundary
//! favors the later section. The last section is a bottom-of-page catch-all.

use crate::section::Section;

#[must_use]
/// Resolve which section is active for the given scroll offset.
///
/// Returns `None` only for an empty section sequence. Before the first
/// boundary the first section is active by default; past the last boundary
/// the last one is.
pub fn resolve_active(sections: &[Section], scroll_offset: i64) -> Option<&str> {
    let first = sections.first()?;
    if scroll_offset <= first.trigger_offset {
        return Some(&first.identifier);
    }

    for pair in sections.windows(2) {
        if scroll_offset >= pair[0].trigger_offset && scroll_offset < pair[1].trigger_offset {
            return Some(&pair[0].identifier);
        }
    }

    // Past every boundary: the last section catches the bottom of the page.
    sections.last().map(|section| section.identifier.as_str())
}

#[cfg(test)]
#[path = "tests/resolver.rs"]
mod tests;
