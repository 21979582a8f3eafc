use crate::resolver::resolve_active;
use crate::section::Section;

fn section(identifier: &str, trigger_offset: i64) -> Section {
    Section {
        identifier: identifier.to_string(),
        label: identifier.to_string(),
        trigger_offset,
        anchor: 0,
    }
}

fn fixture() -> Vec<Section> {
    vec![
        section("intro", 10),
        section("usage", 50),
        section("faq", 90),
    ]
}

#[test]
fn test_empty_sections_resolve_to_none() {
    assert_eq!(resolve_active(&[], 0), None);
    assert_eq!(resolve_active(&[], 1_000_000), None);
}

#[test]
fn test_before_first_boundary_first_is_active() {
    let sections = fixture();
    assert_eq!(resolve_active(&sections, -100), Some("intro"));
    assert_eq!(resolve_active(&sections, 0), Some("intro"));
    // The first boundary itself still belongs to the first section.
    assert_eq!(resolve_active(&sections, 10), Some("intro"));
}

#[test]
fn test_half_open_interval_membership() {
    let sections = fixture();
    assert_eq!(resolve_active(&sections, 11), Some("intro"));
    assert_eq!(resolve_active(&sections, 49), Some("intro"));
    assert_eq!(resolve_active(&sections, 50), Some("usage"));
    assert_eq!(resolve_active(&sections, 89), Some("usage"));
}

#[test]
fn test_boundary_tie_favors_later_section() {
    let sections = fixture();
    assert_eq!(resolve_active(&sections, 90), Some("faq"));
}

#[test]
fn test_past_last_boundary_last_is_active() {
    let sections = fixture();
    assert_eq!(resolve_active(&sections, 90), Some("faq"));
    assert_eq!(resolve_active(&sections, 10_000), Some("faq"));
}

#[test]
fn test_total_over_non_empty_input() {
    let sections = fixture();
    for offset in -200..200 {
        assert!(
            resolve_active(&sections, offset).is_some(),
            "no active section at offset {offset}"
        );
    }
}

#[test]
fn test_single_section_always_active() {
    let sections = vec![section("only", 42)];
    assert_eq!(resolve_active(&sections, -10), Some("only"));
    assert_eq!(resolve_active(&sections, 42), Some("only"));
    assert_eq!(resolve_active(&sections, 500), Some("only"));
}
