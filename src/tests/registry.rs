use crate::config::{IdStyle, NavConfig};
use crate::host::fake::FakeHost;
use crate::host::Patch;
use crate::registry::{build_sections, slugify};

#[test]
fn test_build_reuses_existing_ids() {
    let mut host = FakeHost::with_headings(&[("Intro", 10), ("Usage", 50)]);
    host.heading_refs[0].existing_id = Some("my-intro".to_string());

    let config = NavConfig::default();
    let sections = build_sections(&mut host, &config);

    assert_eq!(sections[0].identifier, "my-intro");
    // Only the id-less heading gets one assigned back.
    let assigned: Vec<_> = host
        .patches
        .iter()
        .filter(|patch| matches!(patch, Patch::AssignHeadingId { .. }))
        .collect();
    assert_eq!(assigned.len(), 1);
}

#[test]
fn test_indexed_synthesis_assigns_back() {
    let mut host = FakeHost::with_headings(&[("Intro", 10), ("Usage", 50)]);
    let config = NavConfig::default();

    let sections = build_sections(&mut host, &config);

    assert_eq!(sections[0].identifier, "scrollnav-el-0");
    assert_eq!(sections[1].identifier, "scrollnav-el-1");
    assert_eq!(
        host.heading_refs[1].existing_id.as_deref(),
        Some("scrollnav-el-1")
    );
}

#[test]
fn test_slug_synthesis() {
    let mut host = FakeHost::with_headings(&[("Getting Started", 10)]);
    let config = NavConfig {
        id_style: IdStyle::Slug,
        ..NavConfig::default()
    };

    let sections = build_sections(&mut host, &config);

    assert_eq!(sections[0].identifier, "getting-started");
}

#[test]
fn test_ids_stable_across_rebuilds() {
    let mut host = FakeHost::with_headings(&[("Intro", 10), ("Usage", 50)]);
    let config = NavConfig::default();

    let first = build_sections(&mut host, &config);
    let assigns_after_first = host
        .patches
        .iter()
        .filter(|patch| matches!(patch, Patch::AssignHeadingId { .. }))
        .count();
    let second = build_sections(&mut host, &config);
    let assigns_after_second = host
        .patches
        .iter()
        .filter(|patch| matches!(patch, Patch::AssignHeadingId { .. }))
        .count();

    assert_eq!(first[0].identifier, second[0].identifier);
    assert_eq!(assigns_after_first, assigns_after_second);
}

#[test]
fn test_trigger_offset_is_top_minus_a_third_of_viewport() {
    let mut host = FakeHost::with_headings(&[("Intro", 100)]);
    host.set_viewport(30);
    let config = NavConfig::default();

    let sections = build_sections(&mut host, &config);

    assert_eq!(sections[0].trigger_offset, 90);
}

#[test]
fn test_missing_container_builds_empty() {
    let mut host = FakeHost::with_headings(&[("Intro", 10)]);
    host.metrics = None;
    let config = NavConfig::default();

    assert!(build_sections(&mut host, &config).is_empty());
}

#[test]
fn test_empty_heading_set_builds_empty() {
    let mut host = FakeHost::new();
    let config = NavConfig::default();

    assert!(build_sections(&mut host, &config).is_empty());
}

#[test]
fn test_duplicate_labels_collide_without_panic() {
    let mut host = FakeHost::with_headings(&[("Same", 10), ("Same", 50)]);
    let config = NavConfig {
        id_style: IdStyle::Slug,
        ..NavConfig::default()
    };

    let sections = build_sections(&mut host, &config);

    // Last write wins on the id binding; both entries carry the slug.
    assert_eq!(sections[0].identifier, "same");
    assert_eq!(sections[1].identifier, "same");
}

#[test]
fn test_slugify() {
    assert_eq!(slugify("Getting Started"), "getting-started");
    assert_eq!(slugify("Tips & Tricks"), "tips-and-tricks");
    assert_eq!(slugify("FAQ"), "faq");
    assert_eq!(slugify(""), "");
}
