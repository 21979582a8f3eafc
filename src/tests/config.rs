use crate::config::{IdStyle, NavConfig};
use std::time::Duration;

#[test]
fn test_defaults() {
    let config = NavConfig::default();

    assert_eq!(config.heading_selector, "h2");
    assert_eq!(config.container_selector, None);
    assert!(config.sticky);
    assert_eq!(config.id_style, IdStyle::Indexed);
    assert_eq!(config.throttle, Duration::from_millis(100));
    assert_eq!(config.render_container, None);
}

#[test]
fn test_attribute_surface() {
    let config = NavConfig::from_attributes([
        ("heading-selector", "h3"),
        ("scrollable-container-selector", "#main"),
        ("container", ".nav-slot"),
        ("data-unrelated", "ignored"),
    ]);

    assert_eq!(config.heading_selector, "h3");
    assert_eq!(config.container_selector.as_deref(), Some("#main"));
    assert_eq!(config.render_container.as_deref(), Some(".nav-slot"));
    assert!(config.sticky);
}

#[test]
fn test_sticky_attribute_variants() {
    // Bare presence enables, the string "false" disables, either spelling.
    assert!(NavConfig::from_attributes([("sticky", "")]).sticky);
    assert!(NavConfig::from_attributes([("stick", "true")]).sticky);
    assert!(!NavConfig::from_attributes([("sticky", "false")]).sticky);
    assert!(!NavConfig::from_attributes([("stick", "false")]).sticky);
}

#[test]
fn test_empty_attribute_values_keep_defaults() {
    let config = NavConfig::from_attributes([
        ("heading-selector", ""),
        ("scrollable-container-selector", ""),
        ("container", ""),
    ]);

    assert_eq!(config.heading_selector, "h2");
    assert_eq!(config.container_selector, None);
    assert_eq!(config.render_container, None);
}
