//! Configuration to acknowledge consumer preferences as well as set defaults.
//!
//! Two layers: `Config` loads demo defaults from a scrollnav.toml if present,
//! and `NavConfig` is the widget's own option set, fillable directly or from
//! the attribute surface the original element exposed.

use facet::Facet;
use std::fs;
use std::time::Duration;

#[derive(Facet, Clone)]
/// Demo defaults loaded from scrollnav.toml or falling back to defaults.
pub struct Config {
    #[facet(default = "h2".to_string())]
    /// Selector identifying which headings are tracked as sections.
    pub heading_selector: String,
    #[facet(default = true)]
    /// Whether the bar pins to the top once scrolled past.
    pub sticky: bool,
    #[facet(default = 100)]
    /// Minimum milliseconds between scroll-driven recomputations.
    pub throttle_ms: u64,
    #[facet(default = false)]
    /// Synthesize slugged identifiers instead of index-based ones.
    pub slug_ids: bool,
}

impl Config {
    #[must_use]
    /// Load configuration from scrollnav.toml if present.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot be parsed.
    pub fn load() -> Self {
        if let Ok(contents) = fs::read_to_string("scrollnav.toml") {
            if let Ok(config) = facet_toml::from_str::<Self>(&contents) {
                return config;
            }
        }
        facet_toml::from_str::<Self>("").unwrap()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// How identifiers are synthesized for headings that carry none.
pub enum IdStyle {
    /// `scrollnav-el-<index>` in document order.
    Indexed,
    /// Slug of the heading's text (see [`crate::registry::slugify`]).
    Slug,
}

#[derive(Clone, Debug)]
/// Per-widget options, each independently optional on the original element.
pub struct NavConfig {
    /// Selector identifying which headings are tracked as sections.
    pub heading_selector: String,
    /// Scrollable ancestor to observe and scroll instead of the viewport.
    pub container_selector: Option<String>,
    /// Whether the bar pins to the top once scrolled past.
    pub sticky: bool,
    /// Identifier synthesis style for headings without an id.
    pub id_style: IdStyle,
    /// Minimum interval between scroll-driven recomputations.
    pub throttle: Duration,
    /// Legacy: external element to render the strip into, for hosts that
    /// support out-of-place rendering.
    pub render_container: Option<String>,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            heading_selector: "h2".to_string(),
            container_selector: None,
            sticky: true,
            id_style: IdStyle::Indexed,
            throttle: Duration::from_millis(100),
            render_container: None,
        }
    }
}

impl NavConfig {
    #[must_use]
    /// Parse the element attribute surface into options.
    ///
    /// Unknown attributes are ignored. `stick` and `sticky` both toggle the
    /// pinning behavior; any value other than `"false"` enables it.
    pub fn from_attributes<'a, I>(attributes: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut config = Self::default();
        for (name, value) in attributes {
            match name {
                "heading-selector" if !value.is_empty() => {
                    config.heading_selector = value.to_string();
                }
                "scrollable-container-selector" if !value.is_empty() => {
                    config.container_selector = Some(value.to_string());
                }
                "stick" | "sticky" => config.sticky = value != "false",
                "container" if !value.is_empty() => {
                    config.render_container = Some(value.to_string());
                }
                _ => {}
            }
        }
        config
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
