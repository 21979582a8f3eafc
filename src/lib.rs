//! scrollnav: scroll-synced section navigation with a sticky nav strip.
//!
//! The engine mirrors a document's headings as a horizontal navigation strip,
//! keeps exactly one entry active for the current scroll position, and jumps
//! the document when an entry is activated. It is host-agnostic: everything it
//! knows about the page arrives through the [`host::Host`] trait, and every
//! output it produces leaves as a [`host::Patch`]. The bundled binary hosts
//! the engine over a markdown file rendered in a terminal.
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod detect;
pub mod document;
pub mod formats;
pub mod host;
pub mod navbar;
pub mod patcher;
pub mod registry;
pub mod resolver;
pub mod scheduler;
pub mod section;
pub mod tui_host;
pub mod ui;
