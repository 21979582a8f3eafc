//! Markdown format implementation using tree-sitter-md.
//!
//! ATX-style headings (# syntax); the heading level comes from the
//! `atx_hN_marker` child and the label from the `inline` child.

use crate::formats::Format;

/// Tree-sitter queries for ATX-style markdown headings (# syntax).
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn language(&self) -> tree_sitter::Language {
        tree_sitter_md::LANGUAGE.into()
    }

    fn heading_query(&self) -> &'static str {
        "(atx_heading) @heading"
    }
}
