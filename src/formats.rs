//! Format trait and implementations for different document types.
//!
//! Abstracts over document formats by providing a tree-sitter language and a
//! heading query, so the demo host can track sections in formats other than
//! markdown without touching the extraction code.

pub mod markdown;

/// A document format the demo host can extract headings from.
pub trait Format {
    /// Tree-sitter language for parsing this format.
    fn language(&self) -> tree_sitter::Language;
    /// Query capturing every heading node as `@heading`.
    fn heading_query(&self) -> &str;
}
