//! Markdown-backed demo document: the "page" the TUI host scrolls.
//!
//! Headings are extracted with tree-sitter and keep their identity across
//! reloads: a reparsed heading with the same level, label and ordinal as a
//! previous one inherits its `NodeId` and any assigned identifier, the way a
//! DOM node survives unrelated mutations elsewhere in the tree.

use crate::formats::Format;
use crate::host::NodeId;
use std::collections::HashMap;
use std::io;
use std::fs;
use std::path::{Path, PathBuf};
use streaming_iterator::StreamingIterator;

#[derive(Clone, Debug)]
/// One heading found in the document.
pub struct DocHeading {
    /// Stable identity handle, preserved across reloads when possible.
    pub node: NodeId,
    /// ATX heading level, 1 through 6.
    pub level: u8,
    /// Line the heading sits on; the vertical unit of the TUI host.
    pub line: i64,
    /// Heading text without markup.
    pub label: String,
    /// Identifier assigned back by the engine, if any.
    pub assigned_id: Option<String>,
}

/// A loaded markdown file with its extracted heading set.
pub struct MarkdownDocument {
    /// Source file this document was read from.
    pub path: PathBuf,
    /// Document content, one entry per line.
    pub lines: Vec<String>,
    /// Headings in document order.
    pub headings: Vec<DocHeading>,
    next_node: NodeId,
}

/// A heading as it comes out of the parse, before identity assignment.
struct RawHeading {
    level: u8,
    line: i64,
    label: String,
}

impl MarkdownDocument {
    /// Read and parse a markdown file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the parser rejects the
    /// grammar or query.
    pub fn load<F: Format>(path: &Path, format: &F) -> io::Result<Self> {
        let source = fs::read_to_string(path)?;
        let mut document = Self::from_source(&source, format)?;
        document.path = path.to_path_buf();
        Ok(document)
    }

    /// Parse markdown source held in memory.
    ///
    /// # Errors
    ///
    /// Returns an error if the parser rejects the grammar or query.
    pub fn from_source<F: Format>(source: &str, format: &F) -> io::Result<Self> {
        let mut document = Self {
            path: PathBuf::new(),
            lines: Vec::new(),
            headings: Vec::new(),
            next_node: 0,
        };
        document.apply_source(source, format)?;
        Ok(document)
    }

    /// Re-read the backing file, keeping heading identity where possible.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn reload<F: Format>(&mut self, format: &F) -> io::Result<()> {
        let source = fs::read_to_string(&self.path)?;
        self.apply_source(&source, format)
    }

    fn apply_source<F: Format>(&mut self, source: &str, format: &F) -> io::Result<()> {
        let raw = extract_headings(source, format)?;
        self.headings = self.carry_identity(raw);
        self.lines = source.lines().map(ToString::to_string).collect();
        Ok(())
    }

    /// Match reparsed headings to the previous set by (level, label,
    /// ordinal) so surviving headings keep their node and assigned id.
    fn carry_identity(&mut self, raw: Vec<RawHeading>) -> Vec<DocHeading> {
        let mut survivors: HashMap<(u8, &str), Vec<&DocHeading>> = HashMap::new();
        for heading in &self.headings {
            survivors
                .entry((heading.level, heading.label.as_str()))
                .or_default()
                .push(heading);
        }
        // Consume front-to-back so duplicates pair up by ordinal.
        for queue in survivors.values_mut() {
            queue.reverse();
        }

        let mut headings = Vec::with_capacity(raw.len());
        for heading in &raw {
            let previous = survivors
                .get_mut(&(heading.level, heading.label.as_str()))
                .and_then(Vec::pop);
            let (node, assigned_id) = match previous {
                Some(survivor) => (survivor.node, survivor.assigned_id.clone()),
                None => {
                    let node = self.next_node;
                    self.next_node += 1;
                    (node, None)
                }
            };
            headings.push(DocHeading {
                node,
                level: heading.level,
                line: heading.line,
                label: heading.label.clone(),
                assigned_id,
            });
        }
        headings
    }
}

/// Parse a heading selector of the form `h2` or `h2,h3` into levels.
///
/// Unknown tokens contribute nothing, so a selector this host cannot express
/// degrades to an empty heading set rather than an error.
#[must_use]
pub fn parse_selector(selector: &str) -> Vec<u8> {
    let mut levels = Vec::new();
    for token in selector.split(',') {
        let token = token.trim();
        if let Some(digit) = token.strip_prefix('h').or_else(|| token.strip_prefix('H')) {
            if let Ok(level) = digit.parse::<u8>() {
                if (1..=6).contains(&level) && !levels.contains(&level) {
                    levels.push(level);
                }
            }
        }
    }
    levels
}

fn extract_headings<F: Format>(source: &str, format: &F) -> io::Result<Vec<RawHeading>> {
    let language = format.language();
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&language)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
    let tree = parser
        .parse(source, None)
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "parse failed"))?;

    let query = tree_sitter::Query::new(&language, format.heading_query())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
    let mut cursor = tree_sitter::QueryCursor::new();
    let mut matches = cursor.matches(&query, tree.root_node(), source.as_bytes());

    let mut headings = Vec::new();
    while let Some(matched) = matches.next() {
        for capture in matched.captures {
            if let Some(heading) = read_heading(capture.node, source) {
                headings.push(heading);
            }
        }
    }
    headings.sort_by_key(|heading| heading.line);
    Ok(headings)
}

/// Pull level and label out of one `atx_heading` node.
fn read_heading(node: tree_sitter::Node, source: &str) -> Option<RawHeading> {
    let mut level = None;
    let mut label = String::new();

    for index in 0..node.named_child_count() {
        let child = node.named_child(index)?;
        let kind = child.kind();
        if let Some(digit) = kind
            .strip_prefix("atx_h")
            .and_then(|rest| rest.strip_suffix("_marker"))
        {
            level = digit.parse::<u8>().ok();
        } else if kind == "inline" {
            if let Ok(text) = child.utf8_text(source.as_bytes()) {
                label = text.trim().to_string();
            }
        }
    }

    Some(RawHeading {
        level: level?,
        line: i64::try_from(node.start_position().row).ok()?,
        label,
    })
}

#[cfg(test)]
#[path = "tests/document.rs"]
mod tests;
