//! Table-of-contents tree
//!
//! The hierarchical navigation structure the host resolves from the
//! publication. Nodes may be nested to any depth; a node without an href is a
//! pure section header and never receives a position range, though its
//! children still do.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

/// One entry in the table of contents.
///
/// A node's href may be absent (section header) or may repeat another node's
/// href after normalization; both are well-formed inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TocNode {
    /// Display title for this entry
    pub title: String,
    /// Content href (relative path, possibly with fragment/query)
    #[cfg_attr(feature = "serde", serde(default))]
    pub href: Option<String>,
    /// Child entries (for hierarchical TOC)
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<TocNode>,
}

impl TocNode {
    /// Create a leaf entry linked to a resource.
    pub fn new(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: Some(href.into()),
            children: Vec::new(),
        }
    }

    /// Create a section header with no linked resource.
    pub fn header(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: None,
            children: Vec::new(),
        }
    }

    /// Attach children, preserving their order.
    pub fn with_children(mut self, children: Vec<TocNode>) -> Self {
        self.children = children;
        self
    }
}

/// Count all TOC nodes recursively (including nested)
pub fn count_toc_nodes(nodes: &[TocNode]) -> usize {
    nodes
        .iter()
        .map(|n| 1 + count_toc_nodes(&n.children))
        .sum()
}

/// Flatten a TOC into a pre-order list of (depth, node) pairs.
///
/// Pre-order here (node, then children left to right, then next sibling) is
/// the document order the range assigner walks in; the `k`-th entry of this
/// list corresponds to the `k`-th slot of [`crate::assign_ranges`]' output.
pub fn flatten_toc(nodes: &[TocNode]) -> Vec<(usize, &TocNode)> {
    let mut result = Vec::new();
    flatten_into(nodes, 0, &mut result);
    result
}

fn flatten_into<'a>(
    nodes: &'a [TocNode],
    depth: usize,
    result: &mut Vec<(usize, &'a TocNode)>,
) {
    for node in nodes {
        result.push((depth, node));
        flatten_into(&node.children, depth + 1, result);
    }
}
