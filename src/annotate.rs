//! Annotated TOC assembly
//!
//! Rebuilds a tree isomorphic to the input TOC, attaching the assigned
//! position range (or nulls) to every node. All numeric decisions were made
//! by [`crate::assign_ranges`]; this stage is structural copying only.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::locator::PositionLocator;
use crate::ranges::{assign_ranges, build_raw_ranges, PositionRange};
use crate::toc::TocNode;

/// A TOC node with its assigned position range attached.
///
/// `start_position`/`end_position` are both `Some` for nodes the assigner
/// ranged and both `None` for section headers without an href.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AnnotatedTocNode {
    /// Display title, copied from the input node
    pub title: String,
    /// Content href, copied from the input node
    pub href: Option<String>,
    /// First reading position belonging to this entry
    pub start_position: Option<usize>,
    /// Last reading position belonging to this entry
    pub end_position: Option<usize>,
    /// Child entries, recursively annotated in input order
    pub children: Vec<AnnotatedTocNode>,
}

/// The complete output handed to the host bridge.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AnnotatedToc {
    /// Annotated tree, isomorphic to the input TOC
    pub toc: Vec<AnnotatedTocNode>,
    /// Length of the position sequence, or `None` when it was unavailable
    pub total_positions: Option<usize>,
}

impl AnnotatedToc {
    /// Flatten into a pre-order list of (depth, node) pairs.
    ///
    /// Same traversal order as [`crate::flatten_toc`] over the input tree.
    pub fn flatten(&self) -> Vec<(usize, &AnnotatedTocNode)> {
        let mut result = Vec::new();
        flatten_into(&self.toc, 0, &mut result);
        result
    }
}

fn flatten_into<'a>(
    nodes: &'a [AnnotatedTocNode],
    depth: usize,
    result: &mut Vec<(usize, &'a AnnotatedTocNode)>,
) {
    for node in nodes {
        result.push((depth, node));
        flatten_into(&node.children, depth + 1, result);
    }
}

/// Attach assigned ranges to a TOC tree, preserving structure exactly.
///
/// `assigned` is consumed in pre-order, one slot per node, as produced by
/// [`assign_ranges`] for the same `toc`. Nodes beyond the end of `assigned`
/// (a shorter slice than the tree has nodes) are annotated with nulls.
pub fn annotate_toc(
    toc: &[TocNode],
    assigned: &[Option<PositionRange>],
) -> Vec<AnnotatedTocNode> {
    let mut cursor = 0;
    annotate_nodes(toc, assigned, &mut cursor)
}

fn annotate_nodes(
    nodes: &[TocNode],
    assigned: &[Option<PositionRange>],
    cursor: &mut usize,
) -> Vec<AnnotatedTocNode> {
    nodes
        .iter()
        .map(|node| {
            let range = assigned.get(*cursor).copied().flatten();
            *cursor += 1;
            AnnotatedTocNode {
                title: node.title.clone(),
                href: node.href.clone(),
                start_position: range.map(|r| r.start),
                end_position: range.map(|r| r.end),
                children: annotate_nodes(&node.children, assigned, cursor),
            }
        })
        .collect()
}

/// Run the whole pipeline: aggregate, assign, annotate.
///
/// `positions` is `None` when the host's positions service failed; that
/// degrades to an empty sequence with `total_positions = None` instead of
/// propagating an error. This function cannot fail: every combination of
/// empty or partial input yields a fully structured result.
pub fn toc_position_ranges(
    toc: &[TocNode],
    positions: Option<&[PositionLocator]>,
) -> AnnotatedToc {
    #[cfg(feature = "std")]
    if positions.is_none() {
        log::debug!("positions unavailable; assigning degenerate singleton ranges");
    }

    let total_positions = positions.map(|p| p.len());
    let raw_ranges = build_raw_ranges(positions.unwrap_or(&[]));
    let assigned = assign_ranges(toc, &raw_ranges);

    #[cfg(feature = "std")]
    log::debug!(
        "assigned position ranges for {} toc entries ({} resources, {:?} positions)",
        assigned.len(),
        raw_ranges.len(),
        total_positions
    );

    AnnotatedToc {
        toc: annotate_toc(toc, &assigned),
        total_positions,
    }
}
