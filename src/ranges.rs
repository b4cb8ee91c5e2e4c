//! Position range aggregation and assignment
//!
//! Two stages over the same numeric domain:
//!
//! - [`build_raw_ranges`]: one ordered pass over the position list, producing
//!   per-resource min/max bounds keyed by normalized href.
//! - [`assign_ranges`]: a pre-order walk over the TOC tree, consuming the raw
//!   bounds and a single shared watermark to give every node a final,
//!   gap-free range. The watermark (the highest `end` assigned so far) spans
//!   the entire traversal; it is never reset per root and never bounded by a
//!   parent node's range.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::href::normalize_href;
use crate::locator::PositionLocator;
use crate::toc::TocNode;

/// A contiguous range of 1-based reading positions, `start <= end` always.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionRange {
    /// First position belonging to the resource/node
    pub start: usize,
    /// Last position belonging to the resource/node
    pub end: usize,
}

impl PositionRange {
    /// Range covering a single position.
    pub fn singleton(position: usize) -> Self {
        Self {
            start: position,
            end: position,
        }
    }

    /// Number of positions covered (inclusive bounds).
    pub fn count(&self) -> usize {
        self.end - self.start + 1
    }
}

/// Aggregate an ordered position list into per-resource min/max bounds.
///
/// Locators are grouped by [`normalize_href`] key. A locator without an
/// explicit position contributes its 1-based sequence index instead. The
/// result covers only resources actually present in `positions`; resources
/// mentioned only in the TOC are absent. Single pass, O(n).
pub fn build_raw_ranges(positions: &[PositionLocator]) -> BTreeMap<String, PositionRange> {
    let mut ranges: BTreeMap<String, PositionRange> = BTreeMap::new();

    for (index, locator) in positions.iter().enumerate() {
        let key = normalize_href(&locator.href);
        let numeric_position = locator.position.unwrap_or(index + 1);

        match ranges.get_mut(key) {
            Some(existing) => {
                existing.start = existing.start.min(numeric_position);
                existing.end = existing.end.max(numeric_position);
            }
            None => {
                ranges.insert(key.to_string(), PositionRange::singleton(numeric_position));
            }
        }
    }

    ranges
}

/// Assign a final range to every href-bearing TOC node.
///
/// Walks all roots pre-order (node, children left to right, next sibling)
/// with one watermark shared across the whole traversal. Per visited node:
///
/// - no href: no range, watermark untouched, children still visited
/// - no raw data for the node's key: `start = watermark + 1`
/// - raw start above `watermark + 1`: `start = watermark + 1` (the gap
///   against the watermark is closed; the raw start is discarded)
/// - raw start at or below `watermark + 1`: `start = raw start`, which may
///   overlap an earlier node's range
///
/// `end` is the raw end (or `start` when no raw data), floored at `start`.
/// The watermark then advances to `max(watermark, end)`.
///
/// Returns one slot per node in pre-order, parallel to
/// [`crate::flatten_toc`], so nodes sharing a normalized key still get
/// independent ranges. With an empty `raw_ranges` map the `k`-th href-bearing
/// node degenerates to the singleton `{k, k}`.
pub fn assign_ranges(
    toc: &[TocNode],
    raw_ranges: &BTreeMap<String, PositionRange>,
) -> Vec<Option<PositionRange>> {
    let mut assigned = Vec::new();
    let mut watermark = 0;
    for node in toc {
        watermark = assign_node(node, raw_ranges, watermark, &mut assigned);
    }
    assigned
}

/// Assign one node and its subtree, threading the watermark explicitly.
///
/// Returns the watermark after the subtree, so each call is a pure fold step
/// over the pre-order flattening.
fn assign_node(
    node: &TocNode,
    raw_ranges: &BTreeMap<String, PositionRange>,
    watermark: usize,
    assigned: &mut Vec<Option<PositionRange>>,
) -> usize {
    let mut watermark = watermark;

    match node.href.as_deref() {
        None => assigned.push(None),
        Some(href) => {
            let existing = raw_ranges.get(normalize_href(href));
            let start = match existing {
                None => watermark + 1,
                Some(raw) if raw.start > watermark + 1 => watermark + 1,
                Some(raw) => raw.start,
            };
            let end_candidate = existing.map_or(start, |raw| raw.end);
            let end = end_candidate.max(start);

            assigned.push(Some(PositionRange { start, end }));
            watermark = watermark.max(end);
        }
    }

    for child in &node.children {
        watermark = assign_node(child, raw_ranges, watermark, assigned);
    }
    watermark
}
