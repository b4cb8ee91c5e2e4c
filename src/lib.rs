//! toc_ranges -- Table-of-contents position range assignment for ebook readers
//!
//! Given a publication's linear reading-position sequence and its hierarchical
//! table of contents, computes for every TOC node a contiguous numeric range
//! `[start, end]` of reading positions, for progress bars and "X of Y" UI.
//!
//! # Pipeline
//!
//! Four pure stages, each feeding the next:
//!
//! 1. [`normalize_href`] -- canonicalize a resource reference to a
//!    fragment/query-insensitive key
//! 2. [`build_raw_ranges`] -- per-resource min/max bounds from the ordered
//!    position list
//! 3. [`assign_ranges`] -- pre-order walk over the TOC with a shared
//!    watermark, producing a final range per node
//! 4. [`annotate_toc`] -- rebuild an isomorphic tree with nullable
//!    `start_position`/`end_position` per node
//!
//! [`toc_position_ranges`] runs the whole pipeline; it cannot fail. Missing
//! inputs degrade (unavailable positions become an empty sequence with
//! `total_positions = None`).
//!
//! # Features
//!
//! - `std` (default) -- enables `log` output
//! - `serde` -- camelCase `Serialize`/`Deserialize` derives on all model
//!   types, matching the JSON shape host bridges exchange

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![deny(clippy::large_enum_variant, clippy::redundant_clone)]
#![warn(
    clippy::needless_collect,
    clippy::map_clone,
    clippy::implicit_clone,
    clippy::inefficient_to_string
)]

extern crate alloc;

pub mod annotate;
pub mod href;
pub mod locator;
pub mod ranges;
pub mod toc;

// Re-export key types for convenience
pub use annotate::{annotate_toc, toc_position_ranges, AnnotatedToc, AnnotatedTocNode};
pub use href::normalize_href;
pub use locator::PositionLocator;
pub use ranges::{assign_ranges, build_raw_ranges, PositionRange};
pub use toc::{count_toc_nodes, flatten_toc, TocNode};
