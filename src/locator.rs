//! Reading position locators
//!
//! One locator per element of the publication-wide linear position sequence,
//! as produced by the host's positions service. Order within the sequence is
//! the canonical reading order.

extern crate alloc;

use alloc::string::String;

/// A single addressable reading position within a publication.
///
/// `position` is the explicit 1-based position number when the host supplies
/// one. When absent, the locator's 1-based index within the sequence stands in
/// for it (see [`crate::build_raw_ranges`]); absence is never an error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PositionLocator {
    /// Resource reference, possibly carrying fragment/query suffixes
    pub href: String,
    /// Explicit 1-based position number, if the host provided one
    #[cfg_attr(feature = "serde", serde(default))]
    pub position: Option<usize>,
}

impl PositionLocator {
    /// Create a locator with an explicit position number.
    pub fn new(href: impl Into<String>, position: usize) -> Self {
        Self {
            href: href.into(),
            position: Some(position),
        }
    }

    /// Create a locator without an explicit position number.
    pub fn without_position(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            position: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locator_constructors() {
        let with = PositionLocator::new("ch1.xhtml", 4);
        assert_eq!(with.href, "ch1.xhtml");
        assert_eq!(with.position, Some(4));

        let without = PositionLocator::without_position("ch2.xhtml");
        assert_eq!(without.href, "ch2.xhtml");
        assert_eq!(without.position, None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_locator_json_shape() {
        let loc: PositionLocator = serde_json::from_str(r#"{"href":"c1","position":3}"#).unwrap();
        assert_eq!(loc, PositionLocator::new("c1", 3));

        // `position` may be omitted entirely
        let loc: PositionLocator = serde_json::from_str(r#"{"href":"c2"}"#).unwrap();
        assert_eq!(loc.position, None);
    }
}
