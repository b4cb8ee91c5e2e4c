//! Href normalization
//!
//! Reduces a resource reference to the fragment/query-insensitive key used
//! for position aggregation. This is the single normalization point for the
//! whole pipeline; the aggregator and the assigner must bucket by the same
//! rule or resources silently split into different buckets.

/// Normalize an href to its resource key.
///
/// Truncates at the first `#`, then truncates the result at the first `?`.
/// Pure and total; returns a subslice of the input.
///
/// ```
/// use toc_ranges::normalize_href;
///
/// assert_eq!(normalize_href("chapter1.xhtml#sec2"), "chapter1.xhtml");
/// assert_eq!(normalize_href("chapter1.xhtml?x=1"), "chapter1.xhtml");
/// assert_eq!(normalize_href("chapter1.xhtml"), "chapter1.xhtml");
/// ```
pub fn normalize_href(href: &str) -> &str {
    let no_fragment = match href.find('#') {
        Some(idx) => &href[..idx],
        None => href,
    };
    match no_fragment.find('?') {
        Some(idx) => &no_fragment[..idx],
        None => no_fragment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_plain_href() {
        assert_eq!(normalize_href("ch1.xhtml"), "ch1.xhtml");
    }

    #[test]
    fn test_normalize_strips_fragment() {
        assert_eq!(normalize_href("ch1.xhtml#s1"), "ch1.xhtml");
    }

    #[test]
    fn test_normalize_strips_query() {
        assert_eq!(normalize_href("ch1.xhtml?x=1"), "ch1.xhtml");
    }

    #[test]
    fn test_normalize_strips_query_then_fragment() {
        assert_eq!(normalize_href("ch1.xhtml?x=1#s1"), "ch1.xhtml");
    }

    #[test]
    fn test_normalize_fragment_before_query() {
        // Fragment is trimmed first, so a '?' inside the fragment never
        // survives to the query pass
        assert_eq!(normalize_href("ch1.xhtml#s1?x=1"), "ch1.xhtml");
    }

    #[test]
    fn test_normalize_fragment_only_href() {
        assert_eq!(normalize_href("#section1"), "");
    }

    #[test]
    fn test_normalize_empty_href() {
        assert_eq!(normalize_href(""), "");
    }

    #[test]
    fn test_normalize_nested_path() {
        assert_eq!(
            normalize_href("OEBPS/text/ch1.xhtml#frag"),
            "OEBPS/text/ch1.xhtml"
        );
    }

    #[test]
    fn test_normalize_equivalence() {
        // Fragment and query variants of the same resource share one key
        assert_eq!(
            normalize_href("chapter1.xhtml#sec2"),
            normalize_href("chapter1.xhtml?x=1")
        );
    }
}
