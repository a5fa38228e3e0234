//! Section narrowing between two marker phrases

/// Text strictly between the first `start` marker and the first `end`
/// marker that follows it.
///
/// Returns an empty string when either marker is missing; callers treat
/// that as "section not present".
pub fn locate_section<'a>(content: &'a str, start: &str, end: &str) -> &'a str {
    if start.is_empty() || end.is_empty() {
        return "";
    }

    let Some(start_idx) = content.find(start) else {
        return "";
    };
    let body_start = start_idx + start.len();
    let rest = &content[body_start..];

    match rest.find(end) {
        Some(end_idx) => &rest[..end_idx],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTENT: &str = "Summary\nTop Holdings\nAAPL $1.00 1%\nAsset Allocation\nEquities 68%";

    #[test]
    fn test_locates_section() {
        let section = locate_section(CONTENT, "Top Holdings", "Asset Allocation");
        assert_eq!(section, "\nAAPL $1.00 1%\n");
    }

    #[test]
    fn test_missing_start() {
        let content = "AAPL $1.00 1%\nAsset Allocation";
        assert_eq!(locate_section(content, "Top Holdings", "Asset Allocation"), "");
    }

    #[test]
    fn test_missing_end() {
        let content = "Top Holdings\nAAPL $1.00 1%";
        assert_eq!(locate_section(content, "Top Holdings", "Asset Allocation"), "");
    }

    #[test]
    fn test_end_before_start_is_ignored() {
        let content = "Asset Allocation\nTop Holdings\nMSFT $2.00 2%\nAsset Allocation";
        assert_eq!(
            locate_section(content, "Top Holdings", "Asset Allocation"),
            "\nMSFT $2.00 2%\n"
        );
    }

    #[test]
    fn test_first_occurrences_only() {
        let content = "Top Holdings\nA $1.00 1%\nAsset Allocation\n\
                       Top Holdings\nB $2.00 2%\nAsset Allocation";
        assert_eq!(
            locate_section(content, "Top Holdings", "Asset Allocation"),
            "\nA $1.00 1%\n"
        );
    }

    #[test]
    fn test_adjacent_markers() {
        let content = "Top HoldingsAsset Allocation";
        assert_eq!(locate_section(content, "Top Holdings", "Asset Allocation"), "");
    }
}
