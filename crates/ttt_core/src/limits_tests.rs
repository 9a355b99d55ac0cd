use super::*;

#[test]
fn test_search_limits_default_is_exhaustive() {
    let limits = SearchLimits::default();
    assert!(limits.is_exhaustive());
    assert_eq!(limits, SearchLimits::exhaustive());
}

#[test]
fn test_search_limits_depth() {
    let limits = SearchLimits::depth(4);
    assert_eq!(limits.max_depth, Some(4));
    assert!(!limits.is_exhaustive());
}
