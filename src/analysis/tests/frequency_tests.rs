use crate::analysis::rank_by_frequency;

#[test]
fn test_rank_empty() {
    assert!(rank_by_frequency(Vec::<&str>::new(), 5).is_empty());
}

#[test]
fn test_rank_by_count_then_first_seen() {
    let items = ["b", "a", "c", "a", "c", "d"];
    assert_eq!(rank_by_frequency(items, 10), vec!["a", "c", "b", "d"]);
}

#[test]
fn test_rank_limit() {
    let items = ["x", "y", "z", "z"];
    assert_eq!(rank_by_frequency(items, 2), vec!["z", "x"]);
    assert!(rank_by_frequency(items, 0).is_empty());
}

#[test]
fn test_rank_is_case_sensitive() {
    let items = ["Inter", "inter", "Inter"];
    assert_eq!(rank_by_frequency(items, 10), vec!["Inter", "inter"]);
}
