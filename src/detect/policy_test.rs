use super::*;
use crate::NameKind;

#[test]
fn display_names_without_a_separator_are_rejected() {
    let policy = NamePolicy::default();
    assert!(!policy.accepts(NameKind::Display, "Ui"));
    assert!(!policy.accepts(NameKind::Display, "AZKi"));
    assert!(policy.accepts(NameKind::Display, "Tokino Sora"));
}

#[test]
fn short_kana_only_names_are_rejected() {
    let policy = NamePolicy::default();
    // Five kana: below the kana-only floor.
    assert!(!policy.accepts(NameKind::Original, "さくらみこ"));
    // Six kana: meets it.
    assert!(policy.accepts(NameKind::Original, "うさだぺこら"));
}

#[test]
fn names_with_any_non_kana_character_only_need_the_general_floor() {
    let policy = NamePolicy::default();
    // A single ambiguous character is never indexed.
    assert!(!policy.accepts(NameKind::Original, "叶"));
    assert!(policy.accepts(NameKind::Original, "兎田ぺこら"));
    assert!(policy.accepts(NameKind::Original, "AZKi"));
}

#[test]
fn empty_names_are_always_rejected() {
    let policy = NamePolicy::default();
    assert!(!policy.accepts(NameKind::Original, ""));
    assert!(!policy.accepts(NameKind::Display, ""));
}

#[test]
fn indexable_strips_the_separator_dot_from_original_names() {
    let policy = NamePolicy::default();
    let pattern = policy.indexable(NameKind::Original, "がうる・ぐら").unwrap();
    assert_eq!(pattern, "がうるぐら");

    // Display names pass through untouched.
    let display = policy.indexable(NameKind::Display, "Gawr Gura").unwrap();
    assert_eq!(display, "Gawr Gura");
}

#[test]
fn indexable_returns_none_for_rejected_names() {
    let policy = NamePolicy::default();
    assert!(policy.indexable(NameKind::Display, "Gura").is_none());
    assert!(policy.indexable(NameKind::Original, "さくらみこ").is_none());
}

#[test]
fn floors_are_configuration_points() {
    let policy = NamePolicy {
        kana_only_min_chars: 5,
        ..NamePolicy::default()
    };
    assert!(policy.accepts(NameKind::Original, "さくらみこ"));

    let lax = NamePolicy {
        display_requires_separator: false,
        ..NamePolicy::default()
    };
    assert!(lax.accepts(NameKind::Display, "AZKi"));
}

#[test]
fn same_policy_and_names_always_agree() {
    let policy = NamePolicy::default();
    let names = ["宝鐘マリン", "こより", "Hakos Baelz", "ibrahim"];
    for name in names {
        let first = policy.accepts(NameKind::Original, name);
        let second = policy.accepts(NameKind::Original, name);
        assert_eq!(first, second);
    }
}
