use super::*;
use crate::CreatorId;

fn collect(
    matcher: &Matcher,
    text: &str,
) -> Vec<CreatorId> {
    matcher.search_str(text).collect()
}

#[test]
fn idempotent_insertion_should_not_change_output_sets() {
    let mut builder = AutomatonBuilder::new();
    builder.add_str("mori", 1);
    builder.add_str("mori", 1);
    builder.add_str("ori", 2);
    let twice = builder.build();

    builder.add_str("mori", 1);
    builder.add_str("ori", 2);
    let once = builder.build();

    let text = "komori";
    assert_eq!(collect(&twice, text), collect(&once, text));
    assert_eq!(collect(&twice, text), vec![1, 2]);
}

#[test]
fn prefix_and_extension_patterns_should_share_trie_states() {
    let mut builder = AutomatonBuilder::new();
    builder.add_str("eat", 1);
    builder.add_str("eating", 2);
    let matcher = builder.build();

    // root + e,a,t,i,n,g
    assert_eq!(matcher.state_count(), 7);
    assert_eq!(collect(&matcher, "eating"), vec![1, 2]);
}

#[test]
fn multiple_spellings_may_share_one_output_id() {
    let mut builder = AutomatonBuilder::new();
    builder.add_str("Gura", 7);
    builder.add_str("gura", 7);
    let matcher = builder.build();

    assert_eq!(collect(&matcher, "Gura gura"), vec![7, 7]);
}

#[test]
fn builder_should_be_reusable_after_build() {
    let mut builder = AutomatonBuilder::new();
    builder.add_str("ina", 1);
    let first = builder.build();

    builder.add_str("ame", 2);
    let second = builder.build();

    assert_eq!(collect(&first, "ina ame"), vec![1]);
    assert_eq!(collect(&second, "ina ame"), vec![2]);
    // A fresh compile starts from a bare root.
    assert_eq!(second.state_count(), 4);
}

#[test]
fn empty_builder_should_compile_to_a_matcher_that_never_matches() {
    let mut builder = AutomatonBuilder::new();
    let matcher = builder.build();

    assert_eq!(matcher.state_count(), 1);
    assert_eq!(collect(&matcher, "anything at all"), Vec::<CreatorId>::new());
}

#[test]
fn empty_pattern_gives_root_no_terminal_semantics_during_scans() {
    let mut builder = AutomatonBuilder::new();
    builder.add(b"", 9);
    builder.add_str("a", 1);
    let matcher = builder.build();

    // Matches are only emitted on stepping into a child state.
    assert_eq!(collect(&matcher, "aaa"), vec![1, 1, 1]);
}
