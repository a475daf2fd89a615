//! Tests for key names, keys and key sets.

use super::*;
use rstest::rstest;

fn name(raw: &str) -> KeyName {
    KeyName::parse(raw).expect("valid key name")
}

#[rstest]
#[case("spec/sw/app/level", Namespace::Spec, &["sw", "app", "level"])]
#[case("proc//sw/app/", Namespace::Proc, &["sw", "app"])]
#[case("/sw/app", Namespace::Cascading, &["sw", "app"])]
#[case("user", Namespace::User, &[])]
fn parses_namespace_and_segments(
    #[case] raw: &str,
    #[case] namespace: Namespace,
    #[case] segments: &[&str],
) {
    let parsed = name(raw);
    assert_eq!(parsed.namespace(), namespace);
    assert_eq!(parsed.segments(), segments);
}

#[rstest]
#[case("", KeyNameError::Empty)]
#[case("bogus/sw", KeyNameError::UnknownNamespace("bogus".to_owned()))]
fn rejects_invalid_names(#[case] raw: &str, #[case] expected: KeyNameError) {
    assert_eq!(KeyName::parse(raw), Err(expected));
}

#[rstest]
#[case("spec/sw/app/#")]
#[case("/sw/app")]
#[case("system")]
fn display_round_trips(#[case] raw: &str) {
    assert_eq!(name(raw).to_string(), raw);
}

#[test]
fn namespace_swap_keeps_path() {
    let spec = name("spec/sw/app/#");
    let proc = spec.with_namespace(Namespace::Proc);
    assert_eq!(proc.to_string(), "proc/sw/app/#");
    assert!(proc.is_array_wildcard());
    assert_eq!(proc.parent().map(|p| p.to_string()).as_deref(), Some("proc/sw/app"));
}

#[rstest]
#[case(0, "#0")]
#[case(9, "#9")]
#[case(10, "#_10")]
#[case(123, "#__123")]
fn array_names_follow_padding_convention(#[case] index: usize, #[case] expected: &str) {
    assert_eq!(array_index_name(index), expected);
    assert_eq!(parse_array_index(expected), Some(index));
}

#[rstest]
#[case("#")]
#[case("#10")]
#[case("#_1")]
#[case("#_01")]
#[case("x1")]
fn rejects_malformed_array_names(#[case] raw: &str) {
    assert_eq!(parse_array_index(raw), None);
}

#[test]
fn array_names_sort_numerically() {
    let mut names: Vec<String> = (0..120).map(array_index_name).collect();
    names.reverse();
    names.sort();
    let indices: Vec<usize> = names.iter().filter_map(|n| parse_array_index(n)).collect();
    assert_eq!(indices, (0..120).collect::<Vec<_>>());
}

#[test]
fn keyset_keeps_keys_sorted_and_replaces_duplicates() {
    let mut ks = KeySet::new();
    ks.append(Key::from_name(name("user/b")).with_value("1"));
    ks.append(Key::from_name(name("spec/a")));
    ks.append(Key::from_name(name("user/a/x")));
    let replaced = ks.append(Key::from_name(name("user/b")).with_value("2"));

    assert_eq!(replaced.map(|k| k.value().to_owned()).as_deref(), Some("1"));
    let order: Vec<String> = ks.iter().map(|k| k.name().to_string()).collect();
    assert_eq!(order, ["spec/a", "user/a/x", "user/b"]);
    assert_eq!(ks.lookup_str("user/b").map(Key::value), Some("2"));
}

#[test]
fn array_values_returns_direct_elements_in_order() {
    let parent = name("proc/sw/app/files");
    let mut ks: KeySet = (0..12)
        .map(|i| Key::from_name(parent.child(&array_index_name(i))).with_value(i.to_string()))
        .collect();
    ks.append(Key::from_name(parent.clone()).with_value("#_11"));
    ks.append(Key::from_name(parent.child("#0/nested")).with_value("skip"));
    ks.append(Key::from_name(name("proc/sw/app/other")).with_value("skip"));

    let expected: Vec<String> = (0..12).map(|i| i.to_string()).collect();
    assert_eq!(ks.array_values(&parent), expected);
}

#[test]
fn array_values_borrow_only_the_key_set() {
    let ks: KeySet = ["a", "b"]
        .into_iter()
        .enumerate()
        .map(|(i, value)| {
            Key::from_name(name("proc/sw/app/list").child(&array_index_name(i))).with_value(value)
        })
        .collect();
    let values = {
        let parent = name("proc/sw/app/list");
        ks.array_values(&parent)
    };
    assert_eq!(values, ["a", "b"]);
    assert_eq!(ks.below(&name("proc/sw")).count(), 2);
}

#[test]
fn meta_below_lists_only_children() {
    let key = Key::new("spec/sw/app/level")
        .expect("valid key name")
        .with_meta("opt", "#1")
        .with_meta("opt/#0", "a")
        .with_meta("opt/#1", "b")
        .with_meta("optional", "x");
    let children: Vec<&str> = key.meta_below("opt").map(|(name, _)| name).collect();
    assert_eq!(children, ["opt/#0", "opt/#1"]);
}

#[test]
fn keyset_deserialises_from_key_list() {
    let json = r#"[
        {"name": "spec/sw/app/level", "meta": {"opt": "l"}},
        {"name": "proc/sw/app/level", "value": "3"}
    ]"#;
    let ks: KeySet = serde_json::from_str(json).expect("valid key set document");
    assert_eq!(ks.len(), 2);
    assert_eq!(
        ks.lookup_str("spec/sw/app/level").and_then(|k| k.meta("opt")),
        Some("l")
    );
    assert_eq!(ks.lookup_str("proc/sw/app/level").map(Key::value), Some("3"));
}
