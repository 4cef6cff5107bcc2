use fhub_kernel::{InputId, SAFE_ALPHABET, safe_nanoid};
use std::collections::HashSet;

#[test]
fn generates_expected_length_and_charset() {
    let id = safe_nanoid!();
    assert_eq!(id.len(), 12);

    for ch in id.chars() {
        assert!(SAFE_ALPHABET.contains(&ch), "unexpected character in nanoid: {ch}");
    }
}

#[test]
fn custom_length() {
    let id = safe_nanoid!(20);
    assert_eq!(id.len(), 20);
}

#[test]
fn input_ids_are_non_empty_and_distinct() {
    let ids: HashSet<InputId> = (0..1_000).map(|_| InputId::generate()).collect();
    assert_eq!(ids.len(), 1_000);
    assert!(ids.iter().all(|id| id.len() == 12));
}

#[test]
fn input_id_displays_its_text() {
    let id = InputId::generate();
    assert_eq!(id.to_string(), id.as_str());
    assert!(id == id.as_str());
}
