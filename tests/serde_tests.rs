#![cfg(feature = "serde")]

//! Integration tests for serde support of descriptions.
//!
//! A description serialises as a plain sequence of tags, so it can be stored
//! alongside the edits it keys.

use std::collections::BTreeMap;

use reach::compose;
use reach::containers::{element_at, second};
use reach::optics::{Description, description, on_some};
use rstest::rstest;

#[rstest]
fn test_description_serialises_as_tag_sequence() {
    let optic = compose!(second::<u8, Vec<Option<u8>>>(), element_at(2), on_some());
    let json = serde_json::to_string(&description(&optic)).unwrap();
    assert_eq!(json, r#"["second","element 2","some"]"#);
}

#[rstest]
fn test_description_json_roundtrip() {
    let original = description(&compose!(second::<u8, Vec<u8>>(), element_at(0)));
    let json = serde_json::to_string(&original).unwrap();
    let restored: Description = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, original);
}

#[rstest]
fn test_empty_description_roundtrip() {
    let restored: Description = serde_json::from_str("[]").unwrap();
    assert!(restored.is_empty());
}

#[rstest]
fn test_descriptions_key_serialised_edit_log() {
    let mut edits: BTreeMap<String, i32> = BTreeMap::new();
    edits.insert(description(&second::<u8, i32>()).key(), 5);

    let json = serde_json::to_string(&edits).unwrap();
    assert_eq!(json, r#"{"second":5}"#);
}
