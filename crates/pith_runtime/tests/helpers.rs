use std::ffi::OsString;

use pith_runtime::arrays::{new_array, new_array_with, unvlist, vlist};
use pith_runtime::dict::{dict_from_env, dict_from_os_pairs, dict_keys, new_dict};
use pith_runtime::{Random, Runtime, RuntimeConfig};
use pith_text::List;
use proptest::prelude::*;

#[test]
fn arrays_fill_and_generate() {
    assert_eq!(new_array(3, 'x'), vec!['x', 'x', 'x']);
    assert_eq!(new_array_with(4, |i| i * i), vec![0, 1, 4, 9]);
    assert!(new_array::<u8>(0, 1).is_empty());
}

#[test]
fn vlist_and_unvlist_are_inverse() {
    let tail: List<i32> = [9].into_iter().collect();
    let list = vlist(vec![1, 2, 3], &tail);
    assert_eq!(unvlist(&list), vec![1, 2, 3, 9]);
    assert_eq!(unvlist(&vlist(Vec::<i32>::new(), &List::nil())), Vec::<i32>::new());
}

#[test]
fn dict_keeps_only_utf8_entries() {
    #[cfg(unix)]
    let bad = {
        use std::os::unix::ffi::OsStringExt;
        OsString::from_vec(vec![0xFF, 0xFE])
    };
    #[cfg(not(unix))]
    let bad = OsString::from("ok");
    let dict = dict_from_os_pairs([
        (OsString::from("HOME"), OsString::from("/home/a")),
        (OsString::from("BAD"), bad),
        (OsString::from("A"), OsString::from("1")),
    ]);
    assert_eq!(dict.get("HOME").map(String::as_str), Some("/home/a"));
    #[cfg(unix)]
    assert_eq!(dict_keys(&dict), vec!["A", "HOME"]);
    let mut empty = new_dict::<i32>();
    empty.insert("k".into(), 1);
    assert_eq!(dict_keys(&empty), vec!["k"]);
}

#[test]
fn dict_from_env_mirrors_utf8_environment() {
    let dict = dict_from_env();
    let mut expected = 0;
    for (key, value) in std::env::vars_os() {
        if let (Ok(key), Ok(value)) = (key.into_string(), value.into_string()) {
            assert_eq!(dict.get(&key), Some(&value));
            expected += 1;
        }
    }
    assert_eq!(dict.len(), expected);
    assert!(dict.contains_key("CARGO_MANIFEST_DIR"));
}

#[test]
fn seeded_random_is_deterministic() {
    let a = Random::new(42);
    let b = Random::new(42);
    for _ in 0..16 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
    let rt = Runtime::new(RuntimeConfig {
        rng_seed: Some(7),
        ..RuntimeConfig::default()
    });
    let same = Random::new(7);
    assert_eq!(rt.random().next_int(), same.next_int());
}

proptest! {
    #[test]
    fn random_values_stay_in_range(seed in any::<u64>()) {
        let r = Random::new(seed);
        for _ in 0..8 {
            let d = r.next_double();
            prop_assert!((0.0..1.0).contains(&d));
            prop_assert!(r.next_int() >= 0);
        }
    }
}
