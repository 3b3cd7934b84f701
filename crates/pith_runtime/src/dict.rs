//! String-keyed dictionaries.

use std::ffi::OsString;

use ahash::RandomState;
use hashbrown::HashMap;

pub type Dict<T> = HashMap<String, T, RandomState>;

pub fn new_dict<T>() -> Dict<T> {
    Dict::with_hasher(RandomState::new())
}

/// Keys of `dict`, sorted so callers see a stable order.
pub fn dict_keys<T>(dict: &Dict<T>) -> Vec<String> {
    let mut keys: Vec<String> = dict.keys().cloned().collect();
    keys.sort_unstable();
    keys
}

/// Build a dictionary from OS string pairs, skipping entries whose key or
/// value is not valid UTF-8.
pub fn dict_from_os_pairs(pairs: impl IntoIterator<Item = (OsString, OsString)>) -> Dict<String> {
    let mut dict = new_dict();
    for (key, value) in pairs {
        if let (Ok(key), Ok(value)) = (key.into_string(), value.into_string()) {
            dict.insert(key, value);
        }
    }
    dict
}

/// The process environment as a dictionary.
pub fn dict_from_env() -> Dict<String> {
    dict_from_os_pairs(std::env::vars_os())
}
