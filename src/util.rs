// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Small string and map helpers shared across the operator.

use std::collections::BTreeMap;

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Check whether a slice contains the given string.
pub fn contains_string(slice: &[String], s: &str) -> bool {
    slice.iter().any(|item| item == s)
}

/// Return a copy of the slice with every occurrence of `s` removed.
pub fn remove_string(slice: &[String], s: &str) -> Vec<String> {
    slice.iter().filter(|item| *item != s).cloned().collect()
}

/// Generate a random alphanumeric password of the given length.
pub fn generate_passwd(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Serialize a map as `k=v,k=v` with keys in alphabetical order.
pub fn map_to_key_value_pairs(m: &BTreeMap<String, String>) -> String {
    m.iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join(",")
}

/// Return `value` unless it is empty, falling back to `default_value`.
pub fn value_or_default(value: &str, default_value: &str) -> String {
    if value.is_empty() {
        default_value.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_slice(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_contains_string() {
        let slice = make_slice(&["alpha", "beta"]);

        assert!(contains_string(&slice, "alpha"));
        assert!(!contains_string(&slice, "gamma"));
        assert!(!contains_string(&[], "alpha"));
    }

    #[test]
    fn test_remove_string() {
        let slice = make_slice(&["alpha", "beta", "alpha"]);

        assert_eq!(remove_string(&slice, "alpha"), make_slice(&["beta"]));
        assert_eq!(remove_string(&slice, "gamma"), slice);
    }

    #[test]
    fn test_generate_passwd_length_and_charset() {
        let passwd = generate_passwd(12);

        assert_eq!(passwd.len(), 12);
        assert!(passwd.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generate_passwd_empty() {
        assert_eq!(generate_passwd(0), "");
    }

    #[test]
    fn test_map_to_key_value_pairs_sorted() {
        let m = BTreeMap::from([
            ("b".to_string(), "2".to_string()),
            ("a".to_string(), "1".to_string()),
        ]);

        assert_eq!(map_to_key_value_pairs(&m), "a=1,b=2");
    }

    #[test]
    fn test_map_to_key_value_pairs_empty() {
        assert_eq!(map_to_key_value_pairs(&BTreeMap::new()), "");
    }

    #[test]
    fn test_value_or_default() {
        assert_eq!(value_or_default("set", "fallback"), "set");
        assert_eq!(value_or_default("", "fallback"), "fallback");
    }
}
