//! Guards on key-value maps.
//!
//! Implemented for `HashMap` and `BTreeMap`. The forbidden-key guards fail
//! with [`GuardKind::KeyConflict`]; a *missing* required key is a plain
//! [`GuardKind::Invalid`] failure, since nothing conflicts in that case.

use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};

use vouch_types::{Check, GuardKind, GuardResult};

/// Key-presence checks on maps.
pub trait MapGuards<K: Debug, V>: Sized {
    /// Whether the map contains `key`. The one method map types implement;
    /// every guard below is derived from it.
    fn has_key(&self, key: &K) -> bool;

    /// Fail with [`GuardKind::Invalid`] when `key` is absent.
    fn must_have_key<'a>(self, key: &K, check: impl Into<Check<'a>>) -> GuardResult<Self> {
        if self.has_key(key) {
            return Ok(self);
        }
        Err(check.into().fail(GuardKind::Invalid, |subject| {
            format!("{subject} must contain the key {key:?}, but it does not.")
        }))
    }

    /// Fail with [`GuardKind::KeyConflict`] when `key` is present.
    fn must_not_have_key<'a>(self, key: &K, check: impl Into<Check<'a>>) -> GuardResult<Self> {
        if !self.has_key(key) {
            return Ok(self);
        }
        Err(check.into().fail(GuardKind::KeyConflict, |subject| {
            format!("{subject} must not contain the key {key:?}, but it does.")
        }))
    }

    /// Fail with [`GuardKind::KeyConflict`] when any of `keys` is present.
    /// The message lists every conflicting key.
    fn must_not_have_keys<'a>(self, keys: &[K], check: impl Into<Check<'a>>) -> GuardResult<Self> {
        let conflicting: Vec<&K> = keys.iter().filter(|key| self.has_key(key)).collect();
        if conflicting.is_empty() {
            return Ok(self);
        }
        Err(check.into().fail(GuardKind::KeyConflict, |subject| {
            format!("{subject} must not contain any of the following keys: {conflicting:?}, but it does.")
        }))
    }
}

impl<K: Eq + Hash + Debug, V, S: BuildHasher> MapGuards<K, V> for HashMap<K, V, S> {
    fn has_key(&self, key: &K) -> bool {
        self.contains_key(key)
    }
}

impl<K: Ord + Debug, V> MapGuards<K, V> for BTreeMap<K, V> {
    fn has_key(&self, key: &K) -> bool {
        self.contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vouch_types::{Check, GuardError};

    fn sample() -> HashMap<String, String> {
        let mut map = HashMap::new();
        map.insert("First Key".to_string(), "Foo".to_string());
        map.insert("Second Key".to_string(), "Bar".to_string());
        map
    }

    #[test]
    fn forbidden_key_present_fails_key_conflict() {
        let err = sample()
            .must_not_have_keys(&["First Key".to_string()], "dictionary")
            .unwrap_err();
        assert_eq!(err.kind(), GuardKind::KeyConflict);
        assert!(err.message().contains("\"First Key\""));
        assert!(err.message().starts_with("dictionary must not contain any of the following keys:"));
    }

    #[test]
    fn absent_forbidden_keys_pass_the_map_through() {
        let map = sample()
            .must_not_have_keys(&["Other Key".to_string()], "dictionary")
            .unwrap();
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn only_conflicting_keys_are_listed() {
        let forbidden = [
            "Second Key".to_string(),
            "Other Key".to_string(),
        ];
        let err = sample().must_not_have_keys(&forbidden, "dictionary").unwrap_err();
        assert!(err.message().contains("\"Second Key\""));
        assert!(!err.message().contains("\"Other Key\""));
    }

    #[test]
    fn single_key_guards() {
        let map = sample().must_have_key(&"First Key".to_string(), "dictionary").unwrap();
        let err = map
            .must_not_have_key(&"First Key".to_string(), "dictionary")
            .unwrap_err();
        assert_eq!(err.kind(), GuardKind::KeyConflict);
    }

    #[test]
    fn missing_required_key_is_invalid_not_conflict() {
        let err = sample().must_have_key(&"Missing".to_string(), "dictionary").unwrap_err();
        assert_eq!(err.kind(), GuardKind::Invalid);
    }

    #[test]
    fn btree_maps_are_supported() {
        let mut map = BTreeMap::new();
        map.insert('a', 1);
        assert!(map.clone().must_not_have_key(&'b', Check::default()).is_ok());
        assert!(map.must_not_have_key(&'a', Check::default()).is_err());
    }

    #[test]
    fn custom_message_and_error_overrides() {
        let err = sample()
            .must_not_have_keys(
                &["First Key".to_string()],
                Check::default().with_message("Thou shall not have the keys!"),
            )
            .unwrap_err();
        assert_eq!(err.message(), "Thou shall not have the keys!");
        assert_eq!(err.kind(), GuardKind::KeyConflict);

        let custom = GuardError::custom("mine");
        let err = sample()
            .must_not_have_keys(
                &["First Key".to_string()],
                Check::default().with_error(custom.clone()),
            )
            .unwrap_err();
        assert_eq!(err, custom);
    }
}
