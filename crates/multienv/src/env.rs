//! Environment table access and application policy.
//!
//! Responsibilities:
//! - Define the `EnvTable` seam the loader writes through.
//! - Provide the process-backed implementation (`ProcessEnv`) and an
//!   in-memory implementation (`EnvMap`) for tests and dry composition.
//! - Commit a merged mapping into a table under an override policy.
//!
//! Does NOT handle:
//! - Reading or merging dotenv files (see loader).
//!
//! Invariants:
//! - Entries are only added or overwritten, never removed.
//! - With `override_existing` false, a key already present in the table
//!   keeps its value.
//! - Keys rejected by the filter are never written.

use crate::parser::EnvMap;

/// Predicate deciding whether a key may be written to the table.
pub type KeyFilter = Box<dyn Fn(&str) -> bool>;

/// Mutable string-to-string environment table.
///
/// The loader takes a table as an explicit parameter instead of touching
/// `std::env` directly, so callers can load into an in-memory map without
/// mutating real process state.
pub trait EnvTable {
    /// Current value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Whether `key` currently has an entry.
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Set `key` to `value`, replacing any existing entry.
    fn set(&mut self, key: &str, value: &str);
}

/// [`EnvTable`] backed by the process-wide environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvTable for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn contains(&self, key: &str) -> bool {
        std::env::var_os(key).is_some()
    }

    fn set(&mut self, key: &str, value: &str) {
        // Process-global mutation; callers are expected to load from a
        // single thread (see crate docs).
        unsafe { std::env::set_var(key, value) }
    }
}

impl EnvTable for EnvMap {
    fn get(&self, key: &str) -> Option<String> {
        EnvMap::get(self, key).cloned()
    }

    fn contains(&self, key: &str) -> bool {
        self.contains_key(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        self.insert(key.to_owned(), value.to_owned());
    }
}

/// Policy for committing a merged mapping into an environment table.
#[derive(Default)]
pub struct ApplyOptions {
    /// Replace values for keys the table already has.
    pub override_existing: bool,
    /// Only keys accepted by this predicate are written; `None` accepts all.
    pub filter: Option<KeyFilter>,
}

/// Write `vars` into `table` under the given policy.
///
/// Existing entries win unless [`ApplyOptions::override_existing`] is set.
/// Re-applying the same mapping with `override_existing` false is a no-op
/// once the first application has run.
pub fn apply(table: &mut dyn EnvTable, vars: &EnvMap, options: &ApplyOptions) {
    for (key, value) in vars {
        if let Some(filter) = &options.filter {
            if !filter(key) {
                continue;
            }
        }
        if options.override_existing || !table.contains(key) {
            table.set(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn sample_vars() -> EnvMap {
        EnvMap::from([
            ("TEST1".to_owned(), "TEST1".to_owned()),
            ("TEST2".to_owned(), "TEST2".to_owned()),
            ("TEST3".to_owned(), "modified".to_owned()),
        ])
    }

    #[test]
    fn test_apply_without_override_keeps_existing_values() {
        let mut table = EnvMap::from([("TEST3".to_owned(), "original".to_owned())]);

        apply(&mut table, &sample_vars(), &ApplyOptions::default());

        assert_eq!(EnvTable::get(&table, "TEST1").as_deref(), Some("TEST1"));
        assert_eq!(EnvTable::get(&table, "TEST2").as_deref(), Some("TEST2"));
        assert_eq!(EnvTable::get(&table, "TEST3").as_deref(), Some("original"));
    }

    #[test]
    fn test_apply_with_override_replaces_existing_values() {
        let mut table = EnvMap::from([("TEST3".to_owned(), "original".to_owned())]);

        apply(
            &mut table,
            &sample_vars(),
            &ApplyOptions {
                override_existing: true,
                ..Default::default()
            },
        );

        assert_eq!(EnvTable::get(&table, "TEST3").as_deref(), Some("modified"));
    }

    #[test]
    fn test_apply_respects_filter() {
        let mut table = EnvMap::new();

        apply(
            &mut table,
            &sample_vars(),
            &ApplyOptions {
                override_existing: false,
                filter: Some(Box::new(|key| key != "TEST2")),
            },
        );

        assert!(table.contains("TEST1"));
        assert!(!table.contains("TEST2"));
        assert!(table.contains("TEST3"));
    }

    #[test]
    fn test_apply_is_idempotent_without_override() {
        let mut table = EnvMap::new();
        let vars = sample_vars();

        apply(&mut table, &vars, &ApplyOptions::default());
        let after_first = table.clone();
        apply(&mut table, &vars, &ApplyOptions::default());

        assert_eq!(table, after_first);
    }

    #[test]
    #[serial]
    fn test_process_env_reads_and_writes_real_environment() {
        let key = "_MULTIENV_TEST_PROCESS_ENV";

        temp_env::with_var_unset(key, || {
            let mut table = ProcessEnv;
            assert!(!table.contains(key));
            assert_eq!(table.get(key), None);

            table.set(key, "value");
            assert!(table.contains(key));
            assert_eq!(table.get(key).as_deref(), Some("value"));

            unsafe {
                std::env::remove_var(key);
            }
        });
    }
}
