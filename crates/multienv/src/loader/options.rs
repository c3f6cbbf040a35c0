//! Load options builder.
//!
//! Responsibilities:
//! - Hold the optional knobs for a single load call: mode, base directory,
//!   candidate file list, dry run, override policy, key filter.
//! - Resolve defaults that depend on the injected environment table
//!   (the mode signal) at load time, not construction time.
//!
//! Does NOT handle:
//! - File access or merging (see `loader::load`).
//!
//! Invariants:
//! - Every field is optional; `LoadOptions::default()` describes the
//!   standard four-file load against the current working directory.

use std::path::PathBuf;

use crate::env::KeyFilter;

/// Options for a single [`load`](crate::load) call.
///
/// Built with consuming `with_*` methods:
///
/// ```
/// use multienv::LoadOptions;
///
/// let options = LoadOptions::new()
///     .with_mode("production")
///     .dry(true);
/// ```
#[derive(Default)]
pub struct LoadOptions {
    pub(crate) mode: Option<String>,
    pub(crate) dir: Option<PathBuf>,
    pub(crate) files: Option<Vec<PathBuf>>,
    pub(crate) dry: bool,
    pub(crate) override_existing: bool,
    pub(crate) filter: Option<KeyFilter>,
}

impl LoadOptions {
    /// Create options with every field at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the mode used to derive the candidate file names. When unset,
    /// the mode is read from the environment table's `MULTIENV_MODE`
    /// entry, falling back to the empty string.
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    /// Set the base directory candidate files are resolved against.
    /// Defaults to the process's current working directory.
    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    /// Replace the candidate file list entirely. List order is the merge
    /// order: later files override earlier ones.
    pub fn with_files(mut self, files: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        self.files = Some(files.into_iter().map(Into::into).collect());
        self
    }

    /// When true, return the merged mapping without touching the
    /// environment table. Defaults to false.
    pub fn dry(mut self, dry: bool) -> Self {
        self.dry = dry;
        self
    }

    /// When true, merged values replace entries the table already has.
    /// Defaults to false (existing entries win).
    pub fn override_existing(mut self, override_existing: bool) -> Self {
        self.override_existing = override_existing;
        self
    }

    /// Only apply keys accepted by `filter` to the environment table.
    /// The filter does not affect the returned mapping.
    pub fn with_filter(mut self, filter: impl Fn(&str) -> bool + 'static) -> Self {
        self.filter = Some(Box::new(filter));
        self
    }
}
