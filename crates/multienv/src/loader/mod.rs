//! Dotenv file enumeration, reading, and layered merging.
//!
//! Responsibilities:
//! - Compute the ordered candidate file list for a mode.
//! - Read candidate files, tolerating missing ones.
//! - Merge parsed mappings in list order (later files win) and apply the
//!   result to an environment table unless running dry.
//!
//! Does NOT handle:
//! - The line grammar itself (see parser).
//! - Override/filter policy details (see `env::apply`).
//!
//! Invariants / Assumptions:
//! - Candidate files are read strictly in list order; the order is an
//!   observable contract, not an optimization.
//! - A read failure aborts the load before any table mutation.
//! - Single-threaded use; no locking around the environment table.

mod error;
mod options;

#[cfg(test)]
mod tests;

pub use error::LoadError;
pub use options::LoadOptions;

use std::path::{Path, PathBuf};

use crate::constants::{DOTENV_FILE, LOCAL_SUFFIX, MODE_VAR};
use crate::env::{ApplyOptions, EnvTable, apply};
use crate::parser::{EnvMap, parse};

/// Default candidate file names for `mode`, in merge order.
///
/// Later entries override earlier ones when the same key appears in
/// several files. The list is fixed at four entries; an empty mode yields
/// literal `.env.` names that normally do not exist and merge nothing.
pub fn candidate_files(mode: &str) -> Vec<PathBuf> {
    vec![
        PathBuf::from(DOTENV_FILE),
        PathBuf::from(format!("{DOTENV_FILE}.{mode}")),
        PathBuf::from(format!("{DOTENV_FILE}.{LOCAL_SUFFIX}")),
        PathBuf::from(format!("{DOTENV_FILE}.{mode}.{LOCAL_SUFFIX}")),
    ]
}

/// Read and parse one dotenv file, treating a missing file as empty.
///
/// # Errors
///
/// Returns [`LoadError::Read`] when the file exists but cannot be read;
/// `ErrorKind::NotFound` is the only failure that is silently mapped to
/// an empty mapping.
pub fn read_env_file(path: impl AsRef<Path>) -> Result<EnvMap, LoadError> {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(parse(&text)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(EnvMap::new()),
        Err(err) => Err(LoadError::Read {
            path: path.to_path_buf(),
            source: err,
        }),
    }
}

/// Load the candidate dotenv files and merge them in list order.
///
/// Unless [`LoadOptions::dry`] is set, the merged mapping is applied to
/// `table` under the configured override/filter policy. The merged
/// mapping is returned either way.
///
/// # Errors
///
/// Propagates [`LoadError::Read`] for any candidate file that exists but
/// cannot be read, and [`LoadError::WorkingDir`] when no base directory
/// was supplied and the current working directory is unavailable. Missing
/// candidate files are not errors.
pub fn load(table: &mut dyn EnvTable, options: LoadOptions) -> Result<EnvMap, LoadError> {
    let LoadOptions {
        mode,
        dir,
        files,
        dry,
        override_existing,
        filter,
    } = options;

    let mode = match mode {
        Some(mode) => mode,
        None => table.get(MODE_VAR).unwrap_or_default(),
    };
    let dir = match dir {
        Some(dir) => dir,
        None => std::env::current_dir().map_err(LoadError::WorkingDir)?,
    };
    let files = files.unwrap_or_else(|| candidate_files(&mode));

    let mut merged = EnvMap::new();
    for file in &files {
        let path = dir.join(file);
        let vars = read_env_file(&path)?;
        tracing::debug!(path = %path.display(), keys = vars.len(), "merged dotenv candidate");
        merged.extend(vars);
    }

    if !dry {
        apply(
            table,
            &merged,
            &ApplyOptions {
                override_existing,
                filter,
            },
        );
    }

    Ok(merged)
}
