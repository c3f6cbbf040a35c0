//! Layered dotenv loading for multiple runtime modes.
//!
//! This crate reads key/value pairs from a fixed stack of dotenv files —
//! `.env`, `.env.<mode>`, `.env.local`, `.env.<mode>.local` — merges them
//! with later files overriding earlier ones, and applies the result to an
//! environment table. Existing entries win unless override is requested;
//! missing files contribute nothing.
//!
//! The table is an explicit parameter ([`EnvTable`]): pass [`ProcessEnv`]
//! to mutate the real process environment, or an [`EnvMap`] to load into
//! memory. Loading is synchronous and single-threaded; the process
//! environment is not locked.
//!
//! ```no_run
//! use multienv::{LoadOptions, ProcessEnv, load};
//!
//! let vars = load(&mut ProcessEnv, LoadOptions::new().with_mode("development"))?;
//! # Ok::<(), multienv::LoadError>(())
//! ```

mod constants;
mod env;
mod loader;
mod parser;

pub use constants::{DOTENV_FILE, MODE_VAR};
pub use env::{ApplyOptions, EnvTable, KeyFilter, ProcessEnv, apply};
pub use loader::{LoadError, LoadOptions, candidate_files, load, read_env_file};
pub use parser::{EnvMap, parse};
