//! Centralized constants for the multienv crate.

/// Environment variable consulted for the default mode when no explicit
/// mode is supplied to the loader.
pub const MODE_VAR: &str = "MULTIENV_MODE";

/// Base dotenv file name, always first in the candidate list.
pub const DOTENV_FILE: &str = ".env";

/// Suffix marking machine-local override files, loaded after their
/// shared counterparts.
pub const LOCAL_SUFFIX: &str = "local";
