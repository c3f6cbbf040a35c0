//! Unit tests for the loader.
//!
//! Responsibilities:
//! - Test missing-file tolerance and error propagation of the safe reader.
//! - Test candidate list order, layered merge precedence, dry mode, and
//!   the mode signal default.
//!
//! Invariants:
//! - Tests load into in-memory tables; nothing here mutates the real
//!   process environment.
//! - Fixture files live in temporary directories cleaned up via `tempfile`.
