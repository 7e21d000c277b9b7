//! Cross-module tests.
//!
//! Acceptance flows drive the whole interaction core through the key
//! handler; property tests check the invariants the core promises under
//! arbitrary input.

mod acceptance;
