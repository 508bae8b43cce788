//! Shared test fixtures for OTForge crates.
//!
//! This crate provides data and pure functions for testing. It depends only
//! on `otforge-core` so every other crate can use it as a dev-dependency.
//!
//! - [`ercs`] - constraint lists and ERCs built from compact strings
//! - [`syllable`] - a toy coda system with a table-driven Gen
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! otforge-test = { workspace = true }
//! ```
//!
//! ```
//! use otforge_test::ercs::{ercs, markedness_constraints};
//!
//! let constraints = markedness_constraints(2);
//! let list = ercs(&["WL", "eW"]);
//! assert_eq!(list[0].len(), constraints.len());
//! ```

pub mod ercs;
pub mod syllable;

pub use ercs::{constraints, ercs, markedness_constraints};
pub use syllable::{coda_candidate, coda_candidates, coda_constraints};
