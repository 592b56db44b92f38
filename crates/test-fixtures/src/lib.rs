//! Test fixtures for both enkodo front ends.
//!
//! [`models`] derives its impls inline with `#[derive(Enkodo)]`. [`offline`] gets them from the
//! file-level generator, run by this crate's build script and pulled in with `include!`.

#![allow(dead_code)]

// `Partial` and `AllSkipped` leave fields out on purpose.
#[allow(deprecated)]
pub mod models;
pub mod offline;
