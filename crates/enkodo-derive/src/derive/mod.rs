//! Derive helpers, each parsing one record and handing it to the shared renderer.

mod enkodo;
mod schema;

pub use enkodo::*;
pub use schema::*;
