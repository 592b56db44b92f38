//! Renders parsed records into `Marshal` / `Unmarshal` impls.
//!
//! Rendering runs in two phases per field: [`resolve`] decides once whether every node of the
//! field's type tree can be expressed, then [`encode`] and [`decode`] walk the same resolved tree so
//! both directions visit fields and elements in identical order.

pub mod converter;
pub mod decode;
pub mod encode;
pub mod record;
pub mod registry;
pub mod resolve;
pub mod scope;
pub mod unit;
pub mod warning;
