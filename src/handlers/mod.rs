//! HTTP handlers for the state/county lookup routes.

pub mod lookup;
pub use lookup::*;
