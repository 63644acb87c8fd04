//! LookupRepository: read-only queries over the state/county/locality/index tables.

mod lookup;
pub use lookup::LookupRepository;
