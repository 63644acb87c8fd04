//! orb-api: read-only state/county/locality index lookups over SQLite, answered in a uniform envelope.

pub mod config;
pub mod error;
pub mod model;
pub mod response;
pub mod state;
pub mod store;
pub mod service;
pub mod handlers;
pub mod routes;

pub use config::{AppConfig, DatastoreConfig};
pub use error::{AppError, ConfigError};
pub use model::{County, IndexRecord, Locality, State};
pub use response::{build_envelope, Envelope, EnvelopeStatus, Outcome};
pub use state::AppState;
pub use store::{create_schema, ensure_datastore_exists, ConnectionProvider};
pub use routes::{app_router, common_routes, common_routes_with_ready, lookup_routes};
pub use service::LookupRepository;
