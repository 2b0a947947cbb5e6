pub mod database;
pub mod metrics;

pub use database::LocationDb;
pub use metrics::{get_metrics, init_metrics, record_location_created};
