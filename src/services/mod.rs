pub mod health;
pub mod metrics;

pub use health::{health_routes, HealthResponse, HealthState, HealthStatus};
pub use metrics::Metrics;
