pub mod fallback;
pub mod health;
pub mod metrics;
pub mod troubleshooting;

pub use fallback::not_found;
pub use health::{health_check, readiness_check};
pub use self::metrics::metrics;
pub use troubleshooting::{get_troubleshooting, list_sections, post_troubleshooting};
