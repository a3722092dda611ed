//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing + config produce:
//!     → tracing events (registration, rejected routes, lookups, reloads)
//!
//! Consumers:
//!     → logging.rs (fmt subscriber with env filter, stderr)
//! ```

pub mod logging;
