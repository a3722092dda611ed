//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! route table file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RouteTableConfig<T> (validated)
//!     → RouteTable::from_config (routes registered in file order)
//! ```
//!
//! # Design Decisions
//! - Route values deserialize straight into the table's result type
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_table, parse_config, ConfigError};
pub use schema::RouteConfig;
pub use schema::RouteTableConfig;
pub use validation::ValidationError;
