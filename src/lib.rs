//! # Customer Pricing
//!
//! Customer discount calculation.
//!
//! - **domain**: the `Customer` entity and its discount rules
//! - **support**: error types shared across layers
//! - **config**: TOML configuration
//! - **logging**: tracing subscriber setup

pub mod config;
pub mod domain;
pub mod logging;
pub mod support;

pub use config::{default_config_path, AppConfig};
pub use domain::{Customer, DomainError, DomainResult};
pub use support::errors::{AppError, ConfigError};
