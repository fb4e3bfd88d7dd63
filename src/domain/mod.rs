pub mod customer;

pub use customer::Customer;

// Re-export DomainError from support for convenience
pub use crate::support::errors::{DomainError, DomainResult};
