//! Customer aggregate
//!
//! Holds the customer's discount rate and the discount calculation.

pub mod model;

pub use model::Customer;
