//! Customer domain entity

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

/// Unvalidated wire shape of a customer
#[derive(Debug, Deserialize)]
struct CustomerRecord {
    #[serde(default)]
    discount_rate: Option<f64>,
}

/// Customer with an optional discount rate
///
/// The rate is either unset (no discount) or a number >= 0. Unset and
/// `0.0` are distinct states but both leave amounts unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CustomerRecord")]
pub struct Customer {
    discount_rate: Option<f64>,
}

impl TryFrom<CustomerRecord> for Customer {
    type Error = DomainError;

    fn try_from(record: CustomerRecord) -> DomainResult<Self> {
        Self::with_discount_rate(record.discount_rate)
    }
}

impl Customer {
    /// Create a customer with no discount rate set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a customer with the given rate, validated like
    /// [`Customer::set_discount_rate`]
    pub fn with_discount_rate(rate: Option<f64>) -> DomainResult<Self> {
        let mut customer = Self::new();
        customer.set_discount_rate(rate)?;
        Ok(customer)
    }

    pub fn discount_rate(&self) -> Option<f64> {
        self.discount_rate
    }

    /// Replace the discount rate
    ///
    /// # Errors
    /// [`DomainError::InvalidDiscountRate`] if `rate` is negative or NaN.
    /// The stored rate is left untouched in that case.
    pub fn set_discount_rate(&mut self, rate: Option<f64>) -> DomainResult<()> {
        if let Some(rate) = rate {
            if rate.is_nan() || rate < 0.0 {
                return Err(DomainError::InvalidDiscountRate { rate });
            }
        }
        self.discount_rate = rate;
        Ok(())
    }

    /// Apply the discount rate to `amount`
    ///
    /// Returns `amount` unchanged when no rate is set or the rate is zero,
    /// otherwise `amount - rate * amount`.
    pub fn apply_discount(&self, amount: f64) -> DomainResult<f64> {
        let rate = match self.discount_rate {
            Some(rate) if rate != 0.0 && !rate.is_nan() => rate,
            _ => return Ok(amount),
        };

        // Only reachable if the field was written without the setter
        if rate <= 0.0 {
            return Err(DomainError::InvalidDiscountRate { rate });
        }

        Ok(amount - rate * amount)
    }
}

// ── Tests ──────────────────────────────────────────────────────
