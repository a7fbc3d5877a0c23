//! Composite calculators: sequential conditional adjustments over numbers.
//!
//! Application order is part of each contract: additive surcharges first,
//! multiplicative adjustments last. Invalid domain input short-circuits
//! before any arithmetic.

use serde::{Deserialize, Serialize};

use crate::errors::QuoteError;

/// [`calculate_shipping_with`] as a standard (non-express) quote.
pub fn calculate_shipping(weight_kg: f64, distance_km: f64) -> Result<f64, QuoteError> {
    calculate_shipping_with(weight_kg, distance_km, false)
}

/// Quote a shipping cost: flat base, weight surcharge above 10 kg, distance
/// surcharge above 100 km, then express doubling applied last.
///
/// Non-positive weight or distance returns the invalid-input error before
/// any calculation happens.
pub fn calculate_shipping_with(
    weight_kg: f64,
    distance_km: f64,
    is_express: bool,
) -> Result<f64, QuoteError> {
    if weight_kg <= 0.0 || distance_km <= 0.0 {
        return Err(QuoteError::NonPositiveInput {
            weight_kg,
            distance_km,
        });
    }

    let mut cost = 5.0;

    if weight_kg > 10.0 {
        cost += (weight_kg - 10.0) * 1.5;
    }

    if distance_km > 100.0 {
        cost += (distance_km - 100.0) * 0.1;
    }

    // Doubling applies to the surcharged total, never the base alone.
    if is_express {
        cost *= 2.0;
    }

    Ok(round2(cost))
}

/// Flat-rate tax: one rate picked by income band, applied to the whole
/// amount (no marginal brackets).
pub fn calculate_tax_compact(income: f64) -> f64 {
    income
        * (if income > 50_000.0 {
            0.4
        } else if income > 12_500.0 {
            0.2
        } else {
            0.0
        })
}

/// Adjustments for [`calculate_final_price`].
///
/// Defaults: no discount, 20% tax, non-member.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingOptions {
    pub discount_pct: f64,
    pub tax_rate: f64,
    pub is_member: bool,
}

impl Default for PricingOptions {
    fn default() -> Self {
        Self {
            discount_pct: 0.0,
            tax_rate: 0.2,
            is_member: false,
        }
    }
}

/// Discounts come off first (members get an extra 5%), then tax goes on.
pub fn calculate_final_price(base_price: f64, options: PricingOptions) -> f64 {
    let member_extra = if options.is_member { 0.05 } else { 0.0 };
    round2(
        base_price * (1.0 - options.discount_pct - member_extra) * (1.0 + options.tax_rate),
    )
}

/// Round to two decimal places, half away from zero.
fn round2(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
