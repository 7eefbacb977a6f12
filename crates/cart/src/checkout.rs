use serde::{Deserialize, Serialize};

use crate::cart::Cart;

pub const DEFAULT_DELIVERY_FEE: f64 = 1.49;
pub const DEFAULT_VAT_RATE: f64 = 0.10;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CheckoutPricing {
    #[serde(default = "default_delivery_fee")]
    pub delivery_fee: f64,
    #[serde(default = "default_vat_rate")]
    pub vat_rate: f64,
}

impl Default for CheckoutPricing {
    fn default() -> Self {
        Self {
            delivery_fee: DEFAULT_DELIVERY_FEE,
            vat_rate: DEFAULT_VAT_RATE,
        }
    }
}

fn default_delivery_fee() -> f64 {
    DEFAULT_DELIVERY_FEE
}

fn default_vat_rate() -> f64 {
    DEFAULT_VAT_RATE
}

/// Totals shown on the checkout page. VAT applies to the subtotal only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CheckoutSummary {
    pub item_count: u32,
    pub subtotal: f64,
    pub delivery_fee: f64,
    pub vat: f64,
    pub total: f64,
}

impl CheckoutSummary {
    pub fn for_cart(cart: &Cart, pricing: &CheckoutPricing) -> Self {
        if cart.is_empty() {
            return Self {
                item_count: 0,
                subtotal: 0.0,
                delivery_fee: 0.0,
                vat: 0.0,
                total: 0.0,
            };
        }

        let subtotal = cart.subtotal();
        let vat = subtotal * pricing.vat_rate;

        Self {
            item_count: cart.item_count(),
            subtotal,
            delivery_fee: pricing.delivery_fee,
            vat,
            total: subtotal + pricing.delivery_fee + vat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cart_costs_nothing() {
        let summary = CheckoutSummary::for_cart(&Cart::new(), &CheckoutPricing::default());

        assert_eq!(summary.total, 0.0);
        assert_eq!(summary.delivery_fee, 0.0);
        assert_eq!(summary.item_count, 0);
    }

    #[test]
    fn pricing_defaults_fill_missing_fields() {
        let pricing: CheckoutPricing = serde_json::from_str(r#"{"vat_rate": 0.2}"#).unwrap();

        assert_eq!(pricing.delivery_fee, DEFAULT_DELIVERY_FEE);
        assert_eq!(pricing.vat_rate, 0.2);
    }
}
