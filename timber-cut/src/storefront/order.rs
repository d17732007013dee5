use serde::{Deserialize, Serialize};

use crate::storefront::{Cart, CartItem};

/// Flat shipping fee charged on any non-empty order
const SHIPPING_FEE: f64 = 18.0;
const TAX_RATE: f64 = 0.07;

/// Totals of a checkout, serializable as the order snapshot sent to the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub items: Vec<CartItem>,
    pub subtotal: f64,
    pub shipping: f64,
    pub tax: f64,
    pub total: f64,
    pub currency: String,
}

impl OrderSummary {
    pub fn from_cart(cart: &Cart) -> Self {
        let subtotal = cart.total();
        let (shipping, tax) = match subtotal > 0.0 {
            true => (SHIPPING_FEE, (subtotal * TAX_RATE).round()),
            false => (0.0, 0.0),
        };
        OrderSummary {
            items: cart.items().to_vec(),
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
            currency: "USD".to_string(),
        }
    }
}
