//! Cart type conversion functions.

use tracing::warn;

use crate::shopify::types::CartSummary;

use super::super::queries::cart_quantity;

pub fn convert_cart_summary(cart: cart_quantity::CartQuantityCart) -> CartSummary {
    let total_quantity = u32::try_from(cart.total_quantity).unwrap_or_else(|_| {
        warn!(
            total_quantity = cart.total_quantity,
            "Cart quantity out of range, treating as empty"
        );
        0
    });

    CartSummary { total_quantity }
}
