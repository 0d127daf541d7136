//! Cart domain events.

use serde::{Deserialize, Serialize};

use crate::aggregate::DomainEvent;

use super::{CartId, Price, ProductId};

/// Events that can occur on a cart aggregate.
///
/// Events are immutable facts constructed by an external collaborator after
/// a command was accepted; applying one never fails validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum CartEvent {
    /// A product was added to the cart.
    ProductAddedToCart(ProductAddedToCartData),

    /// A product was removed from the cart.
    ProductRemovedFromCart(ProductRemovedFromCartData),

    /// The quantity of a product was set to a new absolute amount.
    AmountOfProductChanged(AmountOfProductChangedData),

    /// The cached total price was recalculated from the current items.
    TotalPriceCalculated,
}

impl DomainEvent for CartEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CartEvent::ProductAddedToCart(_) => "ProductAddedToCart",
            CartEvent::ProductRemovedFromCart(_) => "ProductRemovedFromCart",
            CartEvent::AmountOfProductChanged(_) => "AmountOfProductChanged",
            CartEvent::TotalPriceCalculated => "TotalPriceCalculated",
        }
    }
}

/// Data for ProductAddedToCart event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductAddedToCartData {
    /// The cart the product was added to.
    pub cart_id: CartId,

    /// The product that was added.
    pub product_id: ProductId,

    /// Unit price at the time of adding.
    ///
    /// Ignored when the product is already in the cart; the first insertion
    /// fixes the unit price.
    pub price: Price,
}

/// Data for ProductRemovedFromCart event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRemovedFromCartData {
    /// The product that was removed.
    pub product_id: ProductId,
}

/// Data for AmountOfProductChanged event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmountOfProductChangedData {
    /// The product whose quantity was changed.
    pub product_id: ProductId,

    /// New absolute quantity (not an increment).
    pub amount: u32,
}

// Convenience constructors for events
impl CartEvent {
    /// Creates a ProductAddedToCart event.
    pub fn product_added(cart_id: CartId, product_id: ProductId, price: Price) -> Self {
        CartEvent::ProductAddedToCart(ProductAddedToCartData {
            cart_id,
            product_id,
            price,
        })
    }

    /// Creates a ProductRemovedFromCart event.
    pub fn product_removed(product_id: ProductId) -> Self {
        CartEvent::ProductRemovedFromCart(ProductRemovedFromCartData { product_id })
    }

    /// Creates an AmountOfProductChanged event.
    pub fn amount_changed(product_id: ProductId, amount: u32) -> Self {
        CartEvent::AmountOfProductChanged(AmountOfProductChangedData { product_id, amount })
    }

    /// Creates a TotalPriceCalculated event.
    pub fn total_price_calculated() -> Self {
        CartEvent::TotalPriceCalculated
    }
}
