//! Cart aggregate implementation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aggregate::Aggregate;
use crate::error::DomainError;

use super::{
    CartCommand, CartEvent, CartId, CartItem, Price, ProductId,
    events::{AmountOfProductChangedData, ProductAddedToCartData, ProductRemovedFromCartData},
};

/// Cart aggregate root.
///
/// Owns the per-product line items and a cached total price, both projected
/// from the event stream. The total is recomputed only when a
/// `TotalPriceCalculated` event is applied and may be stale in between; that
/// staleness is part of the contract, not an accident.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    /// Unique cart identifier.
    ///
    /// Overwritten by every `ProductAddedToCart` event with the cart id the
    /// event carries.
    id: CartId,

    /// Items in the cart, keyed by product ID.
    items: HashMap<ProductId, CartItem>,

    /// Cached total, valid as of the last `TotalPriceCalculated` event.
    total_price: Price,
}

impl Cart {
    /// Creates an empty cart with the given identifier.
    pub fn new(id: CartId) -> Self {
        Self {
            id,
            items: HashMap::new(),
            total_price: Price::zero(),
        }
    }
}

impl Aggregate for Cart {
    type Id = CartId;
    type Command = CartCommand;
    type Event = CartEvent;
    type Error = DomainError;

    fn aggregate_type() -> &'static str {
        "Cart"
    }

    fn id(&self) -> CartId {
        self.id
    }

    fn handle(&self, command: &CartCommand) -> Result<CartId, DomainError> {
        match command {
            CartCommand::AddProductToCart(cmd) => {
                if cmd.price <= 0 {
                    return Err(DomainError::AmountMustBePositive { amount: cmd.price });
                }
                Ok(self.id)
            }
            CartCommand::ChangeAmountOfProduct(cmd) => {
                if cmd.amount <= 0 {
                    return Err(DomainError::AmountMustBePositive { amount: cmd.amount });
                }
                Ok(self.id)
            }
        }
    }

    fn apply(&mut self, event: CartEvent) {
        match event {
            CartEvent::ProductAddedToCart(data) => self.apply_product_added(data),
            CartEvent::ProductRemovedFromCart(data) => self.apply_product_removed(data),
            CartEvent::AmountOfProductChanged(data) => self.apply_amount_changed(data),
            CartEvent::TotalPriceCalculated => self.apply_total_price_calculated(),
        }
    }
}

// Query methods
impl Cart {
    /// Returns all items in the cart.
    pub fn items(&self) -> impl Iterator<Item = &CartItem> {
        self.items.values()
    }

    /// Returns an item by product ID.
    pub fn get_item(&self, product_id: &ProductId) -> Option<&CartItem> {
        self.items.get(product_id)
    }

    /// Looks up an item by product ID, failing with `ProductNotInCart`.
    ///
    /// The not-found signal is recoverable; event application swallows it,
    /// and callers that need an explicit error can surface it instead.
    pub fn find_item(&self, product_id: &ProductId) -> Result<&CartItem, DomainError> {
        self.items.get(product_id).ok_or(DomainError::ProductNotInCart {
            product_id: *product_id,
        })
    }

    /// Returns the number of distinct products in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the cached total price.
    ///
    /// Current only as of the last applied `TotalPriceCalculated` event.
    pub fn total_price(&self) -> Price {
        self.total_price
    }

    /// Returns true if the cart has items.
    pub fn has_items(&self) -> bool {
        !self.items.is_empty()
    }
}

// Apply event helpers
impl Cart {
    fn find_item_mut(&mut self, product_id: &ProductId) -> Result<&mut CartItem, DomainError> {
        self.items
            .get_mut(product_id)
            .ok_or(DomainError::ProductNotInCart {
                product_id: *product_id,
            })
    }

    fn apply_product_added(&mut self, data: ProductAddedToCartData) {
        self.id = data.cart_id;

        // Repeated adds bump the quantity; the unit price stays what the
        // first insertion recorded, the event's price is ignored.
        self.items
            .entry(data.product_id)
            .and_modify(CartItem::increment_quantity)
            .or_insert_with(|| CartItem::new(data.product_id, 1, data.price));
    }

    fn apply_amount_changed(&mut self, data: AmountOfProductChangedData) {
        match self.find_item_mut(&data.product_id) {
            Ok(item) => item.change_amount(data.amount),
            Err(_) => debug!(
                product_id = %data.product_id,
                "ignoring amount change for product not in cart"
            ),
        }
    }

    fn apply_product_removed(&mut self, data: ProductRemovedFromCartData) {
        if self.find_item(&data.product_id).is_ok() {
            self.items.remove(&data.product_id);
        } else {
            debug!(
                product_id = %data.product_id,
                "ignoring removal of product not in cart"
            );
        }
    }

    fn apply_total_price_calculated(&mut self) {
        self.total_price = self.items.values().map(CartItem::total_price).sum();
    }
}
