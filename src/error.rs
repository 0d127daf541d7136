//! Domain error types.

use thiserror::Error;

use crate::cart::ProductId;

/// Errors that can occur during cart domain operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A price or quantity argument was zero or negative.
    #[error("Amount must be positive: {amount}")]
    AmountMustBePositive { amount: i64 },

    /// The referenced product is not in the cart.
    ///
    /// Inside event application this is a recoverable lookup signal, not a
    /// failure of the event stream.
    #[error("Product not in cart: {product_id}")]
    ProductNotInCart { product_id: ProductId },
}
