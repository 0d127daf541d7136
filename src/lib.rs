//! Shopping cart domain for an event-sourced system.
//!
//! This crate provides the core domain abstractions including:
//! - Aggregate trait for event-sourced entities
//! - DomainEvent trait for domain events
//! - Cart aggregate with command validation and event replay
//!
//! Persistence, command routing, and transport are external collaborators:
//! this crate validates commands against the current state and projects state
//! from an ordered event stream, nothing more. It performs no I/O and holds
//! no references outside the aggregate it owns.

pub mod aggregate;
pub mod cart;
pub mod error;

pub use aggregate::{Aggregate, DomainEvent};
pub use cart::{
    AddProductToCart, AmountOfProductChangedData, Cart, CartCommand, CartEvent, CartId, CartItem,
    ChangeAmountOfProduct, Price, ProductAddedToCartData, ProductId, ProductRemovedFromCartData,
};
pub use error::DomainError;
