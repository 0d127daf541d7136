//! Cart aggregate and related types.

mod aggregate;
mod commands;
mod events;
mod value_objects;

pub use aggregate::Cart;
pub use commands::{AddProductToCart, CartCommand, ChangeAmountOfProduct};
pub use events::{
    AmountOfProductChangedData, CartEvent, ProductAddedToCartData, ProductRemovedFromCartData,
};
pub use value_objects::{CartId, CartItem, Price, ProductId};
