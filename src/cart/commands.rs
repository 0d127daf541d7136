//! Cart commands.

use super::ProductId;

/// Commands that can be issued against a cart aggregate.
///
/// A command is an intent to change state, subject to validation before it
/// may produce an event. Fields validation does not inspect (the product id)
/// travel with the command so the collaborator that turns an accepted command
/// into an event has everything it needs.
#[derive(Debug, Clone)]
pub enum CartCommand {
    /// Add a product to the cart at a proposed unit price.
    AddProductToCart(AddProductToCart),

    /// Set the quantity of a product to a new absolute amount.
    ChangeAmountOfProduct(ChangeAmountOfProduct),
}

/// Command to add a product to the cart.
#[derive(Debug, Clone)]
pub struct AddProductToCart {
    /// The product to add.
    pub product_id: ProductId,

    /// Proposed unit price in cents; signed because pre-validation values
    /// may be non-positive.
    pub price: i64,
}

impl AddProductToCart {
    /// Creates a new AddProductToCart command.
    pub fn new(product_id: ProductId, price: i64) -> Self {
        Self { product_id, price }
    }
}

impl From<AddProductToCart> for CartCommand {
    fn from(cmd: AddProductToCart) -> Self {
        CartCommand::AddProductToCart(cmd)
    }
}

/// Command to change the quantity of a product in the cart.
#[derive(Debug, Clone)]
pub struct ChangeAmountOfProduct {
    /// The product whose quantity should change.
    pub product_id: ProductId,

    /// Proposed absolute quantity; signed because pre-validation values may
    /// be non-positive.
    pub amount: i64,
}

impl ChangeAmountOfProduct {
    /// Creates a new ChangeAmountOfProduct command.
    pub fn new(product_id: ProductId, amount: i64) -> Self {
        Self { product_id, amount }
    }
}

impl From<ChangeAmountOfProduct> for CartCommand {
    fn from(cmd: ChangeAmountOfProduct) -> Self {
        CartCommand::ChangeAmountOfProduct(cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_product_command() {
        let product_id = ProductId::new();

        let cmd = AddProductToCart::new(product_id, 1000);
        assert_eq!(cmd.product_id, product_id);
        assert_eq!(cmd.price, 1000);
    }

    #[test]
    fn test_change_amount_command() {
        let product_id = ProductId::new();

        let cmd = ChangeAmountOfProduct::new(product_id, 5);
        assert_eq!(cmd.product_id, product_id);
        assert_eq!(cmd.amount, 5);
    }

    #[test]
    fn test_commands_convert_into_variants() {
        let product_id = ProductId::new();

        let cmd: CartCommand = AddProductToCart::new(product_id, 250).into();
        assert!(matches!(cmd, CartCommand::AddProductToCart(_)));

        let cmd: CartCommand = ChangeAmountOfProduct::new(product_id, 2).into();
        assert!(matches!(cmd, CartCommand::ChangeAmountOfProduct(_)));
    }
}
