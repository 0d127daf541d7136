//! Value objects for the cart domain.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a cart.
///
/// Wraps a UUID to provide type safety and prevent mixing up cart
/// identifiers with other UUID-based identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartId(Uuid);

impl CartId {
    /// Creates a new random cart ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a cart ID from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for CartId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for CartId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<CartId> for Uuid {
    fn from(id: CartId) -> Self {
        id.0
    }
}

/// Unique identifier for a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(Uuid);

impl ProductId {
    /// Creates a new random product ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a product ID from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for ProductId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<ProductId> for Uuid {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

/// Monetary amount represented in cents to avoid floating point issues.
///
/// Construction does not reject zero; the command layer is what refuses
/// non-positive prices before an event is ever created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Price {
    /// Amount in cents (e.g., 1000 = $10.00)
    cents: i64,
}

impl Price {
    /// Creates a new price from cents.
    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Returns the zero price.
    pub fn zero() -> Self {
        Self { cents: 0 }
    }

    /// Returns the amount in cents.
    pub fn cents(&self) -> i64 {
        self.cents
    }

    /// Returns true if the amount is positive.
    pub fn is_positive(&self) -> bool {
        self.cents > 0
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Multiplies by a quantity.
    pub fn multiply(&self, quantity: u32) -> Price {
        Price {
            cents: self.cents * quantity as i64,
        }
    }
}

impl Default for Price {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}.{:02}", self.cents / 100, self.cents % 100)
    }
}

impl std::ops::Add for Price {
    type Output = Price;

    fn add(self, rhs: Self) -> Self::Output {
        Price {
            cents: self.cents + rhs.cents,
        }
    }
}

impl std::ops::AddAssign for Price {
    fn add_assign(&mut self, rhs: Self) {
        self.cents += rhs.cents;
    }
}

impl std::iter::Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Self {
        iter.fold(Price::zero(), |total, price| total + price)
    }
}

/// A product line in a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// The product this line tracks.
    pub product_id: ProductId,

    /// Quantity in the cart, at least 1 while the line exists.
    pub quantity: u32,

    /// Price per unit, fixed when the product is first added.
    pub unit_price: Price,
}

impl CartItem {
    /// Creates a new cart item.
    pub fn new(product_id: ProductId, quantity: u32, unit_price: Price) -> Self {
        Self {
            product_id,
            quantity,
            unit_price,
        }
    }

    /// Increments the quantity by one.
    pub fn increment_quantity(&mut self) {
        self.quantity += 1;
    }

    /// Replaces the quantity with an absolute new amount.
    pub fn change_amount(&mut self, amount: u32) {
        self.quantity = amount;
    }

    /// Returns the total price for this line (quantity * unit_price).
    pub fn total_price(&self) -> Price {
        self.unit_price.multiply(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cart_id_new_creates_unique_ids() {
        let id1 = CartId::new();
        let id2 = CartId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn product_id_from_uuid_preserves_value() {
        let uuid = Uuid::new_v4();
        let id = ProductId::from_uuid(uuid);
        assert_eq!(id.as_uuid(), uuid);
    }

    #[test]
    fn test_price_from_cents() {
        let price = Price::from_cents(1234);
        assert_eq!(price.cents(), 1234);
        assert!(price.is_positive());
        assert!(!price.is_zero());
    }

    #[test]
    fn test_price_display() {
        assert_eq!(Price::from_cents(1234).to_string(), "$12.34");
        assert_eq!(Price::from_cents(100).to_string(), "$1.00");
        assert_eq!(Price::from_cents(5).to_string(), "$0.05");
    }

    #[test]
    fn test_price_arithmetic() {
        let a = Price::from_cents(1000);
        let b = Price::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!(a.multiply(3).cents(), 3000);

        let mut total = Price::zero();
        total += b;
        assert_eq!(total.cents(), 500);
    }

    #[test]
    fn test_price_sum() {
        let total: Price = [100, 250, 99].map(Price::from_cents).into_iter().sum();
        assert_eq!(total.cents(), 449);

        let empty: Price = std::iter::empty::<Price>().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_cart_item_total_price() {
        let item = CartItem::new(ProductId::new(), 3, Price::from_cents(1000));
        assert_eq!(item.total_price().cents(), 3000);
    }

    #[test]
    fn test_cart_item_increment_quantity() {
        let mut item = CartItem::new(ProductId::new(), 1, Price::from_cents(500));
        item.increment_quantity();
        item.increment_quantity();
        assert_eq!(item.quantity, 3);
    }

    #[test]
    fn test_cart_item_change_amount_is_absolute() {
        let mut item = CartItem::new(ProductId::new(), 2, Price::from_cents(500));
        item.change_amount(5);
        assert_eq!(item.quantity, 5);
        assert_eq!(item.unit_price.cents(), 500);
    }

    #[test]
    fn test_cart_item_serialization() {
        let item = CartItem::new(ProductId::new(), 2, Price::from_cents(999));
        let json = serde_json::to_string(&item).unwrap();
        let deserialized: CartItem = serde_json::from_str(&json).unwrap();
        assert_eq!(item, deserialized);
    }
}
