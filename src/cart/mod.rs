//! Cart

use rust_decimal::Decimal;

use crate::{
    orders::OrderItem,
    products::{Product, ProductId},
};

/// One product line inside a cart.
///
/// Holds a snapshot of the product taken when the line was created; later
/// catalog changes never affect an existing line.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    product: Product,
    quantity: u32,
}

impl CartLine {
    /// Returns the product snapshot for this line.
    #[must_use]
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Returns the quantity for this line.
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns the line subtotal (snapshot price times quantity).
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// Cart
///
/// Insertion-ordered collection of product lines with derived totals. At
/// most one line exists per product id, and quantities are always at least
/// one; every operation leaves the cart in a valid state.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Adds `quantity` units of `product`.
    ///
    /// Increments the existing line when the product is already in the cart,
    /// otherwise appends a new line. Adding zero units changes nothing.
    pub fn add(&mut self, product: Product, quantity: u32) {
        if quantity == 0 {
            return;
        }

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product.id == product.id)
        {
            line.quantity += quantity;
            return;
        }

        self.lines.push(CartLine { product, quantity });
    }

    /// Removes the line for `id`; does nothing when absent.
    pub fn remove(&mut self, id: ProductId) {
        self.lines.retain(|line| line.product.id != id);
    }

    /// Replaces the quantity for `id`; zero removes the line entirely.
    ///
    /// Does nothing when the product is not in the cart.
    pub fn set_quantity(&mut self, id: ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove(id);
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|line| line.product.id == id) {
            line.quantity = quantity;
        }
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Total number of units across all lines; zero for an empty cart.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(CartLine::quantity).sum()
    }

    /// Total price across all lines, using each line's snapshot price; zero
    /// for an empty cart.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.lines.iter().map(|line| line.subtotal()).sum()
    }

    /// Returns the line for `id`, if present.
    #[must_use]
    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product.id == id)
    }

    /// Iterate over the lines in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.iter()
    }

    /// Number of lines in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Projects the cart into the order wire shape, preserving line order.
    #[must_use]
    pub fn order_items(&self) -> Vec<OrderItem> {
        self.lines
            .iter()
            .map(|line| OrderItem {
                product_id: line.product.id,
                quantity: line.quantity,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32, price: u32) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: Decimal::from(price),
            unit: "kg".to_string(),
            distance_km: 2.0,
            image: String::new(),
            farmer: "Test Farm".to_string(),
            rating: 4.5,
            category: "Vegetables".to_string(),
            description: String::new(),
            stock: 10,
        }
    }

    #[test]
    fn add_same_product_twice_merges_into_one_line() {
        let mut cart = Cart::new();

        cart.add(product(1, 45), 1);
        cart.add(product(1, 45), 1);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_items(), 2);
    }

    #[test]
    fn add_accumulates_quantities_and_price() {
        let mut cart = Cart::new();

        cart.add(product(1, 45), 1);
        cart.add(product(1, 45), 2);

        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.total_price(), Decimal::from(135));
    }

    #[test]
    fn add_zero_units_changes_nothing() {
        let mut cart = Cart::new();

        cart.add(product(1, 45), 0);

        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
    }

    #[test]
    fn add_keeps_insertion_order() {
        let mut cart = Cart::new();

        cart.add(product(2, 30), 1);
        cart.add(product(1, 45), 1);
        cart.add(product(3, 15), 1);
        cart.add(product(1, 45), 1);

        let ids: Vec<ProductId> = cart.iter().map(|line| line.product().id).collect();

        assert_eq!(
            ids,
            vec![ProductId::new(2), ProductId::new(1), ProductId::new(3)]
        );
    }

    #[test]
    fn snapshot_price_survives_catalog_changes() {
        let mut cart = Cart::new();
        let mut listed = product(1, 45);

        cart.add(listed.clone(), 1);

        // Catalog price moves after the line was taken.
        listed.price = Decimal::from(90);

        assert_eq!(cart.total_price(), Decimal::from(45));
    }

    #[test]
    fn remove_deletes_line() {
        let mut cart = Cart::new();

        cart.add(product(1, 45), 2);
        cart.remove(ProductId::new(1));

        assert!(cart.is_empty());
        assert!(cart.line(ProductId::new(1)).is_none());
    }

    #[test]
    fn remove_absent_id_is_a_no_op() {
        let mut cart = Cart::new();

        cart.add(product(1, 45), 1);
        cart.remove(ProductId::new(99));

        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn set_quantity_replaces_stored_quantity() {
        let mut cart = Cart::new();

        cart.add(product(1, 45), 1);
        cart.set_quantity(ProductId::new(1), 5);

        assert_eq!(cart.total_items(), 5);
        assert_eq!(cart.total_price(), Decimal::from(225));
    }

    #[test]
    fn set_quantity_zero_removes_line() {
        let mut cart = Cart::new();

        cart.add(product(1, 45), 2);
        cart.add(product(2, 30), 1);
        cart.set_quantity(ProductId::new(1), 0);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_items(), 1);
        assert!(cart.line(ProductId::new(1)).is_none());
    }

    #[test]
    fn set_quantity_absent_id_is_a_no_op() {
        let mut cart = Cart::new();

        cart.add(product(1, 45), 1);
        cart.set_quantity(ProductId::new(99), 3);

        assert_eq!(cart.total_items(), 1);
    }

    #[test]
    fn clear_empties_the_cart() {
        let mut cart = Cart::new();

        cart.add(product(1, 45), 2);
        cart.add(product(2, 30), 1);
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), Decimal::ZERO);
    }

    #[test]
    fn totals_are_zero_for_empty_cart() {
        let cart = Cart::new();

        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), Decimal::ZERO);
    }

    #[test]
    fn line_subtotal_multiplies_price_by_quantity() {
        let mut cart = Cart::new();

        cart.add(product(1, 45), 3);

        let line = cart.line(ProductId::new(1));

        assert!(line.is_some_and(|line| line.subtotal() == Decimal::from(135)));
    }

    #[test]
    fn order_items_projects_ids_and_quantities_in_order() {
        let mut cart = Cart::new();

        cart.add(product(2, 30), 2);
        cart.add(product(1, 45), 1);

        let items = cart.order_items();

        assert_eq!(
            items,
            vec![
                OrderItem {
                    product_id: ProductId::new(2),
                    quantity: 2,
                },
                OrderItem {
                    product_id: ProductId::new(1),
                    quantity: 1,
                },
            ]
        );
    }
}
