use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use foodie_catalog::Product;
use foodie_core::{Entity, ProductId};

/// Cart line: a product and how many of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    #[serde(flatten)]
    product: Product,
    /// Always at least 1; an entry at zero is removed instead.
    qty: u32,
}

impl CartEntry {
    fn new(product: Product) -> Self {
        Self { product, qty: 1 }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn qty(&self) -> u32 {
        self.qty
    }

    /// `price * qty` for this line.
    pub fn line_total(&self) -> Decimal {
        self.product.price() * Decimal::from(self.qty)
    }
}

impl Entity for CartEntry {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        self.product.id_typed()
    }
}

/// Client-side shopping cart.
///
/// Entries are unique by product id and kept in first-add order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `product`.
    ///
    /// Repeat adds bump the existing entry in place; a new product is appended.
    /// Availability is not checked.
    pub fn add(&mut self, product: &Product) {
        match self
            .entries
            .iter_mut()
            .find(|e| e.product.id_typed() == product.id_typed())
        {
            Some(entry) => entry.qty = entry.qty.saturating_add(1),
            None => self.entries.push(CartEntry::new(product.clone())),
        }
    }

    /// Drop the entry for `product_id`. Unknown ids are ignored.
    pub fn remove(&mut self, product_id: &ProductId) {
        self.entries.retain(|e| e.product.id_typed() != product_id);
    }

    /// Sum of `price * qty`; zero for an empty cart.
    pub fn subtotal(&self) -> Decimal {
        self.entries.iter().map(CartEntry::line_total).sum()
    }

    /// Sum of quantities; zero for an empty cart.
    pub fn count(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.qty)).sum()
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn get(&self, product_id: &ProductId) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.product.id_typed() == product_id)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pizza() -> Product {
        Product::new(1u64, "Cheese Pizza", "", "Pizza", Decimal::new(95, 1), true).unwrap()
    }

    fn burger() -> Product {
        Product::new(2u64, "Veggie Burger", "", "Burgers", Decimal::new(70, 1), true).unwrap()
    }

    #[test]
    fn empty_cart_totals_are_zero() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.count(), 0);
        assert_eq!(cart.subtotal(), Decimal::ZERO);
    }

    #[test]
    fn adding_same_product_twice_merges_into_one_entry() {
        let mut cart = Cart::new();
        cart.add(&pizza());
        cart.add(&pizza());

        assert_eq!(cart.entries().len(), 1);
        assert_eq!(cart.entries()[0].qty(), 2);
        assert_eq!(cart.count(), 2);
        assert_eq!(cart.subtotal(), pizza().price() * Decimal::from(2));
    }

    #[test]
    fn repeat_add_preserves_position() {
        let mut cart = Cart::new();
        cart.add(&pizza());
        cart.add(&burger());
        cart.add(&pizza());

        let ids: Vec<&ProductId> = cart.entries().iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec![&ProductId::numeric(1), &ProductId::numeric(2)]);
        assert_eq!(cart.get(&ProductId::numeric(1)).map(CartEntry::qty), Some(2));
        assert_eq!(cart.get(&ProductId::numeric(2)).map(CartEntry::qty), Some(1));
    }

    #[test]
    fn removing_absent_id_is_a_no_op() {
        let mut cart = Cart::new();
        cart.remove(&ProductId::numeric(99));
        assert!(cart.is_empty());

        cart.add(&burger());
        cart.remove(&ProductId::numeric(99));
        cart.remove(&ProductId::numeric(2));
        cart.remove(&ProductId::numeric(2));
        assert!(cart.is_empty());
    }

    #[test]
    fn sold_out_products_can_be_added() {
        let sold_out =
            Product::new("mochi", "Mochi", "", "Desserts", Decimal::new(450, 2), false).unwrap();
        let mut cart = Cart::new();
        cart.add(&sold_out);
        assert_eq!(cart.count(), 1);
    }

    #[test]
    fn scenario_add_twice_then_remove() {
        let mut cart = Cart::new();
        cart.add(&pizza());
        cart.add(&pizza());
        assert_eq!(cart.entries().len(), 1);
        assert_eq!(cart.subtotal(), Decimal::new(190, 1));

        cart.remove(&ProductId::numeric(1));
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), Decimal::ZERO);
    }

    #[test]
    fn entries_serialize_flat_with_qty() {
        let mut cart = Cart::new();
        cart.add(&pizza());
        let json = serde_json::to_value(&cart).unwrap();
        assert_eq!(json["entries"][0]["id"], 1);
        assert_eq!(json["entries"][0]["title"], "Cheese Pizza");
        assert_eq!(json["entries"][0]["qty"], 1);
    }

    #[test]
    fn cart_round_trips_through_json() {
        let mut cart = Cart::new();
        cart.add(&pizza());
        cart.add(&pizza());
        let mochi =
            Product::new("mochi", "Mochi", "Rice cake", "Desserts", Decimal::new(450, 2), false)
                .unwrap();
        cart.add(&mochi);

        let json = serde_json::to_string(&cart).unwrap();
        let restored: Cart = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, cart);
        assert_eq!(restored.count(), 3);
        assert_eq!(restored.subtotal(), Decimal::new(2350, 2));
        assert_eq!(restored.entries()[1].product().price(), Decimal::new(450, 2));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Add(u64),
            Remove(u64),
        }

        fn arb_op() -> impl Strategy<Value = Op> {
            prop_oneof![
                3 => (0u64..6).prop_map(Op::Add),
                1 => (0u64..6).prop_map(Op::Remove),
            ]
        }

        fn product(id: u64) -> Product {
            Product::new(id, format!("Dish {id}"), "", "Menu", Decimal::new(id as i64 * 100 + 25, 2), true)
                .unwrap()
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: the cart agrees with a naive (id, qty) model after any op sequence.
            #[test]
            fn cart_matches_reference_model(ops in prop::collection::vec(arb_op(), 0..64)) {
                let mut cart = Cart::new();
                let mut model: Vec<(u64, u32)> = Vec::new();

                for op in &ops {
                    match *op {
                        Op::Add(id) => {
                            cart.add(&product(id));
                            match model.iter_mut().find(|(m, _)| *m == id) {
                                Some((_, qty)) => *qty += 1,
                                None => model.push((id, 1)),
                            }
                        }
                        Op::Remove(id) => {
                            cart.remove(&ProductId::numeric(id));
                            model.retain(|(m, _)| *m != id);
                        }
                    }
                }

                let actual: Vec<(u64, u32)> = cart
                    .entries()
                    .iter()
                    .map(|e| match e.product().id_typed() {
                        ProductId::Number(n) => (n.as_u64().unwrap(), e.qty()),
                        ProductId::Text(_) => unreachable!("numeric ids only"),
                    })
                    .collect();
                prop_assert_eq!(&actual, &model);

                let expected_count: u64 = model.iter().map(|(_, q)| u64::from(*q)).sum();
                prop_assert_eq!(cart.count(), expected_count);

                let expected_subtotal: Decimal = model
                    .iter()
                    .map(|(id, q)| product(*id).price() * Decimal::from(*q))
                    .sum();
                prop_assert_eq!(cart.subtotal(), expected_subtotal);
                prop_assert!(cart.entries().iter().all(|e| e.qty() >= 1));
            }
        }
    }
}
