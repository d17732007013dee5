use anyhow::Result;
use log::error;
use serde::{Deserialize, Serialize};

use crate::storefront::KeyValueStore;

/// Storage key of the persisted cart
pub const CART_KEY: &str = "timberCart";

/// What the catalog backend knows about a product, as far as the cart is concerned.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub unit: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

/// Shopping cart: one line per product, in the order products were first added.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
    pub is_open: bool,
}

impl Cart {
    /// The persisted cart. Unreadable data is logged and treated as an empty cart.
    pub fn load(store: &impl KeyValueStore) -> Cart {
        let Some(raw) = store.get(CART_KEY) else {
            return Cart::default();
        };
        match serde_json::from_str::<Vec<CartItem>>(&raw) {
            Ok(items) => Cart {
                items,
                is_open: false,
            },
            Err(err) => {
                error!("error parsing saved cart: {err}");
                Cart::default()
            }
        }
    }

    pub fn save(&self, store: &mut impl KeyValueStore) -> Result<()> {
        store.set(CART_KEY, serde_json::to_string(&self.items)?)
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Adds `quantity` of `product`, merging with an existing line for the same product.
    /// Opens the cart.
    pub fn add(&mut self, product: Product, quantity: u32) {
        match self.items.iter_mut().find(|i| i.product.id == product.id) {
            Some(item) => item.quantity += quantity,
            None => self.items.push(CartItem { product, quantity }),
        }
        self.is_open = true;
    }

    pub fn remove(&mut self, product_id: u64) {
        self.items.retain(|i| i.product.id != product_id);
    }

    /// Sets the quantity of a line. Quantities below 1 are ignored.
    pub fn update_quantity(&mut self, product_id: u64, quantity: u32) {
        if quantity < 1 {
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product_id) {
            item.quantity = quantity;
        }
    }

    pub fn total(&self) -> f64 {
        self.items
            .iter()
            .map(|i| i.product.price * i.quantity as f64)
            .sum()
    }

    /// Total number of units in the cart
    pub fn count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
