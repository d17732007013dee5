use anyhow::Result;
use log::debug;

use crate::storefront::{Cart, KeyValueStore, OrderSummary, Product, THEME_KEY, Theme};

/// Theme and cart of one storefront session, persisted through `S`.
///
/// Every mutation goes through a method here and is written back to the store immediately.
#[derive(Debug)]
pub struct AppContext<S: KeyValueStore> {
    theme: Theme,
    cart: Cart,
    store: S,
}

impl<S: KeyValueStore> AppContext<S> {
    /// Restores theme and cart from `store`, falling back to the system theme preference.
    pub fn new(store: S, system_prefers_dark: bool) -> Self {
        let theme = Theme::load(&store, system_prefers_dark);
        let cart = Cart::load(&store);
        debug!(
            "[APP] restored {:?} theme and {} cart lines",
            theme,
            cart.items().len()
        );
        AppContext { theme, cart, store }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle_theme(&mut self) -> Result<Theme> {
        self.theme = self.theme.toggled();
        self.store.set(THEME_KEY, self.theme.as_str().to_string())?;
        Ok(self.theme)
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn set_cart_open(&mut self, open: bool) {
        self.cart.is_open = open;
    }

    pub fn add_to_cart(&mut self, product: Product, quantity: u32) -> Result<()> {
        self.cart.add(product, quantity);
        self.cart.save(&mut self.store)
    }

    pub fn remove_from_cart(&mut self, product_id: u64) -> Result<()> {
        self.cart.remove(product_id);
        self.cart.save(&mut self.store)
    }

    pub fn update_quantity(&mut self, product_id: u64, quantity: u32) -> Result<()> {
        self.cart.update_quantity(product_id, quantity);
        self.cart.save(&mut self.store)
    }

    pub fn checkout_summary(&self) -> OrderSummary {
        OrderSummary::from_cart(&self.cart)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
