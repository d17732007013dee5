//! Process-wide state of the storefront, scoped explicitly in an [`AppContext`] instead of ambient globals.

mod app_context;
mod cart;
mod order;
mod store;
mod theme;

#[doc(inline)]
pub use app_context::AppContext;
#[doc(inline)]
pub use cart::CART_KEY;
#[doc(inline)]
pub use cart::Cart;
#[doc(inline)]
pub use cart::CartItem;
#[doc(inline)]
pub use cart::Product;
#[doc(inline)]
pub use order::OrderSummary;
#[doc(inline)]
pub use store::JsonFileStore;
#[doc(inline)]
pub use store::KeyValueStore;
#[doc(inline)]
pub use store::MemoryStore;
#[doc(inline)]
pub use theme::THEME_KEY;
#[doc(inline)]
pub use theme::Theme;
