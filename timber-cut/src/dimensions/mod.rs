//! Everything that turns piece geometry into user-facing numbers, and back.
//!
//! Geometry lives in abstract local units. One unit along the local y-axis is 2 feet of length,
//! one unit along the local x-axis is 12 inches of width and one unit of thickness is 10 inches.
//! Every read or write from the outside crosses [`units`].

mod board_feet;
mod presets;
pub mod units;

#[doc(inline)]
pub use board_feet::Dimensions;
#[doc(inline)]
pub use board_feet::board_feet;
#[doc(inline)]
pub use board_feet::estimate_price;
#[doc(inline)]
pub use presets::DimAxis;
#[doc(inline)]
pub use presets::ShapePreset;
#[doc(inline)]
pub use presets::apply_shape_preset;
#[doc(inline)]
pub use presets::apply_size_preset;
#[doc(inline)]
pub use presets::set_dimension;
