pub mod geo_enums;
pub mod geo_traits;
pub mod primitives;
mod slice;

#[doc(inline)]
pub use slice::bounds;
#[doc(inline)]
pub use slice::centroid;
#[doc(inline)]
pub use slice::intersect_infinite_with_segment;
#[doc(inline)]
pub use slice::is_left;
#[doc(inline)]
pub use slice::slice_polygon;
