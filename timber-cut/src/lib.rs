//! Log-cutting geometry engine and lumber dimension model of the virtual sawmill configurator.
//!
//! A piece of lumber is modelled as a 2D cross-section [`Polygon`](geometry::primitives::Polygon)
//! extruded to a thickness. Saw passes bisect that polygon with an infinite line, producing two new
//! pieces which are recentered and pushed apart along the cut seam.

/// Geometric primitives and the polygon slicing kernel
pub mod geometry;

/// Lumber pieces, the catalog holding them, materials and standard sizes
pub mod entities;

/// Locating and splitting pieces with a saw pass
pub mod cut;

/// Unit conversion, board feet, pricing and dimension presets
pub mod dimensions;

/// Cut list export and the external (serializable) representation of a catalog
pub mod io;

/// The interactive configurator session driven by a scene/input layer
pub mod session;

/// Application context of the storefront: theme, cart and checkout summary
pub mod storefront;

/// Helper functions which do not belong to any specific module
pub mod util;
