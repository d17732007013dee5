mod catalog;
mod piece;
mod standard_size;
mod wood_type;

#[doc(inline)]
pub use catalog::Catalog;
#[doc(inline)]
pub use piece::Piece;
#[doc(inline)]
pub use piece::PieceKey;
#[doc(inline)]
pub use piece::PieceKind;
#[doc(inline)]
pub use standard_size::StandardSize;
#[doc(inline)]
pub use standard_size::STANDARD_SIZES;
#[doc(inline)]
pub use wood_type::WoodType;
