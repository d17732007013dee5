mod cut_engine;

#[doc(inline)]
pub use cut_engine::CutEffect;
#[doc(inline)]
pub use cut_engine::CutEngine;
#[doc(inline)]
pub use cut_engine::CutError;
#[doc(inline)]
pub use cut_engine::CutReport;
#[doc(inline)]
pub use cut_engine::CutRequest;
