mod cut_list;
pub mod ext_repr;
mod export;
mod import;

#[doc(inline)]
pub use cut_list::CUT_LIST_FILE_NAME;
#[doc(inline)]
pub use cut_list::CUT_LIST_HEADER;
#[doc(inline)]
pub use cut_list::CutListRow;
#[doc(inline)]
pub use cut_list::cut_list;
#[doc(inline)]
pub use cut_list::cut_list_csv;
#[doc(inline)]
pub use cut_list::rows_to_csv;
#[doc(inline)]
pub use export::export;
#[doc(inline)]
pub use import::import;
