//! Publication search page and its result list.

mod item_list;
mod pagination;
mod publication_page;

pub use item_list::{ItemList, ResultItem};
pub use pagination::Pagination;
pub use publication_page::PublicationPage;
