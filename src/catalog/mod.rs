//! @ai:module:intent Product catalog rows and CSV loading
//! @ai:module:layer domain
//! @ai:module:public_api ProductRow, Action, CatalogReader

pub mod reader;
pub mod row;

pub use reader::CatalogReader;
pub use row::{Action, ProductRow};
