//! Category and product management.

pub mod category;
pub mod policy;
pub mod product;

pub use category::CategoryService;
pub use product::ProductService;
