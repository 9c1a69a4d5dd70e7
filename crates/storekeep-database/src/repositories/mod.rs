//! Concrete repository implementations.

pub mod category;
pub mod counter;
pub mod product;
pub mod user;

pub use category::CategoryRepository;
pub use product::ProductRepository;
pub use user::UserRepository;
