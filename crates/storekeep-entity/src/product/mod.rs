//! Product domain entities.

pub mod model;
pub mod text_list;

pub use model::{CreateProduct, Product, UpdateProduct};
pub use text_list::{decode_text_list, encode_text_list};
