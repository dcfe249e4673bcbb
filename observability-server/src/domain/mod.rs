pub mod error;
pub mod post;
pub mod product;
