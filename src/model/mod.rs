pub mod api;
pub mod cart;
pub mod order;
pub mod product;
pub mod user;
