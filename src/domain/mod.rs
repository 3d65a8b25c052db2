pub mod auth;
pub mod category;
pub mod product;
pub mod supplier;
pub mod transaction;
pub mod user;
