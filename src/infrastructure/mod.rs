pub mod models;
pub mod order_store;
