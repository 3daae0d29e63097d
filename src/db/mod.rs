pub mod connection;
pub mod favorites;
pub mod seen;

pub use connection::{init_db, Database};
