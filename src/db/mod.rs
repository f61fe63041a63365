pub mod connection;
pub mod credentials;

pub use connection::{init_db, Database};
