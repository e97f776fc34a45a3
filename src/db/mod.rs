pub mod connection;
pub mod properties;

pub use connection::Database;
pub use properties::{count_listings, insert_listing, load_listings};
