//! Command implementations

mod init;
mod review;
mod schema;

pub use init::init;
pub use review::{average, create, delete, list, show};
pub use schema::schema;
