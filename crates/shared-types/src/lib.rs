pub mod claims;
pub mod config;
pub mod error;
pub mod role;

pub use claims::*;
pub use config::*;
pub use error::*;
pub use role::*;
