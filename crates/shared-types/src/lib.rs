pub mod claims;
pub mod config;
pub mod error;
pub mod menu;
pub mod requests;
pub mod role;

pub use claims::*;
pub use config::*;
pub use error::*;
pub use menu::*;
pub use requests::*;
pub use role::*;
