pub mod config;
pub mod error;
pub mod friends;
pub mod identity;
pub mod invites;
pub mod messages;
pub mod rooms;

pub use config::Config;
pub use error::{AppError, AppResult};
