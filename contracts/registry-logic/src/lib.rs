pub mod auth;
pub mod contract;
pub mod directory;
mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
