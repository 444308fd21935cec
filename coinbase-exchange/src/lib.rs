pub mod config;
pub mod error;
pub mod exchange;
pub mod protocols;
pub mod shared;
