pub mod auth;
pub mod coinbase_client;
pub mod request_builder;
pub mod requests;

pub use auth::CoinbaseAuth;
pub use coinbase_client::CoinbaseClient;
