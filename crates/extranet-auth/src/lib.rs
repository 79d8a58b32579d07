#![doc = include_str!("../README.md")]

mod auth_client;

#[allow(missing_docs)]
pub mod flow;
#[allow(missing_docs)]
pub mod provider;

pub use auth_client::AuthClient;
