//! Minimal client for the Bitquery streaming GraphQL API.
//!
//! Only the EVM `Events` cube is modelled: enough to ask for the newest
//! log emitted by a contract and read its decoded arguments.

pub mod client;
pub mod error;
pub mod query;
pub mod types;

pub use client::*;
pub use error::*;
pub use query::*;
pub use types::*;

pub const STREAMING_ENDPOINT: &str = "https://streaming.bitquery.io/graphql";
