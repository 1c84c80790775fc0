//! REST binding to the Kinetic service
//!
//! A thin `reqwest` client over the service's JSON API: airdrop requests,
//! blockhash lookup, and submission of partially-signed account-creation
//! transactions for countersigning and broadcast.

pub mod client;
pub mod models;

pub use client::{ApiError, KineticClient};
