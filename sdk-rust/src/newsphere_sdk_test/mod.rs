//! Test doubles for the endpoint seam, so dependent crates can exercise
//! the store layer without a network.

mod client;

pub use client::MockApiClient;
