//! HTTP transport for the JurisREM API

pub mod client;

pub use client::{HttpClient, HttpClientBuilder};
