//! HTTP adapter for the remote finance API.

mod http;

pub use http::HttpApi;
